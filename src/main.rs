fn main() {
    if let Err(err) = enclosure_art::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
