use crate::artwork::{Artwork, compose};
use crate::config::load_config;
use crate::log::info;
use crate::render::{render_svg, write_output_png, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "encart", version, about = "Procedural SVG artwork for enclosure panels")]
pub struct Args {
    /// Artworks to generate (all of them when omitted)
    #[arg(value_enum)]
    pub artworks: Vec<Artwork>,

    /// Output file or directory. Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file overriding the built-in artwork constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// PNG pixels per SVG user unit
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        config.render.scale = scale;
        config.validate()?;
    }

    let artworks = if args.artworks.is_empty() {
        Artwork::ALL.to_vec()
    } else {
        args.artworks.clone()
    };

    if artworks.len() == 1 {
        let svg = render_svg(&compose(artworks[0], &config));
        match args.output_format {
            OutputFormat::Svg => {
                write_output_svg(&svg, args.output.as_deref())?;
            }
            OutputFormat::Png => {
                let output = ensure_output(&args.output, "png")?;
                write_output_png(&svg, &output, &config.render)?;
            }
        }
        info!(artwork = artworks[0].name(), "rendered artwork");
        return Ok(());
    }

    // Several artworks without a destination go to stdout back to back.
    if args.output.is_none() && args.output_format == OutputFormat::Svg {
        for artwork in &artworks {
            let svg = render_svg(&compose(*artwork, &config));
            write_output_svg(&svg, None)?;
        }
        return Ok(());
    }

    let outputs = resolve_multi_outputs(args.output.as_deref(), args.output_format, &artworks)?;
    for (artwork, output) in artworks.iter().zip(&outputs) {
        let svg = render_svg(&compose(*artwork, &config));
        match args.output_format {
            OutputFormat::Svg => {
                write_output_svg(&svg, Some(output.as_path()))?;
            }
            OutputFormat::Png => {
                write_output_png(&svg, output, &config.render)?;
            }
        }
        info!(artwork = artwork.name(), path = %output.display(), "wrote artwork");
    }

    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

fn resolve_multi_outputs(
    output: Option<&Path>,
    format: OutputFormat,
    artworks: &[Artwork],
) -> Result<Vec<PathBuf>> {
    let ext = format.extension();
    let base = output.ok_or_else(|| {
        anyhow::anyhow!("Output path required for {} output of several artworks", ext)
    })?;
    if names_directory(base) {
        std::fs::create_dir_all(base)?;
    }
    if base.is_dir() {
        return Ok(artworks
            .iter()
            .map(|artwork| base.join(format!("{}.{}", artwork.name(), ext)))
            .collect());
    }
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("artwork");
    let parent = base.parent().unwrap_or_else(|| Path::new("."));
    Ok(artworks
        .iter()
        .map(|artwork| parent.join(format!("{}-{}.{}", stem, artwork.name(), ext)))
        .collect())
}

/// A trailing separator marks a directory that may not exist yet.
fn names_directory(path: &Path) -> bool {
    path.as_os_str()
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_artworks_and_options() {
        let args = Args::try_parse_from([
            "encart", "dial", "vent", "-e", "png", "-o", "out", "--scale", "4",
        ])
        .unwrap();
        assert_eq!(args.artworks, vec![Artwork::Dial, Artwork::Vent]);
        assert_eq!(args.output_format, OutputFormat::Png);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.scale, Some(4.0));
    }

    #[test]
    fn rejects_unknown_artwork() {
        assert!(Args::try_parse_from(["encart", "gear"]).is_err());
    }

    #[test]
    fn file_output_gets_artwork_suffixes() {
        let outputs = resolve_multi_outputs(
            Some(Path::new("build/panel.svg")),
            OutputFormat::Svg,
            &[Artwork::Dial, Artwork::Reel],
        )
        .unwrap();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("build/panel-dial.svg"),
                PathBuf::from("build/panel-reel.svg"),
            ]
        );
    }

    #[test]
    fn directory_output_uses_artwork_names() {
        let dir = std::env::temp_dir();
        let outputs =
            resolve_multi_outputs(Some(dir.as_path()), OutputFormat::Png, &Artwork::ALL).unwrap();
        assert_eq!(outputs[0], dir.join("dial.png"));
        assert_eq!(outputs[3], dir.join("vent.png"));
    }

    #[test]
    fn trailing_separator_creates_the_directory() {
        let dir = std::env::temp_dir().join(format!("encart-out-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let requested = PathBuf::from(format!("{}/", dir.display()));

        let outputs =
            resolve_multi_outputs(Some(requested.as_path()), OutputFormat::Svg, &Artwork::ALL)
                .unwrap();
        assert!(dir.is_dir());
        assert_eq!(outputs[0], dir.join("dial.svg"));
        assert_eq!(outputs[2], dir.join("reel.svg"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn png_needs_a_destination() {
        assert!(ensure_output(&None, "png").is_err());
        assert!(resolve_multi_outputs(None, OutputFormat::Png, &Artwork::ALL).is_err());
    }
}
