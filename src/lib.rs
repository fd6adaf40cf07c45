pub mod artwork;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod ir;
pub mod log;
pub mod number;
pub mod render;
pub mod theme;

pub use artwork::{Artwork, compose};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ConfigError, load_config};
pub use geometry::{ArcPath, Point, describe_arc, polar_to_cartesian};
pub use render::render_svg;
pub use theme::Theme;

/// Compose and serialise one artwork.
pub fn render_artwork(artwork: Artwork, config: &Config) -> String {
    render_svg(&compose(artwork, config))
}
