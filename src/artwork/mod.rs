//! Artwork composers.
//!
//! Each composer is a fixed loop that places symbol instances at angles and
//! offsets taken from an arithmetic progression, producing an [`ir::Document`].
//!
//! [`ir::Document`]: crate::ir::Document

mod arm;
mod dial;
mod reel;
mod vent;

use crate::config::Config;
use crate::ir::{Document, Element, Length, Rect};
use crate::log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Artwork {
    /// Rotary dial label discs
    Dial,
    /// Ratchet arm illustration
    Arm,
    /// Film reel motif
    Reel,
    /// Enclosure lid ventilation layout
    Vent,
}

impl Artwork {
    pub const ALL: [Artwork; 4] = [Self::Dial, Self::Arm, Self::Reel, Self::Vent];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dial => "dial",
            Self::Arm => "arm",
            Self::Reel => "reel",
            Self::Vent => "vent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|artwork| artwork.name() == name)
    }
}

pub fn compose(artwork: Artwork, config: &Config) -> Document {
    let doc = match artwork {
        Artwork::Dial => dial::compose_dial(&config.dial, &config.theme),
        Artwork::Arm => arm::compose_arm(&config.arm, &config.theme),
        Artwork::Reel => reel::compose_reel(&config.reel, &config.theme),
        Artwork::Vent => vent::compose_vent(&config.vent, &config.theme),
    };
    debug!(
        artwork = artwork.name(),
        defs = doc.defs.len(),
        elements = doc.body.len(),
        "composed artwork"
    );
    doc
}

/// Oversized backdrop so rotated instances never expose the canvas edge.
fn backdrop(color: &str) -> Element {
    Element::Rect(
        Rect::new(Length::percent(110.0), Length::percent(110.0))
            .at(-1.0, -1.0)
            .fill(color),
    )
}
