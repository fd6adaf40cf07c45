use crate::config::ReelConfig;
use crate::ir::{Circle, Def, Document, Element, Fill, Length, Line, Rotate, Stroke, Symbol, Use};
use crate::theme::Theme;

use super::backdrop;

const KNOCKOUT_ID: &str = "ko";
const REEL_ID: &str = "reel";

pub(super) fn compose_reel(config: &ReelConfig, theme: &Theme) -> Document {
    let size = config.size;
    let half = size / 2.0;

    let mut doc = Document::new(Length::user(size), Length::user(size * config.count as f64));

    doc.defs.push(Def::Symbol(Symbol {
        id: KNOCKOUT_ID.to_string(),
        width: Some(half - 1.0),
        height: Some(half - 1.0),
        children: vec![Element::Circle(Circle::new(
            (half - 5.0) / 2.0,
            Fill::Color(theme.background.clone()),
        ))],
    }));
    doc.defs.push(Def::Symbol(Symbol {
        id: REEL_ID.to_string(),
        width: Some(size),
        height: Some(size),
        children: reel_face(config, theme),
    }));

    doc.body.push(backdrop(&theme.background));

    for idx in 0..config.count {
        let angle = config.step_deg * idx as f64;
        let center_y = size * (idx + 1) as f64 - half;
        let mut instance =
            Use::new(REEL_ID, 0.0, size * idx as f64).rotated(angle, half, center_y);
        instance.width = Some(size);
        doc.body.push(Element::Use(instance));
    }

    doc
}

fn reel_face(config: &ReelConfig, theme: &Theme) -> Vec<Element> {
    let half = config.size / 2.0;
    let mut face = vec![Element::Circle(
        Circle::new(half - 1.0, Fill::Color(theme.ink.clone())).at(half, half),
    )];

    let knockout_step = 360.0 / config.knockouts as f64;
    for idx in 0..config.knockouts {
        face.push(Element::Use(
            Use::new(KNOCKOUT_ID, config.knockout_x, config.knockout_y).rotated(
                knockout_step * idx as f64,
                half,
                half,
            ),
        ));
    }

    face.push(Element::Circle(
        Circle::new(config.hub_radius, Fill::Color(theme.background.clone())).at(half, half),
    ));

    let hole_step = 360.0 / config.holes as f64;
    for idx in 0..config.holes {
        let mut hole = Circle::new(config.hole_radius, Fill::Color(theme.ink.clone()))
            .at(half - config.hole_inset, half);
        hole.transform = Some(Rotate {
            angle: hole_step * idx as f64,
            cx: half,
            cy: half,
        });
        face.push(Element::Circle(hole));
    }

    face.push(Element::Line(Line {
        x1: 0.0,
        y1: half,
        x2: config.leader_length,
        y2: half,
        stroke: Stroke::round(&theme.background, config.leader_width),
    }));

    face
}
