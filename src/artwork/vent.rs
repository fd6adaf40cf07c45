use crate::config::{VentConfig, VentRing};
use crate::geometry::{ArcPath, Point};
use crate::ir::{
    Circle, Def, Document, Element, Fill, Group, Length, Line, PathElement, Rect, Stroke, Symbol,
    Use,
};
use crate::theme::Theme;

const SLOT_ID: &str = "vent";

pub(super) fn compose_vent(config: &VentConfig, theme: &Theme) -> Document {
    let (width, height) = (config.lid_width, config.lid_height);

    let mut doc = Document::new(Length::mm(width), Length::mm(height));
    doc.view_box = Some((0.0, 0.0, width, height));
    doc.standalone = true;

    doc.defs.push(Def::Symbol(Symbol {
        id: SLOT_ID.to_string(),
        width: None,
        height: None,
        children: config
            .slot_segments
            .iter()
            .map(|&(from, to)| {
                Element::Line(Line {
                    x1: config.slot_x,
                    y1: from,
                    x2: config.slot_x,
                    y2: to,
                    stroke: Stroke::round(&theme.slot, config.slot_stroke_width),
                })
            })
            .collect(),
    }));

    doc.body.push(Element::Group(Group {
        id: None,
        children: vec![
            Element::Rect(Rect::new(width, height).at(0.0, 0.0).fill(&theme.sheet)),
            Element::Group(Group {
                id: Some("fanKnockout".to_string()),
                children: fan_knockout(config, theme),
            }),
            Element::Group(Group {
                id: Some("venting".to_string()),
                children: slot_banks(config),
            }),
        ],
    }));

    doc
}

/// Center of the fan, midway between its mounting screws.
///
/// The lid is drawn landscape while the fan is specified along the lid's
/// length, so the fan offset runs along x and the width centerline along y.
fn fan_center(config: &VentConfig) -> Point {
    Point::new(
        config.fan_offset + config.screw_spacing / 2.0,
        config.lid_width / 2.0,
    )
}

/// Half of each arc's sweep for a ring, in degrees.
fn ring_half_sweep(config: &VentConfig, ring: &VentRing) -> f64 {
    ring.half_sweep_deg.unwrap_or_else(|| {
        let turn = 360.0 / config.spokes as f64;
        turn * (config.spokes as f64 / ring.radius) / 2.0
    })
}

fn fan_knockout(config: &VentConfig, theme: &Theme) -> Vec<Element> {
    let near = (config.lid_width - config.screw_spacing) / 2.0;
    let far = (config.lid_width + config.screw_spacing) / 2.0;
    let screw_radius = config.screw_diameter / 2.0;

    let mut out: Vec<Element> = [
        (config.fan_offset, near),
        (config.fan_offset, far),
        (config.fan_offset + config.screw_spacing, near),
        (config.fan_offset + config.screw_spacing, far),
    ]
    .into_iter()
    .map(|(cx, cy)| {
        Element::Circle(Circle::new(screw_radius, Fill::Color(theme.cut.clone())).at(cx, cy))
    })
    .collect();

    let center = fan_center(config);
    let turn = 360.0 / config.spokes as f64;
    for spoke in 0..config.spokes {
        for ring in &config.rings {
            let half = ring_half_sweep(config, ring);
            let high = half + turn * spoke as f64;
            let arc = ArcPath::new(center, ring.radius, high - half * 2.0, high);
            out.push(Element::Path(PathElement {
                d: arc.describe(),
                fill: Some(Fill::None),
                stroke: Some(Stroke::round(&theme.cut, config.arc_stroke_width)),
            }));
        }
    }
    out
}

fn slot_banks(config: &VentConfig) -> Vec<Element> {
    let top = config.lid_width / 2.0 - (config.slot_length + config.slot_inset);
    let mut out = Vec::new();
    for idx in 0..config.left_slots.max(config.right_slots) {
        let x = config.first_slot + config.slot_pitch * idx as f64;
        if idx < config.left_slots {
            out.push(Element::Use(Use::new(SLOT_ID, x, top)));
        }
        if idx < config.right_slots {
            out.push(Element::Use(Use::new(SLOT_ID, x + config.right_bank_offset, top)));
        }
    }
    out
}
