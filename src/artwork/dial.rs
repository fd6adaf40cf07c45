use crate::config::DialConfig;
use crate::geometry::describe_arc;
use crate::ir::{
    Circle, Def, Document, Element, Fill, Length, Mask, PathElement, Pattern, Rect, Stroke,
    Symbol, Use,
};
use crate::theme::Theme;

use super::backdrop;

const MASK_ID: &str = "hole";
const LABEL_ID: &str = "label";
const CHECKS_ID: &str = "checks";

/// Cell size the mask measurements below are drawn for.
const REFERENCE_CELL: f64 = 19.0;
/// Window bar (y, height) left opaque across the masked disc.
const WINDOW_BAR: (f64, f64) = (2.5, 5.0);
/// Index bar (y, height) just above the disc center.
const INDEX_BAR: (f64, f64) = (8.5, 2.0);
/// Gap between the label disc and the checkered face.
const FACE_INSET: f64 = 0.5;

pub(super) fn compose_dial(config: &DialConfig, theme: &Theme) -> Document {
    let cell = config.cell;
    let half = cell / 2.0;
    let unit = cell / REFERENCE_CELL;
    let face_radius = half - FACE_INSET * unit;
    let window = (WINDOW_BAR.0 * unit, WINDOW_BAR.1 * unit);
    let index = (INDEX_BAR.0 * unit, INDEX_BAR.1 * unit);

    let mut doc = Document::new(
        Length::user(cell),
        Length::user(cell * config.count as f64),
    );

    doc.defs.push(Def::Mask(Mask {
        id: MASK_ID.to_string(),
        children: vec![
            Element::Rect(Rect::new(cell, cell).fill("white")),
            Element::Circle(
                Circle::new(face_radius, Fill::Color("black".to_string())).at(half, half),
            ),
            Element::Rect(Rect::new(cell, window.1).at_y(window.0).fill("white")),
            Element::Rect(Rect::new(cell, index.1).at_y(index.0).fill("white")),
        ],
    }));

    let mut label = Circle::new(half, Fill::Color(theme.ink.clone())).at(half, half);
    label.mask = Some(MASK_ID.to_string());
    doc.defs.push(Def::Symbol(Symbol {
        id: LABEL_ID.to_string(),
        width: Some(cell),
        height: Some(cell),
        children: vec![Element::Circle(label)],
    }));

    doc.defs.push(Def::Pattern(Pattern {
        id: CHECKS_ID.to_string(),
        x: 0.0,
        y: 0.0,
        width: 1.0 / f64::from(config.checks_columns),
        height: 1.0 / f64::from(config.checks_rows),
        children: vec![
            Element::Rect(Rect::new(1.0, 1.0).at(0.0, 0.0).fill(&theme.background)),
            Element::Rect(Rect::new(1.0, 1.0).at(1.0, 1.0).fill(&theme.background)),
        ],
    }));

    doc.body.push(backdrop(&theme.background));

    for idx in 0..config.count {
        let angle = config.step_deg * idx as f64;
        let center_y = cell * (idx + 1) as f64 - half;

        let mut instance =
            Use::new(LABEL_ID, 0.0, cell * idx as f64).rotated(angle, half, center_y);
        instance.width = Some(cell);
        doc.body.push(Element::Use(instance));

        doc.body.push(Element::Circle(
            Circle::new(face_radius, Fill::Url(CHECKS_ID.to_string())).at(half, center_y),
        ));
        doc.body.push(Element::Circle(
            Circle::new(config.hub_radius, Fill::Color(theme.background.clone()))
                .at(half, center_y),
        ));
        doc.body.push(Element::Path(PathElement {
            d: describe_arc(
                half,
                center_y,
                config.arc_radius,
                config.arc_start_deg,
                config.arc_end_deg,
            ),
            fill: Some(Fill::None),
            stroke: Some(Stroke::round(&theme.background, config.stroke_width)),
        }));
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_height_follows_count() {
        let doc = compose_dial(&DialConfig::default(), &Theme::panel());
        assert_eq!(doc.width, Length::user(19.0));
        assert_eq!(doc.height, Length::user(342.0));
    }

    #[test]
    fn labels_rotate_in_twenty_degree_steps() {
        let doc = compose_dial(&DialConfig::default(), &Theme::panel());
        let labels = doc.uses_of(LABEL_ID);
        assert_eq!(labels.len(), 18);

        let last = labels[17];
        assert_eq!(last.y, 19.0 * 17.0);
        let rotate = last.transform.unwrap();
        assert_eq!(rotate.angle, 340.0);
        assert_eq!(rotate.cx, 9.5);
        assert_eq!(rotate.cy, 19.0 * 18.0 - 9.5);
    }

    #[test]
    fn each_label_gets_an_arc_indicator() {
        let doc = compose_dial(&DialConfig::default(), &Theme::panel());
        let arcs: Vec<&PathElement> = doc
            .body
            .iter()
            .filter_map(|element| match element {
                Element::Path(path) => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 18);
        assert_eq!(arcs[0].d, describe_arc(9.5, 9.5, 4.5, 8.0, 178.0));
        assert!(arcs[0].d.contains(" A 4.5 4.5 0 0 0 "));
    }

    #[test]
    fn mask_bars_scale_with_cell() {
        let config = DialConfig {
            cell: 38.0,
            ..DialConfig::default()
        };
        let doc = compose_dial(&config, &Theme::panel());
        let Some(Def::Mask(mask)) = doc.def(MASK_ID) else {
            panic!("missing mask");
        };
        let [_, Element::Circle(face), Element::Rect(window), Element::Rect(index)] =
            mask.children.as_slice()
        else {
            panic!("unexpected mask layout");
        };
        assert_eq!(face.r, 18.0);
        assert_eq!(window.y, Some(Length::user(5.0)));
        assert_eq!(window.height, Length::user(10.0));
        assert_eq!(index.y, Some(Length::user(17.0)));
        assert_eq!(index.height, Length::user(4.0));
    }

    #[test]
    fn checks_pattern_tiles_ten_by_nine() {
        let doc = compose_dial(&DialConfig::default(), &Theme::panel());
        let Some(Def::Pattern(pattern)) = doc.def(CHECKS_ID) else {
            panic!("missing checks pattern");
        };
        assert_eq!(pattern.width, 0.1);
        assert!((pattern.height - 1.0 / 9.0).abs() < 1e-12);
    }
}
