use crate::config::ArmConfig;
use crate::ir::{Circle, Def, Document, Element, Fill, Length, PathElement, Rect, Symbol, Use};
use crate::theme::Theme;

use super::backdrop;

const ARM_ID: &str = "arm";

/// Pawl arm outline, traced from the mechanism drawing.
const ARM_OUTLINE: &str = "m-0.03125,1.11719l7.71875,0.00781l-0.125,5.25l-2.8125,-0.0625l-0.125,10.125l5.75,15.1875l-2.0625,4.875l1,0.6875l-2.25,5.875l4,1.5l-0.5625,0.875l-3.75,-1.1875l-2,4.9375l-4.4375,-1.5625l5,-11.6875l0.9375,0.125l1.8125,-3.875l-5.5625,-14.9375l0,-10.6875l-2.5,-0.375l-0.03125,-5.07031z";

/// Rivet centres along the arm's foot, two staggered rows.
const RIVETS: [(f64, f64); 8] = [
    (2.31258, 46.24964),
    (3.25005, 44.37470),
    (4.06253, 42.62475),
    (4.75001, 40.74981),
    (4.12508, 47.24964),
    (4.87505, 45.24970),
    (5.68753, 43.31225),
    (6.31251, 41.37481),
];
const RIVET_RADIUS: f64 = 0.8;

pub(super) fn compose_arm(config: &ArmConfig, theme: &Theme) -> Document {
    let mut doc = Document::new(
        Length::user(config.width),
        Length::user(config.pitch * config.count as f64),
    );

    let mut children = vec![
        Element::Path(PathElement {
            d: ARM_OUTLINE.to_string(),
            fill: None,
            stroke: None,
        }),
        Element::Rect(Rect::new(8.0, 1.0).at(0.0, 3.0).fill(&theme.background)),
    ];
    children.extend(RIVETS.iter().map(|&(cx, cy)| {
        Element::Circle(
            Circle::new(RIVET_RADIUS, Fill::Color(theme.background.clone())).at(cx, cy),
        )
    }));
    doc.defs.push(Def::Symbol(Symbol {
        id: ARM_ID.to_string(),
        width: Some(7.0),
        height: Some(11.0),
        children,
    }));

    doc.body.push(backdrop(&theme.background));

    for idx in 0..config.count {
        let offset = config.pitch * idx as f64;
        let mut instance = Use::new(ARM_ID, config.x, config.top + offset).rotated(
            tilt(config, idx),
            config.x + config.pivot_dx,
            config.pivot_dy + offset,
        );
        instance.fill = Some(Fill::Color(theme.ink.clone()));
        doc.body.push(Element::Use(instance));
    }

    doc
}

/// The first arm is drawn at rest; the rest ratchet up from the base tilt.
fn tilt(config: &ArmConfig, idx: usize) -> f64 {
    if idx == 0 {
        0.0
    } else {
        config.tilt_step_deg * idx as f64 + config.base_tilt_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_arm_is_upright() {
        let config = ArmConfig::default();
        assert_eq!(tilt(&config, 0), 0.0);
        assert_eq!(tilt(&config, 1), 25.0);
        assert_eq!(tilt(&config, 11), 45.0);
    }

    #[test]
    fn arms_pivot_below_their_own_row() {
        let doc = compose_arm(&ArmConfig::default(), &Theme::panel());
        assert_eq!(doc.height, Length::user(648.0));

        let arms = doc.uses_of(ARM_ID);
        assert_eq!(arms.len(), 12);
        let third = arms[2];
        assert_eq!((third.x, third.y), (23.0, 3.0 + 108.0));
        let rotate = third.transform.unwrap();
        assert_eq!((rotate.angle, rotate.cx, rotate.cy), (27.0, 27.0, 14.0 + 108.0));
        assert_eq!(third.fill, Some(Fill::Color("white".to_string())));
    }

    #[test]
    fn symbol_carries_outline_and_rivets() {
        let doc = compose_arm(&ArmConfig::default(), &Theme::panel());
        let Some(Def::Symbol(symbol)) = doc.def(ARM_ID) else {
            panic!("missing arm symbol");
        };
        let circles = symbol
            .children
            .iter()
            .filter(|child| matches!(child, Element::Circle(_)))
            .count();
        assert_eq!(circles, RIVETS.len());
    }
}
