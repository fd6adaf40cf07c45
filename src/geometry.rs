//! Arc geometry shared by every artwork.
//!
//! Angles are in degrees and measured clockwise from 12 o'clock in the
//! y-down SVG coordinate system, so 0° is straight up from the center.

use crate::number::{fmt_coord, fmt_exact};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Point at `radius` from `(center_x, center_y)` along `angle_deg`.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let theta = (angle_deg - 90.0).to_radians();
    Point {
        x: center_x + radius * theta.cos(),
        y: center_y + radius * theta.sin(),
    }
}

/// `0` when the sweep from `start_deg` to `end_deg` is at most a half turn.
pub fn large_arc_flag(start_deg: f64, end_deg: f64) -> u8 {
    if end_deg - start_deg <= 180.0 { 0 } else { 1 }
}

/// SVG path data for a circular arc between two angles.
///
/// The path moves to the point at `end_deg` and draws back to the point at
/// `start_deg` with sweep flag 0. Existing artwork files depend on this
/// order.
pub fn describe_arc(
    center_x: f64,
    center_y: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let start = polar_to_cartesian(center_x, center_y, radius, end_deg);
    let end = polar_to_cartesian(center_x, center_y, radius, start_deg);
    let flag = large_arc_flag(start_deg, end_deg);
    let r = fmt_exact(radius);

    [
        "M".to_string(),
        fmt_coord(start.x),
        fmt_coord(start.y),
        "A".to_string(),
        r.clone(),
        r,
        "0".to_string(),
        flag.to_string(),
        "0".to_string(),
        fmt_coord(end.x),
        fmt_coord(end.y),
    ]
    .join(" ")
}

/// A circular arc segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl ArcPath {
    pub fn new(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
        }
    }

    /// Arc of `2 * half_sweep` degrees centred on `mid_deg`.
    pub fn centered(center: Point, radius: f64, mid_deg: f64, half_sweep: f64) -> Self {
        Self::new(center, radius, mid_deg - half_sweep, mid_deg + half_sweep)
    }

    pub fn sweep(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn describe(&self) -> String {
        describe_arc(
            self.center.x,
            self.center.y,
            self.radius,
            self.start_deg,
            self.end_deg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    struct ParsedArc {
        start: (f64, f64),
        rx: f64,
        ry: f64,
        large_arc: u8,
        sweep: u8,
        end: (f64, f64),
    }

    fn parse_arc(d: &str) -> ParsedArc {
        let tokens: Vec<&str> = d.split(' ').collect();
        assert_eq!(tokens.len(), 11, "unexpected token count in {d:?}");
        assert_eq!(tokens[0], "M");
        assert_eq!(tokens[3], "A");
        assert_eq!(tokens[6], "0");
        let num = |idx: usize| tokens[idx].parse::<f64>().unwrap();
        ParsedArc {
            start: (num(1), num(2)),
            rx: num(4),
            ry: num(5),
            large_arc: tokens[7].parse().unwrap(),
            sweep: tokens[8].parse().unwrap(),
            end: (num(9), num(10)),
        }
    }

    #[test]
    fn polar_point_lies_on_circle() {
        let centers = [(0.0, 0.0), (9.5, 113.5), (-40.0, 7.25)];
        let radii = [0.0, 0.8, 4.5, 13.0, 250.0];
        for &(cx, cy) in &centers {
            for &r in &radii {
                for step in -8..=16 {
                    let angle = step as f64 * 37.5;
                    let p = polar_to_cartesian(cx, cy, r, angle);
                    let d = p.distance(Point::new(cx, cy));
                    assert!((d - r).abs() < 1e-9, "r={r} angle={angle} d={d}");
                }
            }
        }
    }

    #[test]
    fn zero_degrees_points_up() {
        let p = polar_to_cartesian(3.0, 4.0, 2.0, 0.0);
        assert!((p.x - 3.0).abs() < EPS);
        assert!((p.y - 2.0).abs() < EPS);

        let right = polar_to_cartesian(3.0, 4.0, 2.0, 90.0);
        assert!((right.x - 5.0).abs() < EPS);
        assert!((right.y - 4.0).abs() < EPS);
    }

    #[test]
    fn large_arc_flag_threshold() {
        assert_eq!(large_arc_flag(0.0, 180.0), 0);
        assert_eq!(large_arc_flag(10.0, 190.0), 0);
        assert_eq!(large_arc_flag(0.0, 180.0 + 1e-9), 1);
        assert_eq!(large_arc_flag(0.0, 359.0), 1);
        assert_eq!(large_arc_flag(90.0, 0.0), 0);

        assert_eq!(parse_arc(&describe_arc(0.0, 0.0, 5.0, 0.0, 180.0)).large_arc, 0);
        assert_eq!(parse_arc(&describe_arc(0.0, 0.0, 5.0, 0.0, 180.5)).large_arc, 1);
    }

    #[test]
    fn endpoints_are_swapped() {
        let (cx, cy, r) = (9.5, 28.5, 4.5);
        let arc = parse_arc(&describe_arc(cx, cy, r, 0.0, 90.0));
        let at_90 = polar_to_cartesian(cx, cy, r, 90.0);
        let at_0 = polar_to_cartesian(cx, cy, r, 0.0);
        assert!((arc.start.0 - at_90.x).abs() < 1e-6);
        assert!((arc.start.1 - at_90.y).abs() < 1e-6);
        assert!((arc.end.0 - at_0.x).abs() < 1e-6);
        assert!((arc.end.1 - at_0.y).abs() < 1e-6);
    }

    #[test]
    fn parsed_command_recovers_radius_and_flags() {
        for (r, start, end, flag) in [
            (4.5, 8.0, 178.0, 0),
            (13.0, -13.8, 200.0, 1),
            (1.0 / 3.0, 0.0, 90.0, 0),
            (2.0_f64.sqrt(), 10.0, 350.0, 1),
        ] {
            let arc = parse_arc(&describe_arc(82.0, 75.0, r, start, end));
            assert_eq!(arc.rx, r);
            assert_eq!(arc.ry, r);
            assert_eq!(arc.large_arc, flag);
            assert_eq!(arc.sweep, 0);
        }
    }

    #[test]
    fn quarter_arc_text() {
        assert_eq!(
            describe_arc(0.0, 0.0, 10.0, 0.0, 90.0),
            "M 10.0 0.0 A 10 10 0 0 0 0.0 -10.0"
        );
        assert_eq!(
            describe_arc(0.0, 0.0, 1.0 / 3.0, 0.0, 90.0),
            "M 0.333333 0.0 A 0.3333333333333333 0.3333333333333333 0 0 0 0.0 -0.333333"
        );
    }

    #[test]
    fn arc_path_matches_free_function() {
        let arc = ArcPath::centered(Point::new(82.0, 75.0), 9.0, 45.0, 9.5);
        assert_eq!(arc.start_deg, 35.5);
        assert_eq!(arc.end_deg, 54.5);
        assert_eq!(arc.sweep(), 19.0);
        assert_eq!(arc.describe(), describe_arc(82.0, 75.0, 9.0, 35.5, 54.5));
    }
}
