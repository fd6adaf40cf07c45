use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown theme '{0}' (expected 'panel' or 'proof')")]
    UnknownTheme(String),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Rotary dial label strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialConfig {
    pub count: usize,
    pub cell: f64,
    pub step_deg: f64,
    pub arc_radius: f64,
    pub arc_start_deg: f64,
    pub arc_end_deg: f64,
    pub hub_radius: f64,
    pub stroke_width: f64,
    pub checks_columns: u32,
    pub checks_rows: u32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            count: 18,
            cell: 19.0,
            step_deg: 20.0,
            arc_radius: 4.5,
            arc_start_deg: 8.0,
            arc_end_deg: 178.0,
            hub_radius: 1.5,
            stroke_width: 2.0,
            checks_columns: 10,
            checks_rows: 9,
        }
    }
}

/// Ratchet arm strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmConfig {
    pub count: usize,
    pub pitch: f64,
    pub width: f64,
    pub x: f64,
    pub top: f64,
    pub pivot_dx: f64,
    pub pivot_dy: f64,
    pub base_tilt_deg: f64,
    pub tilt_step_deg: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            count: 12,
            pitch: 54.0,
            width: 40.0,
            x: 23.0,
            top: 3.0,
            pivot_dx: 4.0,
            pivot_dy: 14.0,
            base_tilt_deg: 23.0,
            tilt_step_deg: 2.0,
        }
    }
}

/// Film reel strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReelConfig {
    pub count: usize,
    pub size: f64,
    pub step_deg: f64,
    pub knockouts: usize,
    pub knockout_x: f64,
    pub knockout_y: f64,
    pub hub_radius: f64,
    pub holes: usize,
    pub hole_radius: f64,
    pub hole_inset: f64,
    pub leader_length: f64,
    pub leader_width: f64,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            count: 18,
            size: 30.0,
            step_deg: 20.0,
            knockouts: 5,
            knockout_x: 7.5,
            knockout_y: 8.5,
            hub_radius: 4.5,
            holes: 6,
            hole_radius: 1.0,
            hole_inset: 3.0,
            leader_length: 6.0,
            leader_width: 2.0,
        }
    }
}

/// One ring of fan airflow arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentRing {
    pub radius: f64,
    /// Half of each arc's sweep in degrees. When absent the sweep scales
    /// inversely with the radius so every ring keeps a similar arc length.
    #[serde(default)]
    pub half_sweep_deg: Option<f64>,
}

/// Enclosure lid vent layout. Lengths are millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VentConfig {
    pub lid_width: f64,
    pub lid_height: f64,
    pub screw_spacing: f64,
    pub fan_offset: f64,
    pub screw_diameter: f64,
    pub spokes: usize,
    pub rings: Vec<VentRing>,
    pub arc_stroke_width: f64,
    pub slot_x: f64,
    pub slot_segments: Vec<(f64, f64)>,
    pub slot_stroke_width: f64,
    pub slot_length: f64,
    pub slot_inset: f64,
    pub slot_pitch: f64,
    pub first_slot: f64,
    pub left_slots: usize,
    pub right_slots: usize,
    pub right_bank_offset: f64,
}

impl Default for VentConfig {
    fn default() -> Self {
        Self {
            lid_width: 150.0,
            lid_height: 90.0,
            screw_spacing: 24.0,
            fan_offset: 70.0,
            screw_diameter: 3.5,
            spokes: 8,
            rings: vec![
                VentRing {
                    radius: 13.0,
                    half_sweep_deg: None,
                },
                VentRing {
                    radius: 9.0,
                    half_sweep_deg: Some(9.5),
                },
                VentRing {
                    radius: 5.0,
                    half_sweep_deg: Some(2.0),
                },
            ],
            arc_stroke_width: 3.0,
            slot_x: 2.0,
            slot_segments: vec![(2.0, 17.0), (27.0, 42.0), (52.0, 67.0)],
            slot_stroke_width: 2.8,
            slot_length: 65.0,
            slot_inset: 4.0,
            slot_pitch: 10.0,
            first_slot: 15.0,
            left_slots: 5,
            right_slots: 4,
            right_bank_offset: 89.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// PNG pixels per SVG user unit.
    pub scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 8.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub dial: DialConfig,
    pub arm: ArmConfig,
    pub reel: ReelConfig,
    pub vent: VentConfig,
    pub render: RenderConfig,
}

/// Reels at or below this size leave no room for the knockout discs.
const REEL_MIN_SIZE: f64 = 10.0;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dial = &self.dial;
        nonzero("dial.count", dial.count)?;
        positive("dial.cell", dial.cell)?;
        nonzero("dial.checksColumns", dial.checks_columns as usize)?;
        nonzero("dial.checksRows", dial.checks_rows as usize)?;
        for (field, value) in [
            ("dial.stepDeg", dial.step_deg),
            ("dial.arcStartDeg", dial.arc_start_deg),
            ("dial.arcEndDeg", dial.arc_end_deg),
        ] {
            finite(field, value)?;
        }
        for (field, value) in [
            ("dial.arcRadius", dial.arc_radius),
            ("dial.hubRadius", dial.hub_radius),
            ("dial.strokeWidth", dial.stroke_width),
        ] {
            non_negative(field, value)?;
        }

        let arm = &self.arm;
        nonzero("arm.count", arm.count)?;
        positive("arm.pitch", arm.pitch)?;
        positive("arm.width", arm.width)?;
        for (field, value) in [
            ("arm.x", arm.x),
            ("arm.top", arm.top),
            ("arm.pivotDx", arm.pivot_dx),
            ("arm.pivotDy", arm.pivot_dy),
            ("arm.baseTiltDeg", arm.base_tilt_deg),
            ("arm.tiltStepDeg", arm.tilt_step_deg),
        ] {
            finite(field, value)?;
        }

        let reel = &self.reel;
        nonzero("reel.count", reel.count)?;
        nonzero("reel.knockouts", reel.knockouts)?;
        nonzero("reel.holes", reel.holes)?;
        finite("reel.size", reel.size)?;
        // knockout discs have radius (size / 2 - 5) / 2
        if reel.size <= REEL_MIN_SIZE {
            return Err(ConfigError::Invalid {
                field: "reel.size",
                reason: format!("must be greater than {REEL_MIN_SIZE}, got {}", reel.size),
            });
        }
        for (field, value) in [
            ("reel.stepDeg", reel.step_deg),
            ("reel.knockoutX", reel.knockout_x),
            ("reel.knockoutY", reel.knockout_y),
            ("reel.holeInset", reel.hole_inset),
            ("reel.leaderLength", reel.leader_length),
        ] {
            finite(field, value)?;
        }
        for (field, value) in [
            ("reel.hubRadius", reel.hub_radius),
            ("reel.holeRadius", reel.hole_radius),
            ("reel.leaderWidth", reel.leader_width),
        ] {
            non_negative(field, value)?;
        }

        let vent = &self.vent;
        positive("vent.lidWidth", vent.lid_width)?;
        positive("vent.lidHeight", vent.lid_height)?;
        nonzero("vent.spokes", vent.spokes)?;
        for ring in &vent.rings {
            positive("vent.rings.radius", ring.radius)?;
            if let Some(half) = ring.half_sweep_deg {
                finite("vent.rings.halfSweepDeg", half)?;
            }
        }
        for &(from, to) in &vent.slot_segments {
            finite("vent.slotSegments", from)?;
            finite("vent.slotSegments", to)?;
        }
        for (field, value) in [
            ("vent.screwSpacing", vent.screw_spacing),
            ("vent.fanOffset", vent.fan_offset),
            ("vent.slotX", vent.slot_x),
            ("vent.slotLength", vent.slot_length),
            ("vent.slotInset", vent.slot_inset),
            ("vent.slotPitch", vent.slot_pitch),
            ("vent.firstSlot", vent.first_slot),
            ("vent.rightBankOffset", vent.right_bank_offset),
        ] {
            finite(field, value)?;
        }
        for (field, value) in [
            ("vent.screwDiameter", vent.screw_diameter),
            ("vent.arcStrokeWidth", vent.arc_stroke_width),
            ("vent.slotStrokeWidth", vent.slot_stroke_width),
        ] {
            non_negative(field, value)?;
        }

        if !(self.render.scale.is_finite() && self.render.scale > 0.0) {
            return Err(ConfigError::Invalid {
                field: "render.scale",
                reason: format!("must be a positive number, got {}", self.render.scale),
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be greater than zero, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

fn nonzero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be at least 1".to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    ink: Option<String>,
    sheet: Option<String>,
    cut: Option<String>,
    slot: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    dial: Option<DialConfig>,
    arm: Option<ArmConfig>,
    reel: Option<ReelConfig>,
    vent: Option<VentConfig>,
    render: Option<RenderConfig>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::from_name(theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(theme_name.to_string()))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.ink {
            config.theme.ink = v;
        }
        if let Some(v) = vars.sheet {
            config.theme.sheet = v;
        }
        if let Some(v) = vars.cut {
            config.theme.cut = v;
        }
        if let Some(v) = vars.slot {
            config.theme.slot = v;
        }
    }

    if let Some(dial) = parsed.dial {
        config.dial = dial;
    }
    if let Some(arm) = parsed.arm {
        config.arm = arm;
    }
    if let Some(reel) = parsed.reel {
        config.reel = reel;
    }
    if let Some(vent) = parsed.vent {
        config.vent = vent;
    }
    if let Some(render) = parsed.render {
        config.render = render;
    }

    config.validate()?;
    Ok(config)
}
