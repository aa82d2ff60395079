//! Simulation and rendering configuration for the particle field.
//!
//! Every struct has a `Default` matching the stock animation, and every field is
//! `#[serde(default)]`, so a page can override just the values it cares about:
//!
//! ```json
//! { "particle_count": 2000, "links": { "enabled": true }, "style": "speed_hue" }
//! ```

use serde::Deserialize;

/// How a particle reacts when it crosses a viewport edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
	/// Negate the velocity component only. The particle may sit outside the
	/// viewport for a frame before it heads back in.
	#[default]
	Flip,
	/// Clamp the position back onto the edge and point the velocity inward.
	Reflect,
}

/// Which visual policy draws each particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
	/// Solid circle in the theme color at the particle's base size.
	#[default]
	Fixed,
	/// Hue and radius derived from the particle's current speed.
	SpeedHue,
}

/// Forces applied during each simulation step.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
	/// Maximum pointer distance at which the pointer pushes or pulls.
	pub influence_radius: f64,
	/// Acceleration applied at zero distance from the pointer.
	pub force_strength: f64,
	/// Per-frame velocity multiplier.
	pub damping: f64,
	pub boundary: BoundaryPolicy,
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			influence_radius: 150.0,
			force_strength: 0.5,
			damping: 0.95,
			boundary: BoundaryPolicy::Flip,
		}
	}
}

/// Initial particle state.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
	/// Largest absolute value of each starting velocity component.
	pub max_speed: f64,
	/// Base particle radius.
	pub size: f64,
}

impl Default for SpawnConfig {
	fn default() -> Self {
		Self {
			max_speed: 0.25,
			size: 1.5,
		}
	}
}

/// Connective lines between nearby particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
	/// Draw lines at startup. Can be toggled at runtime.
	pub enabled: bool,
	/// Pairs closer than this are linked.
	pub threshold: f64,
	pub line_width: f64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			threshold: 100.0,
			line_width: 0.5,
		}
	}
}

/// Keys that drive runtime toggles. Compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
	pub toggle_mode: String,
	pub toggle_links: String,
}

impl Default for KeyBindings {
	fn default() -> Self {
		Self {
			toggle_mode: "a".into(),
			toggle_links: "l".into(),
		}
	}
}

/// Settings for sampling rasterized text into particle positions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextSampleConfig {
	/// Grid spacing in pixels along both axes.
	pub spacing: u32,
	/// Pixels with alpha strictly above this count as inside the glyphs.
	pub alpha_threshold: u8,
	/// CSS font used to rasterize the text.
	pub font: String,
}

impl Default for TextSampleConfig {
	fn default() -> Self {
		Self {
			spacing: 6,
			alpha_threshold: 128,
			font: "bold 160px sans-serif".into(),
		}
	}
}

/// Top-level configuration, read once at startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	pub particle_count: usize,
	/// Fixed seed for the spawn RNG. Taken from the clock when absent.
	pub seed: Option<u64>,
	pub physics: PhysicsConfig,
	pub spawn: SpawnConfig,
	pub links: LinkConfig,
	pub style: RenderStyle,
	pub keys: KeyBindings,
	/// When set, particles start out arranged in the shape of this text.
	pub seed_text: Option<String>,
	pub text: TextSampleConfig,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particle_count: 5000,
			seed: None,
			physics: PhysicsConfig::default(),
			spawn: SpawnConfig::default(),
			links: LinkConfig::default(),
			style: RenderStyle::Fixed,
			keys: KeyBindings::default(),
			seed_text: None,
			text: TextSampleConfig::default(),
		}
	}
}
