//! Colors and the per-particle appearance policy.

use super::config::RenderStyle;
use super::particles::Particle;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill for a single particle.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
	Solid(Color),
	/// HSL color: hue in degrees, saturation and lightness in percent.
	Hsl { hue: f64, saturation: f64, lightness: f64 },
}

impl Fill {
	pub fn to_css(&self) -> String {
		match self {
			Fill::Solid(color) => color.to_css(),
			Fill::Hsl {
				hue,
				saturation,
				lightness,
			} => format!("hsl({hue:.1}, {saturation}%, {lightness}%)"),
		}
	}
}

/// Resolved look of one particle for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
	pub radius: f64,
	pub fill: Fill,
}

/// Tuning for [`RenderStyle::SpeedHue`].
#[derive(Clone, Debug)]
pub struct SpeedHueStyle {
	/// Degrees of hue per unit of speed.
	pub hue_per_speed: f64,
	/// Upper bound on the hue.
	pub max_hue: f64,
	pub saturation: f64,
	pub lightness: f64,
	/// Extra radius per unit of speed.
	pub radius_per_speed: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub style: RenderStyle,
	pub particle_color: Color,
	pub link_color: Color,
	pub speed_hue: SpeedHueStyle,
}

impl Theme {
	pub fn new(style: RenderStyle) -> Self {
		Self {
			style,
			..Self::default()
		}
	}

	/// Radius and fill for `particle` under the active render style.
	pub fn appearance(&self, particle: &Particle) -> Appearance {
		match self.style {
			RenderStyle::Fixed => Appearance {
				radius: particle.size,
				fill: Fill::Solid(self.particle_color),
			},
			RenderStyle::SpeedHue => {
				let speed = particle.speed();
				let s = &self.speed_hue;
				Appearance {
					radius: particle.size + speed * s.radius_per_speed,
					fill: Fill::Hsl {
						hue: (speed * s.hue_per_speed).min(s.max_hue),
						saturation: s.saturation,
						lightness: s.lightness,
					},
				}
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			style: RenderStyle::Fixed,
			particle_color: Color::rgb(255, 255, 255),
			link_color: Color::rgb(255, 255, 255),
			speed_hue: SpeedHueStyle {
				hue_per_speed: 60.0,
				max_hue: 280.0,
				saturation: 100.0,
				lightness: 65.0,
				radius_per_speed: 0.5,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixed_style_ignores_speed() {
		let theme = Theme::new(RenderStyle::Fixed);
		let slow = Particle::new(0.0, 0.0, 0.0, 0.0, 1.5);
		let fast = Particle::new(0.0, 0.0, 4.0, 3.0, 1.5);

		assert_eq!(theme.appearance(&slow), theme.appearance(&fast));
		assert_eq!(theme.appearance(&slow).fill.to_css(), "#ffffff");
	}

	#[test]
	fn speed_hue_grows_with_speed_and_caps() {
		let theme = Theme::new(RenderStyle::SpeedHue);
		let resting = theme.appearance(&Particle::new(0.0, 0.0, 0.0, 0.0, 1.5));
		let moving = theme.appearance(&Particle::new(0.0, 0.0, 0.0, 2.0, 1.5));
		let racing = theme.appearance(&Particle::new(0.0, 0.0, 30.0, 40.0, 1.5));

		assert_eq!(resting.radius, 1.5);
		assert_eq!(moving.radius, 2.5);
		let Fill::Hsl { hue, .. } = moving.fill else {
			panic!("expected hsl fill");
		};
		assert_eq!(hue, 120.0);
		let Fill::Hsl { hue, .. } = racing.fill else {
			panic!("expected hsl fill");
		};
		assert_eq!(hue, 280.0);
	}

	#[test]
	fn css_output() {
		assert_eq!(Color::rgba(10, 20, 30, 0.5).to_css(), "rgba(10, 20, 30, 0.5)");
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		let fill = Fill::Hsl {
			hue: 120.0,
			saturation: 100.0,
			lightness: 65.0,
		};
		assert_eq!(fill.to_css(), "hsl(120.0, 100%, 65%)");
	}
}
