//! Simulation context: particles plus the shared input-driven state.
//!
//! Input callbacks mutate the pointer, mode, link toggle and viewport; the frame
//! loop reads them in [`FieldState::step`]. Host callbacks and frames never
//! overlap, so the state is owned by a single `RefCell` in the component.

use log::debug;
use rand::Rng;

use super::config::{FieldConfig, KeyBindings, PhysicsConfig};
use super::particles::{InteractionMode, Particle, StepEnv};

/// Pointer position over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
	/// False once the pointer leaves the canvas; disables the pointer force.
	pub active: bool,
}

/// What a key press changed, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
	ToggledMode(InteractionMode),
	ToggledLinks(bool),
}

/// The particle collection and everything the update step reads.
pub struct FieldState {
	pub particles: Vec<Particle>,
	pub pointer: PointerState,
	pub mode: InteractionMode,
	pub links_enabled: bool,
	pub width: f64,
	pub height: f64,
	physics: PhysicsConfig,
	keys: KeyBindings,
}

impl FieldState {
	/// Spawn `config.particle_count` particles at random inside the viewport.
	pub fn new<R: Rng>(config: &FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..config.particle_count)
			.map(|_| Particle::spawn(rng, width, height, &config.spawn))
			.collect();
		Self::with_particles(config, particles, width, height)
	}

	/// Build a field around an existing particle collection.
	pub fn with_particles(
		config: &FieldConfig,
		particles: Vec<Particle>,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			particles,
			pointer: PointerState {
				x: width / 2.0,
				y: height / 2.0,
				active: false,
			},
			mode: InteractionMode::default(),
			links_enabled: config.links.enabled,
			width,
			height,
			physics: config.physics.clone(),
			keys: config.keys.clone(),
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let env = StepEnv {
			width: self.width,
			height: self.height,
			pointer: self
				.pointer
				.active
				.then_some((self.pointer.x, self.pointer.y)),
			mode: self.mode,
			physics: &self.physics,
		};
		for p in &mut self.particles {
			p.step(&env);
		}
	}

	/// Update the bounds. Particles keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("particle-field: resize to {}x{}", width, height);
		self.width = width;
		self.height = height;
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = PointerState { x, y, active: true };
	}

	pub fn pointer_left(&mut self) {
		self.pointer.active = false;
	}

	pub fn toggle_mode(&mut self) -> InteractionMode {
		self.mode = self.mode.toggled();
		self.mode
	}

	pub fn toggle_links(&mut self) -> bool {
		self.links_enabled = !self.links_enabled;
		self.links_enabled
	}

	/// Apply the toggle bound to `key`, ignoring case and modifiers.
	pub fn handle_key(&mut self, key: &str) -> Option<KeyAction> {
		let action = if key.eq_ignore_ascii_case(&self.keys.toggle_mode) {
			KeyAction::ToggledMode(self.toggle_mode())
		} else if key.eq_ignore_ascii_case(&self.keys.toggle_links) {
			KeyAction::ToggledLinks(self.toggle_links())
		} else {
			return None;
		};
		debug!("particle-field: key {:?} -> {:?}", key, action);
		Some(action)
	}

	/// Move particles onto `points`, cycling through them if there are fewer
	/// points than particles. Velocities are left alone.
	pub fn arrange_on(&mut self, points: &[(f64, f64)]) {
		if points.is_empty() {
			return;
		}
		for (p, &(x, y)) in self.particles.iter_mut().zip(points.iter().cycle()) {
			p.x = x;
			p.y = y;
		}
	}
}
