//! Point-mass particles and the per-frame update rule.

use rand::Rng;

use super::config::{BoundaryPolicy, PhysicsConfig, SpawnConfig};

/// Whether the pointer pushes particles away or pulls them in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
	#[default]
	Repel,
	Attract,
}

impl InteractionMode {
	pub fn toggled(self) -> Self {
		match self {
			InteractionMode::Repel => InteractionMode::Attract,
			InteractionMode::Attract => InteractionMode::Repel,
		}
	}

	/// Sign applied to the pointer-to-particle direction.
	fn sign(self) -> f64 {
		match self {
			InteractionMode::Repel => 1.0,
			InteractionMode::Attract => -1.0,
		}
	}
}

/// Everything a particle needs to read to advance one frame.
#[derive(Clone, Copy, Debug)]
pub struct StepEnv<'a> {
	pub width: f64,
	pub height: f64,
	/// Pointer position, present only while the pointer is over the canvas.
	pub pointer: Option<(f64, f64)>,
	pub mode: InteractionMode,
	pub physics: &'a PhysicsConfig,
}

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64) -> Self {
		Self { x, y, vx, vy, size }
	}

	/// Random position inside the viewport with a small random velocity.
	pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, spawn: &SpawnConfig) -> Self {
		let max = spawn.max_speed;
		Self {
			x: rng.gen_range(0.0..1.0) * width,
			y: rng.gen_range(0.0..1.0) * height,
			vx: (rng.gen_range(0.0..1.0) - 0.5) * 2.0 * max,
			vy: (rng.gen_range(0.0..1.0) - 0.5) * 2.0 * max,
			size: spawn.size,
		}
	}

	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}

	/// Advance by exactly one frame: integrate, bounce, pointer force, damping.
	///
	/// The step is a fixed per-frame unit, not scaled by elapsed time.
	pub fn step(&mut self, env: &StepEnv) {
		self.x += self.vx;
		self.y += self.vy;

		match env.physics.boundary {
			BoundaryPolicy::Flip => {
				if self.x < 0.0 || self.x > env.width {
					self.vx = -self.vx;
				}
				if self.y < 0.0 || self.y > env.height {
					self.vy = -self.vy;
				}
			}
			BoundaryPolicy::Reflect => {
				(self.x, self.vx) = reflect(self.x, self.vx, env.width);
				(self.y, self.vy) = reflect(self.y, self.vy, env.height);
			}
		}

		if let Some((px, py)) = env.pointer {
			let (dx, dy) = (self.x - px, self.y - py);
			let dist = (dx * dx + dy * dy).sqrt();
			let force = pointer_force(dist, env.physics.influence_radius);
			if force > 0.0 {
				let strength = force * env.physics.force_strength * env.mode.sign();
				self.vx += dx / dist * strength;
				self.vy += dy / dist * strength;
			}
		}

		self.vx *= env.physics.damping;
		self.vy *= env.physics.damping;
	}
}

/// Normalized pointer force: 1 at the pointer, falling linearly to 0 at `radius`.
///
/// Zero distance yields no force since the push direction is undefined there.
pub fn pointer_force(dist: f64, radius: f64) -> f64 {
	if dist > 0.0 && dist < radius {
		(radius - dist) / radius
	} else {
		0.0
	}
}

/// Clamp one axis into `[0, extent]`, pointing the velocity back inside.
fn reflect(pos: f64, vel: f64, extent: f64) -> (f64, f64) {
	if pos < 0.0 {
		(0.0, vel.abs())
	} else if pos > extent {
		(extent, -vel.abs())
	} else {
		(pos, vel)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn env(physics: &PhysicsConfig, pointer: Option<(f64, f64)>, mode: InteractionMode) -> StepEnv<'_> {
		StepEnv {
			width: 800.0,
			height: 600.0,
			pointer,
			mode,
			physics,
		}
	}

	#[test]
	fn spawn_stays_in_bounds() {
		let mut rng = SmallRng::seed_from_u64(3);
		let spawn = SpawnConfig::default();
		for _ in 0..1000 {
			let p = Particle::spawn(&mut rng, 320.0, 240.0, &spawn);
			assert!((0.0..320.0).contains(&p.x));
			assert!((0.0..240.0).contains(&p.y));
			assert!(p.vx.abs() <= spawn.max_speed);
			assert!(p.vy.abs() <= spawn.max_speed);
			assert_eq!(p.size, spawn.size);
		}
	}

	#[test]
	fn damping_alone_decays_speed_geometrically() {
		let physics = PhysicsConfig::default();
		let env = env(&physics, None, InteractionMode::Repel);
		let mut p = Particle::new(400.0, 300.0, 0.3, -0.4, 1.5);
		let initial = p.speed();

		for k in 1..=20 {
			p.step(&env);
			let expected = initial * physics.damping.powi(k);
			assert!((p.speed() - expected).abs() < 1e-12, "step {k}");
		}
	}

	#[test]
	fn crossing_right_edge_flips_vx_same_step() {
		let physics = PhysicsConfig::default();
		let env = env(&physics, None, InteractionMode::Repel);
		let mut p = Particle::new(799.8, 300.0, 0.5, 0.0, 1.5);

		p.step(&env);

		assert!(p.x > 800.0, "flip policy leaves the overshoot in place");
		assert!(p.vx < 0.0);
		assert!((p.vx + 0.5 * physics.damping).abs() < 1e-12);
	}

	#[test]
	fn crossing_top_edge_flips_vy_same_step() {
		let physics = PhysicsConfig::default();
		let env = env(&physics, None, InteractionMode::Repel);
		let mut p = Particle::new(100.0, 0.1, 0.0, -0.3, 1.5);

		p.step(&env);

		assert!(p.vy > 0.0);
		assert_eq!(p.vx, 0.0);
	}

	#[test]
	fn reflect_policy_clamps_position() {
		let physics = PhysicsConfig {
			boundary: BoundaryPolicy::Reflect,
			..PhysicsConfig::default()
		};
		let env = env(&physics, None, InteractionMode::Repel);
		let mut p = Particle::new(0.1, 599.9, -0.5, 0.5, 1.5);

		p.step(&env);

		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 600.0);
		assert!(p.vx > 0.0);
		assert!(p.vy < 0.0);
	}

	#[test]
	fn repel_pushes_away_from_pointer() {
		let physics = PhysicsConfig {
			damping: 1.0,
			..PhysicsConfig::default()
		};
		let pointer = (400.0, 300.0);
		let env = env(&physics, Some(pointer), InteractionMode::Repel);
		let mut p = Particle::new(430.0, 340.0, 0.0, 0.0, 1.5);

		p.step(&env);

		let (dx, dy) = (p.x - pointer.0, p.y - pointer.1);
		assert!(p.vx * dx + p.vy * dy > 0.0);
	}

	#[test]
	fn attract_pulls_toward_pointer() {
		let physics = PhysicsConfig {
			damping: 1.0,
			..PhysicsConfig::default()
		};
		let pointer = (400.0, 300.0);
		let env = env(&physics, Some(pointer), InteractionMode::Attract);
		let mut p = Particle::new(370.0, 250.0, 0.0, 0.0, 1.5);

		p.step(&env);

		let (dx, dy) = (p.x - pointer.0, p.y - pointer.1);
		assert!(p.vx * dx + p.vy * dy < 0.0);
	}

	#[test]
	fn force_magnitude_matches_linear_falloff() {
		let physics = PhysicsConfig {
			damping: 1.0,
			..PhysicsConfig::default()
		};
		let env = env(&physics, Some((400.0, 300.0)), InteractionMode::Repel);
		// 75 units right of the pointer: half strength.
		let mut p = Particle::new(475.0, 300.0, 0.0, 0.0, 1.5);

		p.step(&env);

		assert!((p.vx - 0.25).abs() < 1e-12);
		assert!(p.vy.abs() < 1e-12);
	}

	#[test]
	fn force_vanishes_at_radius_and_at_pointer() {
		assert_eq!(pointer_force(150.0, 150.0), 0.0);
		assert_eq!(pointer_force(151.0, 150.0), 0.0);
		assert_eq!(pointer_force(0.0, 150.0), 0.0);
		assert!((pointer_force(1e-9, 150.0) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn particle_on_pointer_is_untouched() {
		let physics = PhysicsConfig::default();
		let env = env(&physics, Some((400.0, 300.0)), InteractionMode::Attract);
		let mut p = Particle::new(400.0, 300.0, 0.0, 0.0, 1.5);

		p.step(&env);

		assert_eq!((p.vx, p.vy), (0.0, 0.0));
		assert!(p.vx.is_finite() && p.vy.is_finite());
	}

	#[test]
	fn mode_toggles_back_and_forth() {
		let mode = InteractionMode::default();
		assert_eq!(mode, InteractionMode::Repel);
		assert_eq!(mode.toggled(), InteractionMode::Attract);
		assert_eq!(mode.toggled().toggled(), InteractionMode::Repel);
	}
}
