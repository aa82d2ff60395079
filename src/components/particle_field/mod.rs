//! Interactive particle field component.
//!
//! Renders a swarm of drifting particles on an HTML canvas with:
//! - Edge bouncing and per-frame velocity damping
//! - Pointer repel/attract force, toggled with a key press
//! - Optional connective lines between nearby particles
//! - Optional start-up arrangement in the shape of a text string
//!
//! The simulation (`FieldState`, `Particle`) is independent of the browser and
//! can be stepped directly:
//!
//! ```ignore
//! use particle_field::{FieldConfig, FieldState};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let config = FieldConfig::default();
//! let mut field = FieldState::new(&config, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));
//! field.pointer_moved(400.0, 300.0);
//! field.step();
//! ```

mod component;
pub mod config;
pub mod links;
pub mod particles;
mod render;
pub mod state;
pub mod text_shape;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::{BoundaryPolicy, FieldConfig, RenderStyle};
pub use particles::{InteractionMode, Particle};
pub use state::FieldState;
