//! particle-field: an interactive particle animation on an HTML canvas.
//!
//! This crate provides a WASM-based canvas component that simulates a swarm of
//! drifting particles reacting to the pointer, with optional connective lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	BoundaryPolicy, FieldConfig, FieldState, InteractionMode, Particle, ParticleFieldCanvas,
	RenderStyle,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load configuration overrides from a script element with id="field-config".
/// Expected format: JSON matching [`FieldConfig`], any field may be omitted.
pub fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("particle-field: loaded config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads configuration from the DOM and renders the fullscreen particle field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-field">
			<ParticleFieldCanvas config=config_signal />
			<div class="field-overlay">
				<p class="hint">"Move the pointer to push particles. Press A to attract, L for lines."</p>
			</div>
		</div>
	}
}
