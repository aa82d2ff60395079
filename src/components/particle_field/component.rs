//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fullscreen canvas and wires up pointer handlers on it,
//! plus `resize` and `keydown` listeners on the window. An animation loop runs via
//! `requestAnimationFrame`, stepping the simulation and redrawing each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::config::{FieldConfig, LinkConfig};
use super::render;
use super::state::FieldState;
use super::text_shape::sample_text;
use super::theme::Theme;

/// Bundles the simulation with the visual settings the renderer needs.
struct FieldContext {
	state: FieldState,
	theme: Theme,
	links: LinkConfig,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	let ctx = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
	Ok(ctx.dyn_into()?)
}

/// Pointer position relative to the canvas origin.
fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Spawn the particles, optionally arranged on the shape of `config.seed_text`.
fn build_state(config: &FieldConfig, width: f64, height: f64) -> FieldState {
	let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut state = FieldState::new(config, width, height, &mut rng);
	info!(
		"particle-field: {} particles in {}x{} (seed {})",
		state.particles.len(),
		width,
		height,
		seed
	);

	if let Some(text) = &config.seed_text {
		match sample_text(text, width as u32, height as u32, &config.text) {
			Ok(points) => {
				info!("particle-field: {} sample points for {:?}", points.len(), text);
				state.arrange_on(&points);
			}
			Err(e) => warn!("particle-field: text sampling failed: {:?}", e),
		}
	}
	state
}

/// Renders the particle field on a canvas that fills the viewport.
///
/// The configuration is read once when the canvas mounts. Moving the pointer over
/// the canvas activates the pointer force; leaving it switches the force off.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] config: Signal<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("particle-field: no window");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			error!("particle-field: cannot read viewport size");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("particle-field: {:?}", e);
				return;
			}
		};

		let config = config.get_untracked();
		*context_init.borrow_mut() = Some(FieldContext {
			state: build_state(&config, w, h),
			theme: Theme::new(config.style),
			links: config.links.clone(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_key = context_init.clone();
		*keydown_cb.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if let Some(ref mut c) = *context_key.borrow_mut() {
				if let Some(action) = c.state.handle_key(&ev.key()) {
					info!("particle-field: {:?}", action);
				}
			}
		}));
		if let Some(ref cb) = *keydown_cb.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.step();
				render::render(&c.state, &ctx, &c.theme, &c.links);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_position(&canvas, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.pointer_moved(x, y);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pointer_left();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
