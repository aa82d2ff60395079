//! Sample the inked pixels of rasterized text on a regular grid.
//!
//! The browser half draws the text into a detached canvas and reads back its RGBA
//! buffer; [`sample_alpha_grid`] does the actual sampling and runs anywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::TextSampleConfig;

/// Grid points of an RGBA buffer whose alpha is strictly above `threshold`.
///
/// Points are visited row by row at multiples of `spacing`, so every returned
/// coordinate lies in `[0, width) × [0, height)`.
pub fn sample_alpha_grid(
	rgba: &[u8],
	width: u32,
	height: u32,
	spacing: u32,
	threshold: u8,
) -> Vec<(f64, f64)> {
	let (w, h) = (width as usize, height as usize);
	if spacing == 0 || rgba.len() < w * h * 4 {
		return Vec::new();
	}

	let step = spacing as usize;
	let mut points = Vec::new();
	for y in (0..h).step_by(step) {
		for x in (0..w).step_by(step) {
			if rgba[(y * w + x) * 4 + 3] > threshold {
				points.push((x as f64, y as f64));
			}
		}
	}
	points
}

/// Rasterize `text` centered in a `width` × `height` off-screen canvas and sample it.
///
/// Blank text short-circuits to an empty result without touching the DOM.
pub fn sample_text(
	text: &str,
	width: u32,
	height: u32,
	config: &TextSampleConfig,
) -> Result<Vec<(f64, f64)>, JsValue> {
	if text.trim().is_empty() || width == 0 || height == 0 {
		return Ok(Vec::new());
	}

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document available"))?;
	let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
	canvas.set_width(width);
	canvas.set_height(height);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()?;
	ctx.set_font(&config.font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_text(text, width as f64 / 2.0, height as f64 / 2.0)?;

	let image = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;
	let pixels = image.data();
	Ok(sample_alpha_grid(
		&pixels,
		width,
		height,
		config.spacing,
		config.alpha_threshold,
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn buffer(width: u32, height: u32, alpha: impl Fn(u32, u32) -> u8) -> Vec<u8> {
		let mut rgba = Vec::with_capacity((width * height * 4) as usize);
		for y in 0..height {
			for x in 0..width {
				rgba.extend_from_slice(&[255, 255, 255, alpha(x, y)]);
			}
		}
		rgba
	}

	#[test]
	fn transparent_buffer_has_no_points() {
		let rgba = buffer(40, 30, |_, _| 0);
		assert!(sample_alpha_grid(&rgba, 40, 30, 6, 128).is_empty());
	}

	#[test]
	fn blank_text_returns_empty_without_dom() {
		let config = TextSampleConfig::default();
		assert_eq!(sample_text("", 100, 100, &config).unwrap(), Vec::new());
		assert_eq!(sample_text("   ", 100, 100, &config).unwrap(), Vec::new());
	}

	#[test]
	fn opaque_buffer_yields_full_grid() {
		let (w, h) = (40, 25);
		let rgba = buffer(w, h, |_, _| 255);
		let points = sample_alpha_grid(&rgba, w, h, 6, 128);

		// x in {0,6,...,36}, y in {0,6,...,24}
		assert_eq!(points.len(), 7 * 5);
		for &(x, y) in &points {
			assert_eq!(x % 6.0, 0.0);
			assert_eq!(y % 6.0, 0.0);
			assert!(x < w as f64 && y < h as f64);
		}
	}

	#[test]
	fn threshold_is_exclusive() {
		let rgba = buffer(12, 12, |x, _| if x < 6 { 128 } else { 129 });
		let points = sample_alpha_grid(&rgba, 12, 12, 6, 128);
		assert_eq!(points, vec![(6.0, 0.0), (6.0, 6.0)]);
	}

	#[test]
	fn only_inked_region_is_sampled() {
		let rgba = buffer(30, 30, |x, y| if (12..24).contains(&x) && y < 6 { 255 } else { 0 });
		let points = sample_alpha_grid(&rgba, 30, 30, 6, 128);
		assert_eq!(points, vec![(12.0, 0.0), (18.0, 0.0)]);
	}

	#[test]
	fn short_buffer_or_zero_spacing_is_empty() {
		let rgba = buffer(6, 6, |_, _| 255);
		assert!(sample_alpha_grid(&rgba, 12, 12, 6, 128).is_empty());
		assert!(sample_alpha_grid(&rgba, 6, 6, 0, 128).is_empty());
	}
}
