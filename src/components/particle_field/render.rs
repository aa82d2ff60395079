//! Canvas rendering for the particle field.
//!
//! Each frame clears the canvas, draws the connective lines when they are
//! enabled, then draws the particles on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::LinkConfig;
use super::links::{Link, neighbor_links};
use super::state::FieldState;
use super::theme::Theme;

/// Renders the complete field to the canvas.
pub fn render(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	links: &LinkConfig,
) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	if state.links_enabled {
		draw_links(ctx, theme, links, &neighbor_links(&state.particles, links.threshold));
	}

	draw_particles(state, ctx, theme);
}

fn draw_links(ctx: &CanvasRenderingContext2d, theme: &Theme, config: &LinkConfig, links: &[Link]) {
	ctx.set_line_width(config.line_width);
	for link in links {
		ctx.set_stroke_style_str(&theme.link_color.with_alpha(link.opacity).to_css());
		ctx.begin_path();
		ctx.move_to(link.from.0, link.from.1);
		ctx.line_to(link.to.0, link.to.1);
		ctx.stroke();
	}
}

fn draw_particles(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let mut current_fill = String::new();

	for p in &state.particles {
		let look = theme.appearance(p);
		let fill = look.fill.to_css();
		// Solid fills repeat every particle; skip redundant style changes.
		if fill != current_fill {
			ctx.set_fill_style_str(&fill);
			current_fill = fill;
		}

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, look.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
