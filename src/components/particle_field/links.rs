//! Connective lines between nearby particles.
//!
//! A pairwise O(n²) pass. At the default particle count this dominates the frame,
//! which is why it ships disabled.

use super::particles::Particle;

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// 1.0 for coincident particles, fading to 0.0 at the threshold.
	pub opacity: f64,
}

/// Opacity for a pair at `dist`, or `None` when the pair is too far apart.
pub fn link_opacity(dist: f64, threshold: f64) -> Option<f64> {
	if dist <= threshold && threshold > 0.0 {
		Some(1.0 - dist / threshold)
	} else {
		None
	}
}

/// Collect a link for every pair closer than `threshold`.
pub fn neighbor_links(particles: &[Particle], threshold: f64) -> Vec<Link> {
	let mut links = Vec::new();
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let dx = a.x - b.x;
			if dx.abs() > threshold {
				continue;
			}
			let dy = a.y - b.y;
			if dy.abs() > threshold {
				continue;
			}
			let dist = (dx * dx + dy * dy).sqrt();
			// Zero-opacity lines at exactly the threshold are skipped.
			if let Some(opacity) = link_opacity(dist, threshold).filter(|&o| o > 0.0) {
				links.push(Link {
					from: (a.x, a.y),
					to: (b.x, b.y),
					opacity,
				});
			}
		}
	}
	links
}
