//! Fixed tuning constants for the animation.

use glam::DVec2;

/// Upper bound of the activity counter shared by nodes and edges.
pub const ACTIVITY_MAX: u32 = 100;

/// Brightness (HSV value) of a dormant node or edge.
pub const BRIGHTNESS_BASE: f64 = 0.08;
/// Brightness (HSV value) an activated node or edge converges to.
pub const BRIGHTNESS_ACTIVE: f64 = 0.9;

/// Dim blue-violet used for dormant nodes and every edge line.
pub const BASE_HUE: f64 = 0.68;
pub const BASE_SATURATION: f64 = 0.8;
pub const ACTIVE_SATURATION: f64 = 1.0;

/// Red through yellow to green. Re-rolled on every activation.
pub const ACTIVE_HUES: [f64; 7] = [0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3];

pub const NODE_SMOOTHING: f64 = 0.1;
pub const EDGE_SMOOTHING: f64 = 0.08;

#[derive(Clone, Debug, PartialEq)]
pub struct GlowParams {
	pub width: f64,
	pub height: f64,
	pub node_count: usize,
	/// Inset from the surface border used for spawning and for bouncing.
	pub margin: f64,
	pub max_edge_distance: f64,
	pub node_radius: f64,
	/// Frames between two propagation steps.
	pub propagation_interval: u32,
	/// Half-width of the uniform range each drift component is drawn from.
	pub drift: f64,
	pub flow_speed_min: f64,
	pub flow_speed_max: f64,
	pub fps: f64,
}

impl Default for GlowParams {
	fn default() -> Self {
		Self {
			width: 1280.0,
			height: 720.0,
			node_count: 50,
			margin: 50.0,
			max_edge_distance: 200.0,
			node_radius: 5.0,
			propagation_interval: 50,
			drift: 0.5,
			flow_speed_min: 0.01,
			flow_speed_max: 0.03,
			fps: 60.0,
		}
	}
}

impl GlowParams {
	/// Region nodes spawn in and reflect off.
	pub fn bounds(&self) -> Bounds {
		let min = DVec2::new(self.margin, self.margin);
		let max = DVec2::new(self.width - self.margin, self.height - self.margin);
		Bounds { min, max: max.max(min) }
	}

	/// Pointer presses closer than this to a node's center hit it.
	pub fn hit_radius(&self) -> f64 {
		self.node_radius * 3.0
	}

	/// Strength of a pointer activation, above the cap on purpose.
	pub fn press_strength(&self) -> u32 {
		ACTIVITY_MAX * 3 / 2
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min: DVec2,
	pub max: DVec2,
}

impl Bounds {
	pub fn contains_x(&self, x: f64) -> bool {
		x >= self.min.x && x <= self.max.x
	}

	pub fn contains_y(&self, y: f64) -> bool {
		y >= self.min.y && y <= self.max.y
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_bounds_are_inset_by_margin() {
		let bounds = GlowParams::default().bounds();
		assert_eq!(bounds.min, DVec2::new(50.0, 50.0));
		assert_eq!(bounds.max, DVec2::new(1230.0, 670.0));
	}

	#[test]
	fn oversized_margin_collapses_bounds() {
		let params = GlowParams {
			width: 80.0,
			height: 80.0,
			..GlowParams::default()
		};
		let bounds = params.bounds();
		assert_eq!(bounds.min, bounds.max);
	}

	#[test]
	fn press_strength_exceeds_cap() {
		assert_eq!(GlowParams::default().press_strength(), 150);
	}
}
