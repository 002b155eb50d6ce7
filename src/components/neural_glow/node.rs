use glam::DVec2;
use rand::Rng;

use super::activation::{Activation, Phase};
use super::params::{
	ACTIVE_HUES, ACTIVE_SATURATION, BASE_HUE, BASE_SATURATION, Bounds, NODE_SMOOTHING,
};

pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	ACTIVE_HUES[rng.gen_range(0..ACTIVE_HUES.len())]
}

/// A drifting point that lights up when activated.
#[derive(Clone, Debug)]
pub struct Node {
	pub position: DVec2,
	pub velocity: DVec2,
	pub radius: f64,
	pub hue: f64,
	pulse: Activation,
}

impl Node {
	pub fn new(position: DVec2, velocity: DVec2, radius: f64, hue: f64) -> Self {
		Self {
			position,
			velocity,
			radius,
			hue,
			pulse: Activation::new(NODE_SMOOTHING),
		}
	}

	pub fn pulse(&self) -> &Activation {
		&self.pulse
	}

	pub fn activity(&self) -> u32 {
		self.pulse.activity()
	}

	pub fn phase(&self) -> Phase {
		self.pulse.phase()
	}

	/// Raise activity and pick a fresh hue from the palette.
	pub fn activate<R: Rng + ?Sized>(&mut self, strength: u32, rng: &mut R) {
		self.pulse.activate(strength);
		self.hue = random_hue(rng);
	}

	/// Decay, ease brightness, then drift and bounce off the margin box.
	pub fn advance(&mut self, bounds: &Bounds) {
		self.pulse.step();
		self.position += self.velocity;
		if !bounds.contains_x(self.position.x) {
			self.velocity.x = -self.velocity.x;
		}
		if !bounds.contains_y(self.position.y) {
			self.velocity.y = -self.velocity.y;
		}
	}

	/// Hue and saturation blended from the dim base toward the node's own
	/// hue as brightness rises.
	pub fn shade(&self) -> (f64, f64) {
		let t = self.pulse.lit_fraction();
		(
			BASE_HUE + (self.hue - BASE_HUE) * t,
			BASE_SATURATION + (ACTIVE_SATURATION - BASE_SATURATION) * t,
		)
	}
}
