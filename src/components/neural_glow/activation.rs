//! Activity counter and smoothed brightness shared by nodes and edges.

use super::params::{ACTIVITY_MAX, BRIGHTNESS_ACTIVE, BRIGHTNESS_BASE};

/// Guards the lit fraction against a zero brightness span.
const SPAN_EPSILON: f64 = 0.001;
/// Brightness within this distance of the active level counts as settled.
const SETTLE_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// No activity left; brightness drifts back to base.
	Dormant,
	/// Active and still brightening toward the active level.
	Rising,
	/// Active at full brightness while the counter runs down.
	Decaying,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
	activity: u32,
	brightness: f64,
	target: f64,
	rate: f64,
}

impl Activation {
	/// Dormant state converging at `rate` per step.
	pub fn new(rate: f64) -> Self {
		Self {
			activity: 0,
			brightness: BRIGHTNESS_BASE,
			target: BRIGHTNESS_BASE,
			rate,
		}
	}

	pub fn activity(&self) -> u32 {
		self.activity
	}

	pub fn brightness(&self) -> f64 {
		self.brightness
	}

	pub fn activate(&mut self, strength: u32) {
		self.activity = self.activity.saturating_add(strength).min(ACTIVITY_MAX);
		// A zero-strength poke on a dormant entity would otherwise never decay.
		if self.activity > 0 {
			self.target = BRIGHTNESS_ACTIVE;
		}
	}

	/// One simulation step: count down, then ease brightness toward target.
	pub fn step(&mut self) {
		if self.activity > 0 {
			self.activity -= 1;
			if self.activity == 0 {
				self.target = BRIGHTNESS_BASE;
			}
		}
		self.brightness += (self.target - self.brightness) * self.rate;
		self.brightness = self.brightness.clamp(BRIGHTNESS_BASE, BRIGHTNESS_ACTIVE);
	}

	/// Remaining activity as a fraction of the cap.
	pub fn intensity(&self) -> f64 {
		self.activity as f64 / ACTIVITY_MAX as f64
	}

	/// Position of brightness between base and active, in `[0, 1)`.
	pub fn lit_fraction(&self) -> f64 {
		(self.brightness - BRIGHTNESS_BASE) / (BRIGHTNESS_ACTIVE - BRIGHTNESS_BASE + SPAN_EPSILON)
	}

	pub fn phase(&self) -> Phase {
		if self.activity == 0 {
			Phase::Dormant
		} else if self.target - self.brightness > SETTLE_EPSILON {
			Phase::Rising
		} else {
			Phase::Decaying
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::SmallRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::components::neural_glow::params::NODE_SMOOTHING;

	#[test]
	fn starts_dormant_at_base() {
		let a = Activation::new(NODE_SMOOTHING);
		assert_eq!(a.activity(), 0);
		assert_eq!(a.brightness(), BRIGHTNESS_BASE);
		assert_eq!(a.phase(), Phase::Dormant);
	}

	#[test]
	fn full_activation_drains_in_exactly_cap_steps() {
		let mut a = Activation::new(NODE_SMOOTHING);
		a.activate(100);
		assert_eq!(a.activity(), 100);
		assert_eq!(a.target, BRIGHTNESS_ACTIVE);
		for _ in 0..99 {
			a.step();
			assert!(a.activity() > 0);
		}
		a.step();
		assert_eq!(a.activity(), 0);
		assert_eq!(a.target, BRIGHTNESS_BASE);
	}

	#[test]
	fn activation_is_capped() {
		let mut a = Activation::new(NODE_SMOOTHING);
		a.activate(60);
		a.activate(60);
		assert_eq!(a.activity(), ACTIVITY_MAX);
		a.activate(u32::MAX);
		assert_eq!(a.activity(), ACTIVITY_MAX);
	}

	#[test]
	fn zero_strength_on_dormant_keeps_target() {
		let mut a = Activation::new(NODE_SMOOTHING);
		a.activate(0);
		assert_eq!(a.target, BRIGHTNESS_BASE);
	}

	#[test]
	fn brightness_decays_monotonically_after_drain() {
		let mut a = Activation::new(NODE_SMOOTHING);
		a.activate(100);
		for _ in 0..100 {
			a.step();
		}
		let mut last = a.brightness();
		for _ in 0..500 {
			a.step();
			assert!(a.brightness() <= last);
			last = a.brightness();
		}
		assert!(last - BRIGHTNESS_BASE < 1e-6);
	}

	#[test]
	fn phases_follow_the_pulse() {
		let mut a = Activation::new(NODE_SMOOTHING);
		a.activate(100);
		a.step();
		assert_eq!(a.phase(), Phase::Rising);
		for _ in 0..60 {
			a.step();
		}
		assert_eq!(a.phase(), Phase::Decaying);
		for _ in 0..39 {
			a.step();
		}
		assert_eq!(a.phase(), Phase::Dormant);
	}

	#[test]
	fn random_interleaving_stays_in_range() {
		let mut rng = SmallRng::seed_from_u64(7);
		for rate in [NODE_SMOOTHING, 0.08, 1.0] {
			let mut a = Activation::new(rate);
			for _ in 0..5_000 {
				if rng.gen_bool(0.05) {
					a.activate(rng.gen_range(0..=200));
				}
				a.step();
				assert!(a.activity() <= ACTIVITY_MAX);
				assert!((BRIGHTNESS_BASE..=BRIGHTNESS_ACTIVE).contains(&a.brightness()));
				assert!((0.0..1.0).contains(&a.lit_fraction()));
			}
		}
	}
}
