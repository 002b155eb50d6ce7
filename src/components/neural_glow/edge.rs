use super::activation::{Activation, Phase};
use super::params::EDGE_SMOOTHING;

/// A fixed link between two nodes, referenced by index, carrying a flow
/// marker that travels from `a` to `b` while the edge is active.
#[derive(Clone, Debug)]
pub struct Edge {
	pub a: usize,
	pub b: usize,
	/// Progress of the flow marker along `a -> b`, in `[0, 1]`.
	pub flow_position: f64,
	pub flow_speed: f64,
	pulse: Activation,
}

impl Edge {
	pub fn new(a: usize, b: usize, flow_speed: f64) -> Self {
		debug_assert_ne!(a, b, "edges never loop back to their own node");
		Self {
			a,
			b,
			flow_position: 0.0,
			flow_speed,
			pulse: Activation::new(EDGE_SMOOTHING),
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

	pub fn touches(&self, node: usize) -> bool {
		self.a == node || self.b == node
	}

	/// The endpoint opposite `node`, if `node` is an endpoint at all.
	pub fn other(&self, node: usize) -> Option<usize> {
		if self.a == node {
			Some(self.b)
		} else if self.b == node {
			Some(self.a)
		} else {
			None
		}
	}

	/// Raise activity and restart the flow marker at `a`.
	pub fn activate(&mut self, strength: u32) {
		self.pulse.activate(strength);
		self.flow_position = 0.0;
	}

	pub fn advance(&mut self) {
		self.pulse.step();
		if self.activity() > 0 {
			self.flow_position += self.flow_speed;
			if self.flow_position > 1.0 {
				self.flow_position = 0.0;
			}
		}
	}
}
