use glam::DVec2;
use rand::rngs::SmallRng;

use super::graph::Graph;
use super::input::InputEvent;
use super::params::{ACTIVITY_MAX, Bounds, GlowParams};
use super::scheduler::Propagator;

/// Everything one running animation owns: the graph, the propagation walk
/// and the random source feeding both.
pub struct NeuralGlowState {
	pub graph: Graph,
	pub propagator: Propagator,
	pub params: GlowParams,
	pub running: bool,
	pub frame: u64,
	bounds: Bounds,
	rng: SmallRng,
}

impl NeuralGlowState {
	pub fn new(params: GlowParams, mut rng: SmallRng) -> Self {
		let graph = Graph::build(&params, &mut rng);
		Self {
			graph,
			propagator: Propagator::new(params.propagation_interval),
			bounds: params.bounds(),
			params,
			running: true,
			frame: 0,
			rng,
		}
	}

	/// Node under `point`, if the nearest one is within the hit radius.
	pub fn node_at_position(&self, point: DVec2) -> Option<usize> {
		self.graph
			.nearest_node(point)
			.filter(|&(_, dist)| dist < self.params.hit_radius())
			.map(|(idx, _)| idx)
	}

	/// Light the node under `point` and its edges, and steer the walk there.
	pub fn press(&mut self, point: DVec2) -> Option<usize> {
		let idx = self.node_at_position(point)?;
		log::debug!("Pointer activated node {} at ({:.0}, {:.0})", idx, point.x, point.y);
		self.graph
			.activate_node(idx, self.params.press_strength(), &mut self.rng);
		self.graph.activate_edges_touching(idx, ACTIVITY_MAX);
		self.propagator.redirect(idx);
		Some(idx)
	}

	pub fn handle(&mut self, event: InputEvent) {
		match event {
			InputEvent::PointerPress(point) => {
				self.press(point);
			}
			event if event.stops() => {
				if self.running {
					log::info!(
						"Stopping after frame {} (walk at {:?})",
						self.frame,
						self.propagator.current()
					);
				}
				self.running = false;
			}
			_ => {}
		}
	}

	/// One frame of simulation: drain input, maybe propagate, then advance
	/// every node and edge. A stop request still finishes this frame.
	pub fn update<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
		for event in events {
			self.handle(event);
		}
		self.frame += 1;
		self.propagator.tick(&mut self.graph, &mut self.rng);
		self.graph.advance(&self.bounds);
	}
}
