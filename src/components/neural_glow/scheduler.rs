//! Periodic propagation of activity across the graph.
//!
//! Every `interval` frames the walk moves from the current node into a
//! randomly chosen quiet neighbor, lighting the edges it considered on the
//! way. With no quiet neighbor, or no current node, it jumps to a random one.

use rand::Rng;

use super::graph::Graph;
use super::params::ACTIVITY_MAX;

/// Neighbors at or above this activity are considered busy.
const QUIET_BELOW: u32 = ACTIVITY_MAX / 2;

#[derive(Clone, Debug)]
pub struct Propagator {
	interval: u32,
	timer: u32,
	current: Option<usize>,
}

impl Propagator {
	pub fn new(interval: u32) -> Self {
		Self {
			interval,
			timer: 0,
			current: None,
		}
	}

	/// Node the walk will spread from next.
	pub fn current(&self) -> Option<usize> {
		self.current
	}

	/// Point the walk at `node`, e.g. after the user clicked it.
	pub fn redirect(&mut self, node: usize) {
		self.current = Some(node);
	}

	/// Count one frame; propagate when the interval has elapsed. Returns
	/// whether a propagation step ran.
	pub fn tick<R: Rng + ?Sized>(&mut self, graph: &mut Graph, rng: &mut R) -> bool {
		self.timer += 1;
		if self.timer < self.interval {
			return false;
		}
		self.timer = 0;
		self.propagate(graph, rng);
		true
	}

	pub fn propagate<R: Rng + ?Sized>(&mut self, graph: &mut Graph, rng: &mut R) {
		let Some(current) = self.current.filter(|&c| c < graph.nodes.len()) else {
			self.jump(graph, rng, true);
			return;
		};

		let Graph { nodes, edges } = graph;
		let mut quiet = Vec::new();
		for edge in edges.iter_mut() {
			let Some(neighbor) = edge.other(current) else {
				continue;
			};
			if nodes[neighbor].activity() < QUIET_BELOW {
				quiet.push(neighbor);
				edge.activate(ACTIVITY_MAX);
			}
		}

		if quiet.is_empty() {
			// Unlike a cold start, this jump leaves the new node's edges dark.
			self.jump(graph, rng, false);
			return;
		}
		let next = quiet[rng.gen_range(0..quiet.len())];
		log::trace!("Propagating {} -> {} ({} quiet neighbors)", current, next, quiet.len());
		self.current = Some(next);
		graph.activate_node(next, ACTIVITY_MAX, rng);
	}

	fn jump<R: Rng + ?Sized>(&mut self, graph: &mut Graph, rng: &mut R, with_edges: bool) {
		let Some(node) = graph.random_node(rng) else {
			return;
		};
		log::trace!("Propagation jumped to {}", node);
		self.current = Some(node);
		graph.activate_node(node, ACTIVITY_MAX, rng);
		if with_edges {
			graph.activate_edges_touching(node, ACTIVITY_MAX);
		}
	}
}
