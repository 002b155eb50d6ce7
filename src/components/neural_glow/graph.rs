use glam::DVec2;
use rand::Rng;

use super::edge::Edge;
use super::node::{Node, random_hue};
use super::params::{Bounds, GlowParams};

/// All nodes and the edges between them. Edges refer to nodes by index
/// into `nodes`; the topology never changes after construction.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Scatter `params.node_count` nodes over the margin box and link every
	/// pair closer than `params.max_edge_distance`.
	pub fn build<R: Rng + ?Sized>(params: &GlowParams, rng: &mut R) -> Self {
		let bounds = params.bounds();
		let nodes = (0..params.node_count)
			.map(|_| {
				let position = DVec2::new(
					rng.gen_range(bounds.min.x as i64..=bounds.max.x as i64) as f64,
					rng.gen_range(bounds.min.y as i64..=bounds.max.y as i64) as f64,
				);
				let velocity = DVec2::new(
					rng.gen_range(-params.drift..=params.drift),
					rng.gen_range(-params.drift..=params.drift),
				);
				Node::new(position, velocity, params.node_radius, random_hue(rng))
			})
			.collect();
		Self::link(nodes, params, rng)
	}

	/// Connect each unordered pair of `nodes` whose distance is below the
	/// threshold. O(n²) in the node count.
	pub fn link<R: Rng + ?Sized>(nodes: Vec<Node>, params: &GlowParams, rng: &mut R) -> Self {
		let mut edges = Vec::new();
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				if nodes[i].position.distance(nodes[j].position) < params.max_edge_distance {
					let speed = rng.gen_range(params.flow_speed_min..=params.flow_speed_max);
					edges.push(Edge::new(i, j, speed));
				}
			}
		}
		log::info!("Graph built: {} nodes, {} edges", nodes.len(), edges.len());
		Self { nodes, edges }
	}

	pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
		(!self.nodes.is_empty()).then(|| rng.gen_range(0..self.nodes.len()))
	}

	/// Closest node to `point` and its distance.
	pub fn nearest_node(&self, point: DVec2) -> Option<(usize, f64)> {
		self.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (i, n.position.distance(point)))
			.min_by(|(_, a), (_, b)| a.total_cmp(b))
	}

	pub fn activate_node<R: Rng + ?Sized>(&mut self, node: usize, strength: u32, rng: &mut R) {
		if let Some(n) = self.nodes.get_mut(node) {
			n.activate(strength, rng);
		}
	}

	pub fn activate_edges_touching(&mut self, node: usize, strength: u32) {
		for edge in self.edges.iter_mut().filter(|e| e.touches(node)) {
			edge.activate(strength);
		}
	}

	/// Step every node, then every edge.
	pub fn advance(&mut self, bounds: &Bounds) {
		for node in &mut self.nodes {
			node.advance(bounds);
		}
		for edge in &mut self.edges {
			edge.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::neural_glow::params::ACTIVITY_MAX;

	fn still(x: f64, y: f64) -> Node {
		Node::new(DVec2::new(x, y), DVec2::ZERO, 5.0, 0.0)
	}

	#[test]
	fn build_respects_count_bounds_and_threshold() {
		let params = GlowParams::default();
		for seed in 0..8 {
			let mut rng = SmallRng::seed_from_u64(seed);
			let graph = Graph::build(&params, &mut rng);
			assert_eq!(graph.nodes.len(), params.node_count);

			let bounds = params.bounds();
			for node in &graph.nodes {
				assert!(bounds.contains_x(node.position.x));
				assert!(bounds.contains_y(node.position.y));
				assert_eq!(node.position.x.fract(), 0.0);
				assert!(node.velocity.abs().max_element() <= params.drift);
			}

			let mut pairs = HashSet::new();
			for edge in &graph.edges {
				assert!(edge.a < edge.b);
				assert!(pairs.insert((edge.a, edge.b)), "duplicate pair");
				let (a, b) = (&graph.nodes[edge.a], &graph.nodes[edge.b]);
				assert!(a.position.distance(b.position) < params.max_edge_distance);
				assert!((params.flow_speed_min..=params.flow_speed_max).contains(&edge.flow_speed));
			}
		}
	}

	#[test]
	fn link_connects_exactly_the_close_pairs() {
		let mut rng = SmallRng::seed_from_u64(1);
		let nodes = vec![still(0.0, 0.0), still(150.0, 0.0), still(300.0, 0.0), still(0.0, 200.0)];
		let graph = Graph::link(nodes, &GlowParams::default(), &mut rng);
		let pairs: Vec<_> = graph.edges.iter().map(|e| (e.a, e.b)).collect();
		// (0, 3) sits exactly on the threshold and stays unlinked.
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
	}

	#[test]
	fn empty_graph_is_inert() {
		let params = GlowParams {
			node_count: 0,
			..GlowParams::default()
		};
		let mut rng = SmallRng::seed_from_u64(0);
		let mut graph = Graph::build(&params, &mut rng);
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
		assert_eq!(graph.random_node(&mut rng), None);
		assert_eq!(graph.nearest_node(DVec2::ZERO), None);
		graph.advance(&params.bounds());
	}

	#[test]
	fn nearest_node_picks_the_closest() {
		let mut rng = SmallRng::seed_from_u64(1);
		let nodes = vec![still(0.0, 0.0), still(100.0, 0.0), still(40.0, 40.0)];
		let graph = Graph::link(nodes, &GlowParams::default(), &mut rng);
		let (idx, dist) = graph.nearest_node(DVec2::new(90.0, 5.0)).unwrap();
		assert_eq!(idx, 1);
		assert!((dist - 125f64.sqrt()).abs() < 1e-9);
	}

	#[test]
	fn edges_touching_and_activation() {
		let mut rng = SmallRng::seed_from_u64(2);
		let nodes = vec![still(0.0, 0.0), still(100.0, 0.0), still(200.0, 0.0)];
		let mut graph = Graph::link(nodes, &GlowParams::default(), &mut rng);
		assert_eq!(graph.edges.iter().filter(|e| e.touches(1)).count(), 2);
		assert_eq!(graph.edges.iter().filter(|e| e.touches(0)).count(), 1);

		graph.activate_edges_touching(0, ACTIVITY_MAX);
		let lit: Vec<_> = graph.edges.iter().map(|e| e.activity()).collect();
		assert_eq!(lit, vec![ACTIVITY_MAX, 0]);
	}
}
