use super::activation::Phase;
use super::color::{Rgb, hsv_to_rgb};
use super::graph::Graph;
use super::params::{ACTIVE_SATURATION, BASE_HUE, BASE_SATURATION, BRIGHTNESS_ACTIVE};
use super::state::NeuralGlowState;
use super::surface::Surface;

const EDGE_WIDTH: f64 = 1.0;
const NODE_GLOW_RINGS: usize = 3;
const FLOW_GLOW_RINGS: usize = 2;
/// Flow marker size relative to the node radius.
const FLOW_SCALE: f64 = 0.6;

/// Clear, draw edges, then nodes on top, and present.
pub fn render<S: Surface + ?Sized>(state: &NeuralGlowState, surface: &mut S) {
	surface.clear(Rgb::BLACK);
	draw_edges(&state.graph, state.params.node_radius, surface);
	draw_nodes(&state.graph, surface);
	surface.present();
}

/// 8-bit alpha of a glow ring, truncated like a pixel value would be.
fn ring_alpha(intensity: f64, falloff: f64) -> Option<f64> {
	let alpha = (255.0 * intensity * falloff) as i32;
	(alpha > 0).then(|| alpha as f64 / 255.0)
}

fn draw_edges<S: Surface + ?Sized>(graph: &Graph, node_radius: f64, surface: &mut S) {
	for edge in &graph.edges {
		let (a, b) = (&graph.nodes[edge.a], &graph.nodes[edge.b]);
		let pulse = edge.pulse();
		let color = hsv_to_rgb(BASE_HUE, BASE_SATURATION, pulse.brightness());
		surface.line(a.position, b.position, color, EDGE_WIDTH);

		if edge.phase() == Phase::Dormant {
			continue;
		}
		let at = a.position.lerp(b.position, edge.flow_position);
		let flow_color = hsv_to_rgb(a.hue, ACTIVE_SATURATION, BRIGHTNESS_ACTIVE);
		let flow_radius = node_radius * FLOW_SCALE;
		let intensity = pulse.intensity();
		surface.fill_circle(at, flow_radius * intensity, flow_color, 1.0);

		for i in 0..FLOW_GLOW_RINGS {
			let Some(alpha) = ring_alpha(intensity, 0.4 - 0.1 * i as f64) else {
				continue;
			};
			let radius = flow_radius * (1.5 + 0.5 * i as f64);
			surface.fill_circle(at, radius, flow_color, alpha);
		}
	}
}

fn draw_nodes<S: Surface + ?Sized>(graph: &Graph, surface: &mut S) {
	for node in &graph.nodes {
		let (hue, saturation) = node.shade();
		let brightness = node.pulse().brightness();
		surface.fill_circle(
			node.position,
			node.radius,
			hsv_to_rgb(hue, saturation, brightness),
			1.0,
		);

		if node.phase() == Phase::Dormant {
			continue;
		}
		let intensity = node.pulse().intensity();
		for i in 0..NODE_GLOW_RINGS {
			let i = i as f64;
			let Some(alpha) = ring_alpha(intensity, 0.5 - 0.1 * i) else {
				continue;
			};
			let glow = hsv_to_rgb(hue, saturation, brightness + 0.1 * i);
			surface.fill_circle(node.position, node.radius + 5.0 + 3.0 * i, glow, alpha);
		}
	}
}
