mod activation;
mod clock;
mod color;
mod component;
mod edge;
mod error;
mod graph;
mod input;
mod node;
mod params;
mod render;
mod scheduler;
mod state;
mod surface;

pub use component::NeuralGlowCanvas;
