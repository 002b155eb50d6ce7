pub mod neural_glow;
