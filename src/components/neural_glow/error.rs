use thiserror::Error;

/// Failures while acquiring the canvas to draw on. All are fatal: the frame
/// loop never starts.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window available")]
	NoWindow,
	#[error("2d rendering context unavailable: {0}")]
	Context(String),
}
