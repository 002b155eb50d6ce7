use glam::DVec2;

/// Discrete input the frame loop drains at the start of every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	/// The page is going away.
	Quit,
	Escape,
	/// Primary pointer went down at this canvas-space coordinate.
	PointerPress(DVec2),
}

impl InputEvent {
	/// Map a DOM `KeyboardEvent.key` value to an event we care about.
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"Escape" | "Esc" => Some(InputEvent::Escape),
			_ => None,
		}
	}

	/// Whether this event ends the frame loop.
	pub fn stops(&self) -> bool {
		matches!(self, InputEvent::Quit | InputEvent::Escape)
	}
}

/// Events waiting for the next frame. Closed once the loop stops, after
/// which pushes are dropped.
#[derive(Debug, Default)]
pub struct InputQueue {
	pending: Vec<InputEvent>,
	closed: bool,
}

impl InputQueue {
	pub fn push(&mut self, event: InputEvent) {
		if !self.closed {
			self.pending.push(event);
		}
	}

	pub fn drain(&mut self) -> Vec<InputEvent> {
		std::mem::take(&mut self.pending)
	}

	/// Stop accepting events and discard any still queued.
	pub fn close(&mut self) {
		self.closed = true;
		self.pending.clear();
	}
}

/// Convert a client-space pointer position into canvas pixels, undoing any
/// CSS scaling of the element. `rect` is `(left, top, width, height)`.
pub fn client_to_canvas(
	client: DVec2,
	rect: (f64, f64, f64, f64),
	canvas_size: DVec2,
) -> DVec2 {
	let (left, top, width, height) = rect;
	let scale = DVec2::new(
		if width > 0.0 { canvas_size.x / width } else { 1.0 },
		if height > 0.0 { canvas_size.y / height } else { 1.0 },
	);
	(client - DVec2::new(left, top)) * scale
}
