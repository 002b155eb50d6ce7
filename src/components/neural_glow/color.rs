//! HSV to RGB conversion for every color the renderer emits.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const BLACK: Rgb = Rgb(0, 0, 0);

	/// CSS color string for canvas fill/stroke styles.
	pub fn css(&self) -> String {
		format!("rgb({}, {}, {})", self.0, self.1, self.2)
	}
}

/// Convert normalized hue, saturation and value to 8-bit RGB.
///
/// Every input is clamped to `[0, 1]` first, so out-of-range values never
/// produce garbage channels.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
	let (h, s, v) = (h.clamp(0.0, 1.0), s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
	let (r, g, b) = if s == 0.0 {
		(v, v, v)
	} else {
		let sector = (h * 6.0).floor();
		let f = h * 6.0 - sector;
		let (p, q, t) = (v * (1.0 - s), v * (1.0 - s * f), v * (1.0 - s * (1.0 - f)));
		match sector as u32 % 6 {
			0 => (v, t, p),
			1 => (q, v, p),
			2 => (p, v, t),
			3 => (p, q, v),
			4 => (t, p, v),
			_ => (v, p, q),
		}
	};
	Rgb(channel(r), channel(g), channel(b))
}

fn channel(x: f64) -> u8 {
	(x * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
