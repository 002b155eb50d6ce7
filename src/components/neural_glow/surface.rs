use std::f64::consts::PI;

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::color::Rgb;

/// Where a frame gets drawn.
pub trait Surface {
	fn clear(&mut self, color: Rgb);
	/// Filled circle; `alpha` in `[0, 1]`, 1 being opaque.
	fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64);
	fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64);
	/// Hand the finished frame to the display.
	fn present(&mut self);
}

/// 2D canvas context plus the pixel size it clears.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self { ctx, width, height }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, color: Rgb) {
		self.ctx.set_global_alpha(1.0);
		self.ctx.set_fill_style_str(&color.css());
		self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
	}

	fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
		if radius <= 0.0 {
			return;
		}
		self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0));
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(&color.css());
		self.ctx.fill();
		self.ctx.set_global_alpha(1.0);
	}

	fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
		self.ctx.set_stroke_style_str(&color.css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	// The browser composites once the animation frame callback returns.
	fn present(&mut self) {}
}
