/// Frame-rate limiter fed with `requestAnimationFrame` timestamps.
///
/// Deadlines advance by a fixed interval rather than from the last admitted
/// callback, so displays that are not a multiple of the target rate still
/// average it.
#[derive(Clone, Debug)]
pub struct FrameClock {
	interval_ms: f64,
	next: Option<f64>,
}

/// Tolerated early arrival, so a 60 Hz display is not halved by jitter.
const SLACK_MS: f64 = 1.0;

impl FrameClock {
	pub fn new(fps: f64) -> Self {
		Self {
			interval_ms: 1000.0 / fps.max(1.0),
			next: None,
		}
	}

	/// Whether a frame should run at `now` (milliseconds).
	pub fn admit(&mut self, now: f64) -> bool {
		let next = match self.next {
			Some(next) if now + SLACK_MS < next => return false,
			Some(next) => next + self.interval_ms,
			None => now + self.interval_ms,
		};
		// Slow displays or stalled tabs drop the backlog instead of bursting.
		self.next = Some(if next <= now { now + self.interval_ms } else { next });
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Frames admitted over one second of callbacks at `hz`.
	fn admitted_per_second(hz: u32) -> usize {
		let mut clock = FrameClock::new(60.0);
		(0..hz)
			.filter(|i| clock.admit(*i as f64 * 1000.0 / hz as f64))
			.count()
	}

	#[test]
	fn first_frame_always_runs() {
		assert!(FrameClock::new(60.0).admit(12345.0));
	}

	#[test]
	fn sixty_hz_display_runs_every_callback() {
		let mut clock = FrameClock::new(60.0);
		let admitted = (0..120)
			.filter(|i| clock.admit(*i as f64 * 1000.0 / 60.0 + if i % 2 == 0 { 0.4 } else { -0.4 }))
			.count();
		assert_eq!(admitted, 120);
	}

	#[test]
	fn fast_displays_average_sixty() {
		for hz in [60, 75, 90, 100, 120, 144, 165, 240] {
			assert_eq!(admitted_per_second(hz), 60, "{hz} Hz");
		}
	}

	#[test]
	fn slow_display_runs_every_callback_without_bursts() {
		assert_eq!(admitted_per_second(30), 30);

		let mut clock = FrameClock::new(60.0);
		assert!(clock.admit(0.0));
		// Tab was hidden for a second.
		assert!(clock.admit(1000.0));
		assert!(!clock.admit(1004.0));
		assert!(clock.admit(1016.0));
	}
}
