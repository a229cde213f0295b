//! Timing and interpolation helpers shared by the UI effects.
//!
//! Nothing here owns a timer. Callers pass timestamps in (milliseconds,
//! e.g. `Date.now()`) so the helpers stay deterministic.

// ============================================================================
// Rate limiting
// ============================================================================

/// Lets a call through at most once per `interval_ms`.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Returns `true` if the call at `now_ms` should run.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge debounce bookkeeping.
///
/// Every call returns a ticket; after the delay the caller asks whether its
/// ticket is still the latest, and only the latest one runs.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Element rectangle relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Whether `rect` lies entirely inside a `width` x `height` viewport.
pub fn is_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}

/// Vertical translation for a parallax layer.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

// ============================================================================
// Easing and counters
// ============================================================================

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn interpolate(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// A number counting up from zero to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration_ms: f64,
    pub started_at: f64,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: f64, started_at: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at,
        }
    }

    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_ms: f64) -> u32 {
        let eased = ease_out_cubic(self.progress(now_ms));
        interpolate(0.0, f64::from(self.target), eased).round() as u32
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(50.0));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(199.0));
    }

    #[test]
    fn test_debounce_latest_wins() {
        let mut debounce = Debounce::new();
        let first = debounce.call();
        let second = debounce.call();
        assert!(!debounce.is_latest(first));
        assert!(debounce.is_latest(second));
    }

    #[test]
    fn test_viewport() {
        let inside = Rect { top: 10.0, left: 0.0, bottom: 200.0, right: 300.0 };
        let below = Rect { top: 700.0, left: 0.0, bottom: 900.0, right: 300.0 };
        assert!(is_in_viewport(inside, 1024.0, 768.0));
        assert!(!is_in_viewport(below, 1024.0, 768.0));
    }

    #[test]
    fn test_easing_bounds() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_counter() {
        let counter = CounterAnimation::new(150, 2000.0, 1000.0);
        assert_eq!(counter.value_at(1000.0), 0);
        assert_eq!(counter.value_at(500.0), 0);
        assert!(counter.value_at(2000.0) > 75);
        assert_eq!(counter.value_at(3000.0), 150);
        assert!(counter.is_done(3000.0));
        assert!(!counter.is_done(2999.0));
    }

    #[test]
    fn test_zero_duration_counter() {
        let counter = CounterAnimation::new(7, 0.0, 0.0);
        assert_eq!(counter.value_at(0.0), 7);
    }
}
