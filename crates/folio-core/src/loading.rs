//! Loading screen gate.

/// Keeps the loading screen up for at least `min_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingGate {
    started_at: f64,
    min_ms: f64,
}

impl LoadingGate {
    pub fn new(started_at: f64, min_ms: f64) -> Self {
        Self {
            started_at,
            min_ms: min_ms.max(0.0),
        }
    }

    /// Milliseconds still to wait once the page is ready at `now_ms`.
    pub fn remaining(&self, now_ms: f64) -> u32 {
        let left = self.min_ms - (now_ms - self.started_at);
        if left <= 0.0 { 0 } else { left.ceil() as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let gate = LoadingGate::new(1000.0, 1500.0);
        assert_eq!(gate.remaining(1000.0), 1500);
        assert_eq!(gate.remaining(2000.0), 500);
        assert_eq!(gate.remaining(5000.0), 0);
    }
}
