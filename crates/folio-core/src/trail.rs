//! Cursor trail: the most recent pointer positions, fading with age.
//!
//! Positions live in a fixed-capacity ring so pushing on every
//! `mousemove` never allocates once the trail is full.

/// A recorded pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub at_ms: f64,
}

/// A point ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
    /// 0.0 (gone) to 1.0 (fresh).
    pub opacity: f64,
    /// 0.0 (tail) to 1.0 (head); used for dot size.
    pub scale: f64,
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    points: Vec<TrailPoint>,
    /// Index of the oldest point once the ring is full.
    head: usize,
    capacity: usize,
    lifetime_ms: f64,
}

impl CursorTrail {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, lifetime_ms: f64) -> Self {
        assert!(capacity > 0, "CursorTrail capacity must be greater than 0");
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
            lifetime_ms,
        }
    }

    /// Records a position, overwriting the oldest when full. O(1).
    pub fn push(&mut self, x: f64, y: f64, at_ms: f64) {
        let point = TrailPoint { x, y, at_ms };
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TrailPoint> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Dots still visible at `now_ms`, oldest first.
    pub fn dots(&self, now_ms: f64) -> Vec<TrailDot> {
        let len = self.points.len();
        self.iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let age = now_ms - p.at_ms;
                if age >= self.lifetime_ms {
                    return None;
                }
                Some(TrailDot {
                    x: p.x,
                    y: p.y,
                    opacity: (1.0 - age / self.lifetime_ms).clamp(0.0, 1.0),
                    scale: (i + 1) as f64 / len as f64,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_newest_points() {
        let mut trail = CursorTrail::new(3, 500.0);
        for i in 0..5 {
            trail.push(i as f64, 0.0, 0.0);
        }
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.iter().next_back().map(|p| p.x), Some(4.0));
    }

    #[test]
    fn test_dots_fade_and_expire() {
        let mut trail = CursorTrail::new(4, 500.0);
        trail.push(0.0, 0.0, 0.0);
        trail.push(1.0, 1.0, 400.0);

        let dots = trail.dots(500.0);
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].x, 1.0);
        assert!((dots[0].opacity - 0.8).abs() < 1e-9);
        assert_eq!(dots[0].scale, 1.0);
    }

    #[test]
    fn test_clear() {
        let mut trail = CursorTrail::new(2, 100.0);
        trail.push(0.0, 0.0, 0.0);
        trail.push(0.0, 0.0, 0.0);
        trail.push(0.0, 0.0, 0.0);
        trail.clear();
        assert!(trail.is_empty());
        trail.push(9.0, 9.0, 0.0);
        assert_eq!(trail.iter().map(|p| p.x).collect::<Vec<_>>(), vec![9.0]);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        CursorTrail::new(0, 100.0);
    }
}
