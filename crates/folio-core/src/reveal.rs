//! One-shot scroll reveal bookkeeping.
//!
//! Elements register under a key with the effect they should play. The
//! first visibility report at or above the threshold returns that effect;
//! every later report for the same key returns `None`, so scrolling back
//! and forth never replays an animation.

use std::collections::{HashMap, HashSet};

/// Minimum intersection ratio that counts as "in view".
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Effect played when an element is first revealed.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealKind {
    /// Plain fade/slide in.
    Fade,
    /// Skill progress bar filling to `width` percent.
    SkillBar { width: u8 },
    /// Timeline entry whose marker pulses once.
    TimelineItem,
    /// Stat counter animating from zero to `target`.
    Counter { target: u32 },
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    observed: HashMap<String, RevealKind>,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key. Re-registering an already revealed key is ignored.
    pub fn observe(&mut self, key: impl Into<String>, kind: RevealKind) {
        let key = key.into();
        if !self.revealed.contains(&key) {
            self.observed.insert(key, kind);
        }
    }

    /// Reports the current intersection ratio of an observed element.
    ///
    /// Returns the effect to play the first time the ratio reaches
    /// [`REVEAL_THRESHOLD`], and stops observing the key.
    pub fn report(&mut self, key: &str, ratio: f64) -> Option<RevealKind> {
        if ratio < REVEAL_THRESHOLD {
            return None;
        }
        let kind = self.observed.remove(key)?;
        self.revealed.insert(key.to_string());
        Some(kind)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn is_observing(&self, key: &str) -> bool {
        self.observed.contains_key(key)
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new();
        tracker.observe("skill-rust", RevealKind::SkillBar { width: 90 });

        assert_eq!(tracker.report("skill-rust", 0.05), None);
        assert_eq!(
            tracker.report("skill-rust", 0.5),
            Some(RevealKind::SkillBar { width: 90 })
        );
        assert_eq!(tracker.report("skill-rust", 0.0), None);
        assert_eq!(tracker.report("skill-rust", 1.0), None);
        assert!(tracker.is_revealed("skill-rust"));
        assert!(!tracker.is_observing("skill-rust"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a", RevealKind::Fade);
        assert_eq!(tracker.report("a", REVEAL_THRESHOLD), Some(RevealKind::Fade));
    }

    #[test]
    fn test_reobserve_after_reveal_ignored() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a", RevealKind::Fade);
        tracker.report("a", 1.0);
        tracker.observe("a", RevealKind::Fade);
        assert_eq!(tracker.pending(), 0);
        assert_eq!(tracker.report("a", 1.0), None);
    }

    #[test]
    fn test_unknown_key() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.report("missing", 1.0), None);
    }
}
