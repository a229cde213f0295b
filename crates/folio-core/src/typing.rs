//! Typing animation engine.
//!
//! A [`TypingEffect`] cycles through a fixed list of phrases:
//! type a phrase one character per tick, pause, delete it one character per
//! tick, pause, then move on to the next phrase. It never terminates on its
//! own. The engine is a plain state machine; callers drive it by calling
//! [`TypingEffect::tick`] and waiting [`TypingFrame::delay_ms`] before the
//! next call.
//!
//! [`TypingRegistry`] owns running instances so a scheduler can stop one by
//! id and have its next pending tick find nothing to do.

use std::collections::HashMap;

use crate::error::TypingError;

// ============================================================================
// Timing
// ============================================================================

/// Delays (milliseconds) used by the typing engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay between typed characters. Deleting runs at half this delay.
    pub type_delay_ms: u32,
    /// Pause once a phrase is fully typed.
    pub pause_after_type_ms: u32,
    /// Pause once a phrase is fully deleted.
    pub pause_after_delete_ms: u32,
}

impl TypingTiming {
    pub fn delete_delay_ms(&self) -> u32 {
        (self.type_delay_ms / 2).max(1)
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_delay_ms: 100,
            pause_after_type_ms: 2000,
            pause_after_delete_ms: 500,
        }
    }
}

// ============================================================================
// TypingEffect
// ============================================================================

/// Current phase of a typing instance. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    WaitingAfterType,
    Deleting,
    WaitingAfterDelete,
}

/// Output of a single tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    /// Text to display after this tick.
    pub text: String,
    /// Phase the engine is in after this tick.
    pub phase: TypingPhase,
    /// How long to wait before the next tick.
    pub delay_ms: u32,
}

/// Per-element typing state machine.
#[derive(Clone, Debug)]
pub struct TypingEffect {
    phrases: Vec<String>,
    index: usize,
    /// Offset into the current phrase, in chars.
    offset: usize,
    phase: TypingPhase,
    timing: TypingTiming,
}

impl TypingEffect {
    /// Creates an engine positioned before the first character of the first
    /// phrase.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::EmptyTextList`] if `phrases` is empty.
    pub fn new(phrases: Vec<String>, timing: TypingTiming) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::EmptyTextList);
        }

        Ok(Self {
            phrases,
            index: 0,
            offset: 0,
            phase: TypingPhase::Typing,
            timing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// The phrase currently being typed or deleted.
    pub fn target(&self) -> &str {
        &self.phrases[self.index]
    }

    fn target_len(&self) -> usize {
        self.target().chars().count()
    }

    /// Text currently on screen.
    pub fn displayed(&self) -> String {
        self.target().chars().take(self.offset).collect()
    }

    /// Advances the state machine by one step.
    pub fn tick(&mut self) -> TypingFrame {
        let timing = self.timing;
        let delay_ms = match self.phase {
            TypingPhase::Typing => {
                let len = self.target_len();
                self.offset = (self.offset + 1).min(len);
                if self.offset == len {
                    self.phase = TypingPhase::WaitingAfterType;
                    timing.pause_after_type_ms
                } else {
                    timing.type_delay_ms
                }
            }
            TypingPhase::WaitingAfterType => {
                self.phase = TypingPhase::Deleting;
                timing.delete_delay_ms()
            }
            TypingPhase::Deleting => {
                self.offset = self.offset.saturating_sub(1);
                if self.offset == 0 {
                    self.phase = TypingPhase::WaitingAfterDelete;
                    timing.pause_after_delete_ms
                } else {
                    timing.delete_delay_ms()
                }
            }
            TypingPhase::WaitingAfterDelete => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = TypingPhase::Typing;
                timing.type_delay_ms
            }
        };

        TypingFrame {
            text: self.displayed(),
            phase: self.phase,
            delay_ms,
        }
    }
}

// ============================================================================
// TypingRegistry
// ============================================================================

/// Handle for a running typing instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypingId(u64);

/// Owns every running typing instance.
#[derive(Debug, Default)]
pub struct TypingRegistry {
    next_id: u64,
    instances: HashMap<TypingId, TypingEffect>,
}

impl TypingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new instance and returns its id.
    pub fn start(
        &mut self,
        phrases: Vec<String>,
        timing: TypingTiming,
    ) -> Result<TypingId, TypingError> {
        let effect = TypingEffect::new(phrases, timing)?;
        let id = TypingId(self.next_id);
        self.next_id += 1;
        self.instances.insert(id, effect);
        Ok(id)
    }

    /// Ticks the instance, or returns `None` if it has been stopped.
    pub fn tick(&mut self, id: TypingId) -> Option<TypingFrame> {
        self.instances.get_mut(&id).map(TypingEffect::tick)
    }

    /// Removes the instance. Returns `false` if it was not running.
    pub fn stop(&mut self, id: TypingId) -> bool {
        self.instances.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn effect(list: &[&str]) -> TypingEffect {
        TypingEffect::new(phrases(list), TypingTiming::default()).unwrap()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            TypingEffect::new(Vec::new(), TypingTiming::default()).unwrap_err(),
            TypingError::EmptyTextList
        );
    }

    #[test]
    fn test_types_then_waits() {
        let mut fx = effect(&["abc"]);
        assert_eq!(fx.tick().text, "a");
        assert_eq!(fx.tick().text, "ab");
        let frame = fx.tick();
        assert_eq!(frame.text, "abc");
        assert_eq!(frame.phase, TypingPhase::WaitingAfterType);
        assert_eq!(frame.delay_ms, 2000);
    }

    #[test]
    fn test_delete_runs_at_half_speed() {
        let mut fx = effect(&["ab"]);
        fx.tick();
        fx.tick();
        let frame = fx.tick();
        assert_eq!(frame.phase, TypingPhase::Deleting);
        assert_eq!(frame.delay_ms, 50);
        assert_eq!(frame.text, "ab");
        assert_eq!(fx.tick().text, "a");
    }

    #[test]
    fn test_empty_phrase_does_not_underflow() {
        let mut fx = effect(&["", "x"]);
        for _ in 0..20 {
            let frame = fx.tick();
            assert!(fx.offset() <= fx.target().chars().count());
            assert!(frame.text.chars().count() <= 1);
        }
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut fx = effect(&["héllo"]);
        fx.tick();
        assert_eq!(fx.tick().text, "hé");
    }

    #[test]
    fn test_registry_stop() {
        let mut registry = TypingRegistry::new();
        let id = registry.start(phrases(&["hi"]), TypingTiming::default()).unwrap();
        assert!(registry.tick(id).is_some());
        assert!(registry.stop(id));
        assert!(registry.tick(id).is_none());
        assert!(!registry.stop(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_ids_unique() {
        let mut registry = TypingRegistry::new();
        let a = registry.start(phrases(&["a"]), TypingTiming::default()).unwrap();
        let b = registry.start(phrases(&["b"]), TypingTiming::default()).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }
}
