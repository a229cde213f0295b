//! Key-sequence detection for the hidden effects.

/// ↑ ↑ ↓ ↓ ← → ← → B A, as `KeyboardEvent.key` values.
pub const KONAMI: &[&str] = &[
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

/// Word that toggles the AI-mode overlay.
pub const AI_MODE_WORD: &[&str] = &["a", "i", "m", "o", "d", "e"];

/// Matches a fixed sequence of key presses.
///
/// A wrong key falls back to the longest prefix of the sequence that still
/// ends at that key, so extra presses mid-run (↑↑↑↓↓…) never lose progress
/// that a fresh attempt would have kept.
#[derive(Clone, Debug)]
pub struct KeySequence {
    keys: &'static [&'static str],
    /// `fallback[i]`: length of the longest proper prefix of `keys[..=i]`
    /// that is also a suffix of it.
    fallback: Vec<usize>,
    progress: usize,
}

impl KeySequence {
    pub fn new(keys: &'static [&'static str]) -> Self {
        let mut fallback = vec![0; keys.len()];
        let mut len = 0;
        for i in 1..keys.len() {
            while len > 0 && !keys[i].eq_ignore_ascii_case(keys[len]) {
                len = fallback[len - 1];
            }
            if keys[i].eq_ignore_ascii_case(keys[len]) {
                len += 1;
            }
            fallback[i] = len;
        }
        Self {
            keys,
            fallback,
            progress: 0,
        }
    }

    /// Feeds one key. Returns `true` when the sequence completes.
    ///
    /// Letter keys compare case-insensitively.
    pub fn push(&mut self, key: &str) -> bool {
        if self.keys.is_empty() {
            return false;
        }
        while self.progress > 0 && !self.matches(self.progress, key) {
            self.progress = self.fallback[self.progress - 1];
        }
        if self.matches(self.progress, key) {
            self.progress += 1;
        }
        if self.progress == self.keys.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    fn matches(&self, index: usize, key: &str) -> bool {
        self.keys[index].eq_ignore_ascii_case(key)
    }

    pub fn reset(&mut self) {
        self.progress = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(seq: &mut KeySequence, keys: &[&str]) -> usize {
        keys.iter().filter(|k| seq.push(k)).count()
    }

    #[test]
    fn test_konami_fires() {
        let mut seq = KeySequence::new(KONAMI);
        assert_eq!(feed(&mut seq, KONAMI), 1);
    }

    #[test]
    fn test_konami_uppercase_letters() {
        let mut seq = KeySequence::new(KONAMI);
        let mut keys = KONAMI[..8].to_vec();
        keys.extend(["B", "A"]);
        assert_eq!(feed(&mut seq, &keys), 1);
    }

    #[test]
    fn test_mismatch_recovers() {
        let mut seq = KeySequence::new(KONAMI);
        // A third ArrowUp keeps the last two as progress.
        let mut keys = vec!["ArrowUp"];
        keys.extend_from_slice(KONAMI);
        assert_eq!(feed(&mut seq, &keys), 1);

        seq.reset();
        let mut keys = vec!["x", "ArrowUp", "ArrowDown"];
        keys.extend_from_slice(KONAMI);
        assert_eq!(feed(&mut seq, &keys), 1);
    }

    #[test]
    fn test_restart_mid_sequence() {
        let mut seq = KeySequence::new(KONAMI);
        // Run breaks after ↑↑↓, then a full code follows straight away.
        let mut keys = KONAMI[..3].to_vec();
        keys.extend_from_slice(KONAMI);
        assert_eq!(feed(&mut seq, &keys), 1);

        let mut keys = KONAMI[..9].to_vec();
        keys.push("ArrowUp");
        keys.extend_from_slice(&KONAMI[1..]);
        assert_eq!(feed(&mut seq, &keys), 1);
    }

    #[test]
    fn test_fallback_table() {
        let seq = KeySequence::new(KONAMI);
        assert_eq!(seq.fallback, vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let seq = KeySequence::new(&["a", "b", "a", "b", "c"]);
        assert_eq!(seq.fallback, vec![0, 0, 1, 2, 0]);
    }

    #[test]
    fn test_word() {
        let mut seq = KeySequence::new(AI_MODE_WORD);
        assert_eq!(feed(&mut seq, &["a", "i", "m", "o", "d", "e"]), 1);
        assert_eq!(feed(&mut seq, &["a", "i", "x", "m", "o", "d", "e"]), 0);
    }
}
