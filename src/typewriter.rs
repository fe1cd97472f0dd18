//! Phrase cycler for the hero tagline.
//!
//! `Cycle::next` is a pure transition; the caller renders `Step::text` and
//! waits `Step::delay_ms` before calling it again.

use crate::config::TypewriterSettings;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub phrase: usize,
    /// Characters shown, never more than the phrase's char count.
    pub chars: usize,
    pub mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

impl Default for Cycle {
    fn default() -> Self {
        Self {
            phrase: 0,
            chars: 0,
            mode: Mode::Typing,
        }
    }
}

impl Cycle {
    /// `phrases` must be non-empty.
    pub fn next<S: AsRef<str>>(self, phrases: &[S], timing: &TypewriterSettings) -> (Cycle, Step) {
        let current = phrases[self.phrase % phrases.len()].as_ref();
        let len = current.chars().count();
        match self.mode {
            Mode::Typing => {
                let chars = (self.chars + 1).min(len);
                let step = |delay_ms| Step {
                    text: prefix(current, chars).to_owned(),
                    delay_ms,
                };
                if chars == len {
                    (Cycle { chars, mode: Mode::Deleting, ..self }, step(timing.hold))
                } else {
                    (Cycle { chars, ..self }, step(timing.type_interval))
                }
            }
            Mode::Deleting => {
                let chars = self.chars.saturating_sub(1);
                let text = prefix(current, chars).to_owned();
                if chars == 0 {
                    let next = Cycle {
                        phrase: (self.phrase + 1) % phrases.len(),
                        chars: 0,
                        mode: Mode::Typing,
                    };
                    (next, Step { text, delay_ms: timing.gap })
                } else {
                    (Cycle { chars, ..self }, Step { text, delay_ms: timing.delete_interval })
                }
            }
        }
    }
}

/// First `chars` characters of `s`, cut on a char boundary.
pub fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((at, _)) => &s[..at],
        None => s,
    }
}
