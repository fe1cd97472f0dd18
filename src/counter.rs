//! Stat counter ramp.

use crate::config::CounterSettings;

/// Integer prefix of an attribute value: leading whitespace, an optional
/// sign, then decimal digits. `None` when there are no digits.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Rounds halves toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    target: i64,
    suffix: String,
    steps: u32,
    elapsed: u32,
}

impl CounterRamp {
    pub fn new(target: i64, suffix: impl Into<String>, settings: &CounterSettings) -> Self {
        let steps = settings.duration.div_ceil(settings.tick.max(1)).max(1);
        Self {
            target,
            suffix: suffix.into(),
            steps,
            elapsed: 0,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.steps
    }

    /// Advances one tick and returns the text to display.
    pub fn tick(&mut self) -> String {
        self.elapsed = (self.elapsed + 1).min(self.steps);
        if self.is_done() {
            return format!("{}{}", self.target, self.suffix);
        }
        let shown = round_half_up(f64::from(self.elapsed) / f64::from(self.steps) * self.target as f64);
        format!("{}{}", shown as i64, self.suffix)
    }
}
