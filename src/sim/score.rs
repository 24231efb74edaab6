//! Score accumulator

use serde::{Deserialize, Serialize};

/// Running score. Signed and unclamped: zaps and landings can push it negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    score: i64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, delta: i64) {
        self.score += delta;
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goes_negative() {
        let mut ledger = ScoreLedger::new();
        ledger.apply(-55);
        ledger.apply(-300);
        assert_eq!(ledger.score(), -355);
        ledger.apply(100);
        assert_eq!(ledger.score(), -255);
    }
}
