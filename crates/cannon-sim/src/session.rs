//! Per-session state owned by the engine, NOT stored as ECS entities.

/// Session score. Only the scoring rule changes it, and only upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    value: u64,
}

impl ScoreCounter {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add `points` and return the new value.
    pub fn add(&mut self, points: u32) -> u64 {
        self.value = self.value.saturating_add(u64::from(points));
        self.value
    }
}

/// Shot bookkeeping for the session summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub shots_fired: u32,
    pub hits: u32,
    pub expired: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub score: ScoreCounter,
    pub stats: SessionStats,
}

impl Session {
    /// Start over with a zero score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
