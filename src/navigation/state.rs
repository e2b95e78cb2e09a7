use crate::content::stage::{STAGE_COUNT, StageId};

/// The single mutable cursor into the stage sequence.
///
/// Holding a [`StageId`] keeps the cursor inside `[0, STAGE_COUNT)` by construction. All
/// transitions are pure and saturate at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NavigationState {
    /// Stage on display.
    pub current: StageId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: StageId::FIRST,
        }
    }
}

impl NavigationState {
    /// Cursor on `current`.
    pub fn at(current: StageId) -> Self {
        Self { current }
    }

    /// Next stage, or `self` on the last one.
    #[must_use]
    pub fn advance(self) -> Self {
        StageId::from_index(self.current.index() + 1).map_or(self, Self::at)
    }

    /// Previous stage, or `self` on the first one.
    #[must_use]
    pub fn retreat(self) -> Self {
        self.current
            .index()
            .checked_sub(1)
            .and_then(StageId::from_index)
            .map_or(self, Self::at)
    }

    /// Stage at `index`, or `self` if `index` is out of range.
    #[must_use]
    pub fn jump(self, index: usize) -> Self {
        StageId::from_index(index).map_or(self, Self::at)
    }

    /// On the first stage.
    pub fn is_first(self) -> bool {
        self.current == StageId::FIRST
    }

    /// On the last stage.
    pub fn is_last(self) -> bool {
        self.current == StageId::LAST
    }

    /// `(current + 1) / N`; exactly 1.0 on the last stage.
    pub fn progress_fraction(self) -> f64 {
        (self.current.index() + 1) as f64 / STAGE_COUNT as f64
    }

    /// Progress as a rounded percentage for the progress bar.
    pub fn progress_percent(self) -> u8 {
        (self.progress_fraction() * 100.0).round() as u8
    }

    /// Whether the "next" control is enabled.
    pub fn can_advance(self) -> bool {
        !self.is_last()
    }

    /// Whether the "previous" control is enabled.
    pub fn can_retreat(self) -> bool {
        !self.is_first()
    }

    /// One-based step badge, e.g. `STEP 2 OF 6`.
    pub fn step_label(self) -> String {
        format!("STEP {} OF {}", self.current.index() + 1, STAGE_COUNT)
    }

    /// Caption for the "next" control.
    pub fn next_label(self) -> &'static str {
        if self.is_last() { "Finish" } else { "Next Step" }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/state.rs"]
mod tests;
