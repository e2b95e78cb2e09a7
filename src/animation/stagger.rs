use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Per-element start offset policy for a group's entry transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Stagger {
    /// Every element starts together.
    #[default]
    None,
    /// Element `i` starts `i * step_ms` after the group.
    Linear {
        /// Offset between consecutive elements.
        step_ms: u64,
    },
    /// Elements laid out row-major in `columns` start `(row + col) * step_ms` after the
    /// group, so the wave runs diagonally across the grid.
    Grid {
        /// Number of columns in the grid.
        columns: u32,
        /// Offset per row or column step.
        step_ms: u64,
    },
}

impl Stagger {
    /// Reject policies that cannot place an element.
    pub fn validate(self) -> ExplainerResult<()> {
        match self {
            Self::Grid { columns: 0, .. } => {
                Err(ExplainerError::animation("grid stagger needs at least one column"))
            }
            _ => Ok(()),
        }
    }

    /// Start offset for the element with stagger index `index`.
    pub fn offset_ms(self, index: u32) -> u64 {
        let index = u64::from(index);
        match self {
            Self::None => 0,
            Self::Linear { step_ms } => index.saturating_mul(step_ms),
            Self::Grid { columns, step_ms } => {
                let columns = u64::from(columns.max(1));
                let row = index / columns;
                let col = index % columns;
                (row + col).saturating_mul(step_ms)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
