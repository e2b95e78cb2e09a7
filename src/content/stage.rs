use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Number of stages in the explainer.
pub const STAGE_COUNT: usize = 6;

/// One discrete step of the explainer.
///
/// The discriminant is the stage index used by navigation, content lookup and scene
/// selection alike.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// The full input image and the encoder/LLM overview.
    Intro = 0,
    /// The image cut into patches.
    Patching = 1,
    /// Patches encoded into semantic feature vectors.
    EncoderClip = 2,
    /// Vision vectors projected into the LLM embedding space.
    Projection = 3,
    /// The token sequence handed to the LLM.
    Tokens = 4,
    /// The LLM attending over visual tokens and answering.
    Inference = 5,
}

impl StageId {
    /// Every stage in index order.
    pub const ALL: [StageId; STAGE_COUNT] = [
        StageId::Intro,
        StageId::Patching,
        StageId::EncoderClip,
        StageId::Projection,
        StageId::Tokens,
        StageId::Inference,
    ];

    /// First stage.
    pub const FIRST: StageId = StageId::Intro;
    /// Last stage.
    pub const LAST: StageId = StageId::Inference;

    /// Zero-based position in the stage sequence.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stage at `index`, if it lies in `[0, STAGE_COUNT)`.
    pub fn from_index(index: usize) -> Option<StageId> {
        Self::ALL.get(index).copied()
    }

    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Patching => "patching",
            Self::EncoderClip => "encoder_clip",
            Self::Projection => "projection",
            Self::Tokens => "tokens",
            Self::Inference => "inference",
        }
    }

    /// Stage whose [`StageId::key`] or decimal index equals `s`.
    pub fn parse(s: &str) -> ExplainerResult<StageId> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| {
                ExplainerError::validation(format!(
                    "stage index {index} is outside 0..{STAGE_COUNT}"
                ))
            });
        }
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.key() == lowered)
            .ok_or_else(|| ExplainerError::validation(format!("unknown stage '{s}'")))
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Authored explanatory text for one stage.
pub struct Stage {
    /// Stage this record describes.
    pub id: StageId,
    /// Headline.
    pub title: String,
    /// Section heading under the title.
    pub subtitle: String,
    /// Main paragraph.
    pub description: String,
    /// Bullet points, in display order.
    pub details: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/content/stage.rs"]
mod tests;
