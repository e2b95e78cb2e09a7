use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{
    core::Canvas,
    error::{ExplainerError, ExplainerResult},
};

/// Default typewriter cadence: one character every 50 ms.
pub const DEFAULT_TYPEWRITER_INTERVAL_MS: u64 = 50;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Presentation settings. The authored content and scenes are compiled in and are not
/// affected by anything here.
pub struct ExplainerSettings {
    /// Surface used when rasterizing scenes.
    pub canvas: Canvas,
    /// Background colour as straight RGBA8.
    pub clear_rgba: [u8; 4],
    /// Milliseconds between two typewriter reveals.
    pub typewriter_interval_ms: u64,
    /// Font file for labels and typewriter text. Unset means a system face is looked up.
    pub font_path: Option<PathBuf>,
}

impl Default for ExplainerSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 640,
                height: 400,
            },
            clear_rgba: [15, 23, 42, 255],
            typewriter_interval_ms: DEFAULT_TYPEWRITER_INTERVAL_MS,
            font_path: None,
        }
    }
}

impl ExplainerSettings {
    /// Reject settings that cannot drive a presentation.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ExplainerError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.typewriter_interval_ms == 0 {
            return Err(ExplainerError::validation(
                "typewriter_interval_ms must be > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json(json: &str) -> ExplainerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file; a missing file yields the defaults.
    #[tracing::instrument]
    pub fn load(path: &Path) -> ExplainerResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
