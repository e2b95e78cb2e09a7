use std::path::Path;

use anyhow::Context as _;

use crate::{
    app::view::View,
    foundation::core::Rgba8Premul,
    foundation::error::{ExplainerError, ExplainerResult},
    render::composite::unpremultiply,
};

/// A rendered frame as premultiplied RGBA8 bytes, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Encode as PNG at `path`, creating parent directories as needed.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn save_png(&self, path: &Path) -> ExplainerResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let straight: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|p| {
                unpremultiply(Rgba8Premul {
                    r: p[0],
                    g: p[1],
                    b: p[2],
                    a: p[3],
                })
            })
            .collect();
        image::save_buffer_with_format(
            path,
            &straight,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))
        .map_err(ExplainerError::from)
    }
}

/// Rendering collaborator: receives each [`View`] the explainer produces.
pub trait RenderBackend {
    /// Draw one view. Called once per produced frame.
    fn paint(&mut self, view: &View<'_>) -> ExplainerResult<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
