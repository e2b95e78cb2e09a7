use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Faces tried in order when no font is configured. CJK faces come first so the
/// inference answer shapes.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Resolve the face to draw labels with.
///
/// A configured path must exist. Without one, the first readable system candidate wins,
/// and `None` means text is not drawn.
pub fn locate_font(configured: Option<&Path>) -> ExplainerResult<Option<PathBuf>> {
    if let Some(path) = configured {
        if !path.is_file() {
            return Err(ExplainerError::validation(format!(
                "font_path '{}' is not a file",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Straight RGBA8 brush carried through Parley layouts.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Parley contexts bound to one registered face, plus the same face for glyph drawing.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl TextLayoutEngine {
    /// Read a font file and register its first family.
    #[tracing::instrument]
    pub fn from_file(path: &Path) -> ExplainerResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let engine = Self::from_bytes(bytes)?;
        tracing::debug!(family = engine.family(), "font registered");
        Ok(engine)
    }

    /// Register the first family found in `bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> ExplainerResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ExplainerError::validation("no font families in font data"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ExplainerError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        })
    }

    /// Family name of the registered face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Face data for glyph runs laid out by this engine.
    pub fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` on one line at `size_px`.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> ExplainerResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ExplainerError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
