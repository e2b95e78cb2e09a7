use vello_cpu::kurbo::Shape as _;

use crate::{
    app::view::View,
    foundation::core::{Point, Vec2},
    foundation::error::{ExplainerError, ExplainerResult},
    foundation::settings::ExplainerSettings,
    render::backend::{FrameRGBA, RenderBackend},
    render::composite::unpremultiply,
    render::font::{TextBrushRgba8, TextLayoutEngine, locate_font},
    scene::model::ElementKind,
    sequencer::live::ElementFrame,
};

/// Stroke width used for [`ElementKind::Line`] connectors.
pub const LINE_WIDTH: f64 = 2.0;

/// Label size on boxed elements, before the element's scale.
const LABEL_SIZE_PX: f64 = 12.0;
/// Label ink on boxed elements, straight RGBA8.
const LABEL_INK: [u8; 4] = [226, 232, 240, 255];
/// Inset of panel titles from the panel's top-left corner.
const PANEL_TITLE_INSET: f64 = 8.0;

/// CPU rasterizer on `vello_cpu`: element boxes, connectors and their text.
///
/// Text needs a font. Without [`ExplainerSettings::font_path`] the first readable
/// system face is used; when none exists, only shapes are drawn.
pub struct CpuRasterizer {
    width: u16,
    height: u16,
    clear: [u8; 4],
    text: Option<TextLayoutEngine>,
    last: Option<FrameRGBA>,
}

impl std::fmt::Debug for CpuRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRasterizer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl CpuRasterizer {
    /// Rasterizer for the canvas in `settings`, loading the label font up front.
    pub fn new(settings: &ExplainerSettings) -> ExplainerResult<Self> {
        let text = match locate_font(settings.font_path.as_deref())? {
            Some(path) => Some(TextLayoutEngine::from_file(&path)?),
            None => {
                tracing::warn!("no usable font found, labels will not be drawn");
                None
            }
        };
        Self::with_text(settings, text)
    }

    /// Rasterizer that draws text with `text`, or shapes only when `None`.
    pub fn with_text(
        settings: &ExplainerSettings,
        text: Option<TextLayoutEngine>,
    ) -> ExplainerResult<Self> {
        let width: u16 = settings
            .canvas
            .width
            .try_into()
            .map_err(|_| ExplainerError::validation("canvas width exceeds u16"))?;
        let height: u16 = settings
            .canvas
            .height
            .try_into()
            .map_err(|_| ExplainerError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            clear: settings.clear_rgba,
            text,
            last: None,
        })
    }

    /// Whether labels and typewriter text are drawn.
    pub fn draws_text(&self) -> bool {
        self.text.is_some()
    }

    /// Frame produced by the most recent [`RenderBackend::paint`].
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last.as_ref()
    }

    /// Take ownership of the most recent frame.
    pub fn take_frame(&mut self) -> Option<FrameRGBA> {
        self.last.take()
    }
}

impl RenderBackend for CpuRasterizer {
    #[tracing::instrument(
        skip_all,
        fields(stage = %view.frame.stage, elements = view.frame.elements.len())
    )]
    fn paint(&mut self, view: &View<'_>) -> ExplainerResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let [r, g, b, a] = self.clear;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        let typewriter = view.frame.typewriter.as_ref();
        for element in &view.frame.elements {
            let opacity = (view.frame.opacity * element.state.opacity) as f32;
            if opacity <= 0.0 {
                continue;
            }
            let text = match typewriter {
                Some(tw) if tw.element == element.id => Some(tw.text.as_str()),
                _ => element.label.as_deref(),
            }
            .filter(|t| !t.is_empty());
            let left_aligned = typewriter.is_some_and(|tw| tw.element == element.id);

            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            draw_shape(&mut ctx, element);
            if let (Some(text), Some(engine)) = (text, self.text.as_mut()) {
                draw_text(&mut ctx, engine, element, text, left_aligned)?;
            }
            if opacity < 1.0 {
                ctx.pop_layer();
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        self.last = Some(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        });
        Ok(())
    }
}

fn element_anchor(element: &ElementFrame) -> Point {
    element.origin + element.state.offset
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn draw_shape(ctx: &mut vello_cpu::RenderContext, element: &ElementFrame) {
    let s = &element.state;
    if s.color.a == 0 || element.kind == ElementKind::Caption {
        return;
    }
    let [r, g, b, a] = unpremultiply(s.color);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));

    let anchor = element_anchor(element);
    if element.kind == ElementKind::Line {
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(anchor));
        path.line_to(point_to_cpu(anchor + s.size * s.scale));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(LINE_WIDTH));
        ctx.stroke_path(&path);
        return;
    }

    let size = s.size * s.scale;
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let tl = point_to_cpu(anchor - size / 2.0);
    let rect = vello_cpu::kurbo::Rect::new(tl.x, tl.y, tl.x + size.x, tl.y + size.y);
    let radius = (s.corner_radius * s.scale).clamp(0.0, size.x.min(size.y) / 2.0);
    if radius > 0.0 {
        let rounded = vello_cpu::kurbo::RoundedRect::from_rect(rect, radius);
        ctx.fill_path(&rounded.to_path(0.1));
    } else {
        ctx.fill_rect(&rect);
    }
}

/// Lay out `text` for `element` and fill its glyphs.
///
/// Captions use their own colour with the element height as font size. Typewriter text
/// grows rightwards from the origin, panel titles sit in the top-left corner, and every
/// other label is centered on the element.
fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    element: &ElementFrame,
    text: &str,
    left_aligned: bool,
) -> ExplainerResult<()> {
    let s = &element.state;
    let (size_px, [r, g, b, a]) = match element.kind {
        ElementKind::Caption => (s.size.y * s.scale, unpremultiply(s.color)),
        _ => (LABEL_SIZE_PX * s.scale, LABEL_INK),
    };
    if size_px <= 0.0 || a == 0 {
        return Ok(());
    }
    let layout = engine.layout(text, size_px as f32, TextBrushRgba8 { r, g, b, a })?;
    let extent = Vec2::new(f64::from(layout.width()), f64::from(layout.height()));

    let anchor = element_anchor(element);
    let top_left = if left_aligned {
        anchor - Vec2::new(0.0, extent.y / 2.0)
    } else if element.kind == ElementKind::Panel {
        anchor - s.size * s.scale / 2.0 + Vec2::new(PANEL_TITLE_INSET, PANEL_TITLE_INSET)
    } else {
        anchor - extent / 2.0
    };
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((top_left.x, top_left.y)));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(engine.font())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
