use std::io::Write;

use anyhow::Context as _;

use crate::{
    app::view::View,
    foundation::error::ExplainerResult,
    render::backend::RenderBackend,
};

const PROGRESS_CELLS: usize = 24;

/// Plain-text renderer: writes the header, text panel, scene summary and controls.
#[derive(Debug)]
pub struct TextPanelRenderer<W: Write> {
    out: W,
    show_elements: bool,
}

impl<W: Write> TextPanelRenderer<W> {
    /// Renderer writing to `out`, without the element listing.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_elements: false,
        }
    }

    /// Also list every sampled element with its opacity and scale.
    pub fn with_elements(mut self, show: bool) -> Self {
        self.show_elements = show;
        self
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &View<'_>) -> std::io::Result<()> {
        let filled = (view.progress * PROGRESS_CELLS as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(filled.min(PROGRESS_CELLS)),
            "-".repeat(PROGRESS_CELLS.saturating_sub(filled))
        );
        let out = &mut self.out;
        writeln!(
            out,
            "{} | {} [{bar}] {}%",
            view.header,
            view.step_label,
            view.nav.progress_percent()
        )?;
        writeln!(out)?;
        writeln!(out, "{}", view.stage.title)?;
        writeln!(out, "{}", view.stage.subtitle)?;
        writeln!(out)?;
        writeln!(out, "{}", view.stage.description)?;
        for detail in &view.stage.details {
            writeln!(out, "  * {detail}")?;
        }
        writeln!(out)?;

        let frame = &view.frame;
        writeln!(
            out,
            "scene {} t={}ms elements={} settled={}",
            frame.stage,
            frame.elapsed_ms,
            frame.elements.len(),
            if frame.settled { "yes" } else { "no" }
        )?;
        if self.show_elements {
            for e in &frame.elements {
                writeln!(
                    out,
                    "  {:<18} {:<14} opacity={:.2} scale={:.2}{}",
                    e.id,
                    e.group,
                    e.state.opacity,
                    e.state.scale,
                    e.label.as_deref().map(|l| format!(" \"{l}\"")).unwrap_or_default()
                )?;
            }
        }
        if let Some(tw) = &frame.typewriter {
            writeln!(out, "  > {}  ({}/{})", tw.text, tw.revealed, tw.total)?;
        }

        let prev = if view.controls.previous_enabled { "[< Previous]" } else { "( Previous )" };
        let next = if view.controls.next_enabled {
            format!("[{} >]", view.controls.next_label)
        } else {
            format!("( {} )", view.controls.next_label)
        };
        writeln!(out, "{prev} {next}")?;
        out.flush()
    }
}

impl<W: Write> RenderBackend for TextPanelRenderer<W> {
    fn paint(&mut self, view: &View<'_>) -> ExplainerResult<()> {
        self.write_view(view)
            .with_context(|| format!("write text panel for stage '{}'", view.nav.current))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
