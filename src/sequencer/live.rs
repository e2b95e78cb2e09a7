use std::num::NonZeroU64;

use crate::{
    content::stage::StageId,
    foundation::core::{Point, TimeMs},
    foundation::error::ExplainerResult,
    scene::model::{ElementKind, LoopProperty, SceneDescriptor, VisualState},
    sequencer::scheduler::{Firing, ScopeId, Scheduler, TaskId},
    sequencer::typewriter::TypewriterBuffer,
};

/// Timed work a live scene schedules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTask {
    /// Reveal the next typewriter character.
    RevealNext,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One element sampled at an instant.
pub struct ElementFrame {
    /// Element id.
    pub id: String,
    /// Owning group.
    pub group: String,
    /// What the element depicts.
    pub kind: ElementKind,
    /// Text drawn on the element.
    pub label: Option<String>,
    /// Hover text.
    pub tooltip: Option<String>,
    /// Layout origin.
    pub origin: Point,
    /// Visual state with loop modulation applied.
    pub state: VisualState,
    /// Eased entry progress in `[0, 1]`.
    pub progress: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One free-running loop sampled at an instant.
pub struct LoopFrame {
    /// Loop id.
    pub id: String,
    /// Element id or group name it drives.
    pub target: String,
    /// Driven property.
    pub property: LoopProperty,
    /// Current value.
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Typewriter progress at an instant.
pub struct TypewriterFrame {
    /// Caption element showing the text.
    pub element: String,
    /// Revealed prefix.
    pub text: String,
    /// Characters revealed.
    pub revealed: usize,
    /// Characters in the full text.
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a renderer needs to paint the live scene at one instant.
pub struct SceneFrame {
    /// Stage on display.
    pub stage: StageId,
    /// Milliseconds since the scene was mounted.
    pub elapsed_ms: u64,
    /// Container opacity from the scene's fade-in.
    pub opacity: f64,
    /// Elements in painter's order.
    pub elements: Vec<ElementFrame>,
    /// Loop values.
    pub loops: Vec<LoopFrame>,
    /// Typewriter state, on scenes that have one.
    pub typewriter: Option<TypewriterFrame>,
    /// True once every entry transition and the typewriter have finished.
    pub settled: bool,
}

impl SceneFrame {
    /// Sampled element with `id`.
    pub fn element(&self, id: &str) -> Option<&ElementFrame> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Sampled loop with `id`.
    pub fn loop_value(&self, id: &str) -> Option<f64> {
        self.loops.iter().find(|l| l.id == id).map(|l| l.value)
    }
}

/// The one mounted scene and its transient timing state.
///
/// Element transitions and loops are pure functions of the time since mounting, so they
/// end with the scene. The typewriter is driven by a repeating task in the scene's own
/// scheduler scope; whoever replaces the scene must cancel that scope first.
#[derive(Debug)]
pub struct LiveScene {
    descriptor: SceneDescriptor,
    scope: ScopeId,
    entered_at: TimeMs,
    typewriter: Option<TypewriterBuffer>,
    reveal_task: Option<TaskId>,
}

impl LiveScene {
    /// Mount `descriptor` at `now`, scheduling its timed work in a fresh scope.
    #[tracing::instrument(skip(descriptor, scheduler), fields(stage = %descriptor.stage))]
    pub fn mount(
        descriptor: SceneDescriptor,
        scheduler: &mut Scheduler<SceneTask>,
        now: TimeMs,
        reveal_every: NonZeroU64,
    ) -> Self {
        let scope = scheduler.open_scope();
        let typewriter = descriptor
            .typewriter
            .as_ref()
            .map(|spec| TypewriterBuffer::new(spec.text.as_str()));
        let reveal_task = typewriter.as_ref().map(|_| {
            scheduler.schedule_every(
                scope,
                now.after(reveal_every.get()),
                reveal_every,
                SceneTask::RevealNext,
            )
        });
        tracing::debug!(?scope, elements = descriptor.element_count(), "scene mounted");
        Self {
            descriptor,
            scope,
            entered_at: now,
            typewriter,
            reveal_task,
        }
    }

    /// Scheduler scope holding this scene's tasks.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Stage this scene belongs to.
    pub fn stage(&self) -> StageId {
        self.descriptor.stage
    }

    /// The scene being played.
    pub fn descriptor(&self) -> &SceneDescriptor {
        &self.descriptor
    }

    /// Typewriter progress, on scenes that have one.
    pub fn typewriter(&self) -> Option<&TypewriterBuffer> {
        self.typewriter.as_ref()
    }

    /// Apply a firing from this scene's scope. Returns whether visible state changed.
    pub fn handle(
        &mut self,
        firing: &Firing<SceneTask>,
        scheduler: &mut Scheduler<SceneTask>,
    ) -> bool {
        debug_assert_eq!(firing.scope, self.scope);
        match firing.payload {
            SceneTask::RevealNext => {
                let Some(tw) = self.typewriter.as_mut() else {
                    return false;
                };
                let changed = tw.tick();
                tracing::trace!(
                    revealed = tw.revealed_len(),
                    total = tw.total_len(),
                    "typewriter tick"
                );
                if tw.is_complete()
                    && let Some(task) = self.reveal_task.take()
                {
                    scheduler.cancel(task);
                    tracing::debug!(stage = %self.descriptor.stage, "typewriter complete");
                }
                changed
            }
        }
    }

    /// Sample the scene at `now`.
    pub fn sample(&self, now: TimeMs) -> ExplainerResult<SceneFrame> {
        let elapsed = now.saturating_since(self.entered_at);
        let d = &self.descriptor;

        let loops = d
            .loops
            .iter()
            .map(|spec| {
                Ok(LoopFrame {
                    id: spec.id.clone(),
                    target: spec.target.clone(),
                    property: spec.property,
                    value: spec.cycle.sample(elapsed)?,
                })
            })
            .collect::<ExplainerResult<Vec<_>>>()?;

        let elements = d
            .elements()
            .map(|(group, element)| {
                let mut state = group.tween_for(element).sample(elapsed);
                for lf in loops
                    .iter()
                    .filter(|l| l.target == element.id || l.target == group.name)
                {
                    match lf.property {
                        LoopProperty::Opacity => {
                            state.opacity = (state.opacity * lf.value).clamp(0.0, 1.0);
                        }
                        LoopProperty::Scale => state.scale *= lf.value,
                        LoopProperty::DashOffset | LoopProperty::Shimmer => {}
                    }
                }
                ElementFrame {
                    id: element.id.clone(),
                    group: group.name.clone(),
                    kind: element.kind,
                    label: element.label.clone(),
                    tooltip: element.tooltip.clone(),
                    origin: element.origin,
                    state,
                    progress: group.timing_for(element).progress(elapsed),
                }
            })
            .collect();

        let typewriter = match (&d.typewriter, &self.typewriter) {
            (Some(spec), Some(tw)) => Some(TypewriterFrame {
                element: spec.element.clone(),
                text: tw.revealed_text().to_string(),
                revealed: tw.revealed_len(),
                total: tw.total_len(),
            }),
            _ => None,
        };
        let typed = self.typewriter.as_ref().is_none_or(TypewriterBuffer::is_complete);

        Ok(SceneFrame {
            stage: d.stage,
            elapsed_ms: elapsed,
            opacity: d.enter.progress(elapsed),
            elements,
            loops,
            typewriter,
            settled: typed && elapsed >= d.transitions_end_ms(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/live.rs"]
mod tests;
