use crate::{
    animation::ease::Ease,
    animation::stagger::Stagger,
    animation::tween::{Cycle, LoopMode, Timing},
    content::stage::StageId,
    foundation::core::Point,
    foundation::error::ExplainerResult,
    scene::model::{
        Element, ElementGroup, ElementKind, LoopProperty, LoopSpec, SceneDescriptor,
        TypewriterSpec, VisualState,
    },
};

/// Container fade used by every scene unless overridden.
pub const DEFAULT_ENTER_MS: u64 = 300;

/// Fluent builder for [`SceneDescriptor`]; `build` validates.
pub struct SceneBuilder {
    stage: StageId,
    enter: Timing,
    groups: Vec<ElementGroup>,
    loops: Vec<LoopSpec>,
    typewriter: Option<TypewriterSpec>,
}

impl SceneBuilder {
    /// Empty scene for `stage` with the default container fade.
    pub fn new(stage: StageId) -> Self {
        Self {
            stage,
            enter: Timing::new(DEFAULT_ENTER_MS),
            groups: Vec::new(),
            loops: Vec::new(),
            typewriter: None,
        }
    }

    /// Append a group; painter's order follows insertion.
    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.groups.push(group.build());
        self
    }

    /// Free-running loop driving `property` of `target`, an element id or group name.
    pub fn looping(
        mut self,
        id: impl Into<String>,
        target: impl Into<String>,
        property: LoopProperty,
        cycle: Cycle,
    ) -> Self {
        self.loops.push(LoopSpec {
            id: id.into(),
            target: target.into(),
            property,
            cycle,
        });
        self
    }

    /// Reveal `text` into the caption `element` one character per tick.
    pub fn typewriter(mut self, element: impl Into<String>, text: impl Into<String>) -> Self {
        self.typewriter = Some(TypewriterSpec {
            element: element.into(),
            text: text.into(),
        });
        self
    }

    /// Validate and finish the scene.
    pub fn build(self) -> ExplainerResult<SceneDescriptor> {
        let scene = SceneDescriptor {
            stage: self.stage,
            enter: self.enter,
            groups: self.groups,
            loops: self.loops,
            typewriter: self.typewriter,
        };
        scene.validate()?;
        Ok(scene)
    }
}

/// Builder for one [`ElementGroup`].
pub struct GroupBuilder {
    name: String,
    timing: Timing,
    stagger: Stagger,
    elements: Vec<Element>,
}

impl GroupBuilder {
    /// Group sharing `timing`, not staggered.
    pub fn new(name: impl Into<String>, timing: Timing) -> Self {
        Self {
            name: name.into(),
            timing,
            stagger: Stagger::None,
            elements: Vec::new(),
        }
    }

    /// Group whose members do not move.
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::new(name, Timing::new(0))
    }

    /// Offset member start times by `stagger`.
    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    /// Append one element.
    pub fn element(mut self, element: ElementBuilder) -> Self {
        self.elements.push(element.build());
        self
    }

    /// Append every element of `elements`, numbering their stagger indices in order.
    pub fn sequence(mut self, elements: impl IntoIterator<Item = ElementBuilder>) -> Self {
        for (i, element) in elements.into_iter().enumerate() {
            let index = u32::try_from(i).unwrap_or(u32::MAX);
            self.elements.push(element.stagger_index(index).build());
        }
        self
    }

    /// Finish the group.
    pub fn build(self) -> ElementGroup {
        ElementGroup {
            name: self.name,
            timing: self.timing,
            stagger: self.stagger,
            elements: self.elements,
        }
    }
}

/// Builder for one [`Element`]. Starts static: `from` equals `to`.
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Static element of `kind` at `origin`.
    pub fn new(
        id: impl Into<String>,
        kind: ElementKind,
        origin: Point,
        state: VisualState,
    ) -> Self {
        Self {
            element: Element {
                id: id.into(),
                kind,
                label: None,
                tooltip: None,
                origin,
                from: state,
                to: state,
                stagger_index: None,
            },
        }
    }

    /// State at scene entry; the current state becomes the target.
    pub fn from(mut self, state: VisualState) -> Self {
        self.element.from = state;
        self
    }

    /// Text drawn on the element.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.element.label = Some(label.into());
        self
    }

    /// Hover text.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.element.tooltip = Some(tooltip.into());
        self
    }

    /// Position used by the group's stagger; defaults to insertion order.
    pub fn stagger_index(mut self, index: u32) -> Self {
        self.element.stagger_index = Some(index);
        self
    }

    /// Finish the element.
    pub fn build(self) -> Element {
        self.element
    }
}

/// Linear cycle repeating every `period_ms`.
pub fn repeat(from: f64, to: f64, period_ms: u64) -> Cycle {
    Cycle {
        from,
        to,
        period_ms,
        mode: LoopMode::Repeat,
        ease: Ease::Linear,
    }
}

/// Smooth there-and-back cycle every `period_ms`.
pub fn pulse(from: f64, to: f64, period_ms: u64) -> Cycle {
    Cycle {
        from,
        to,
        period_ms,
        mode: LoopMode::PingPong,
        ease: Ease::InOutQuad,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
