use std::collections::BTreeSet;

use crate::{
    animation::stagger::Stagger,
    animation::tween::{Cycle, Lerp, Timing, Tween},
    content::stage::StageId,
    foundation::core::{Point, Rgba8Premul, Vec2},
    foundation::error::{ExplainerError, ExplainerResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Visual properties of one element at one instant.
pub struct VisualState {
    /// Displacement from the element's layout origin.
    pub offset: Vec2,
    /// Box extent; for [`ElementKind::Line`] the vector from start to end.
    pub size: Vec2,
    /// Uniform scale about the origin.
    pub scale: f64,
    /// Fill colour.
    pub color: Rgba8Premul,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Corner radius in pixels.
    pub corner_radius: f64,
}

impl VisualState {
    /// Opaque unscaled box of `width` x `height` filled with `color`.
    pub fn boxed(width: f64, height: f64, color: Rgba8Premul) -> Self {
        Self {
            offset: Vec2::ZERO,
            size: Vec2::new(width, height),
            scale: 1.0,
            color,
            opacity: 1.0,
            corner_radius: 0.0,
        }
    }

    /// Copy with a new offset.
    pub fn with_offset(self, x: f64, y: f64) -> Self {
        Self {
            offset: Vec2::new(x, y),
            ..self
        }
    }

    /// Copy with a new scale.
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Copy with a new colour.
    pub fn with_color(self, color: Rgba8Premul) -> Self {
        Self { color, ..self }
    }

    /// Copy with a new opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Copy with a new corner radius.
    pub fn with_radius(self, corner_radius: f64) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    fn validate(&self, element: &str) -> ExplainerResult<()> {
        let finite = [
            self.offset.x,
            self.offset.y,
            self.size.x,
            self.size.y,
            self.scale,
            self.opacity,
            self.corner_radius,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ExplainerError::validation(format!(
                "element '{element}' has a non-finite visual property"
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ExplainerError::validation(format!(
                "element '{element}' opacity must be in [0, 1]"
            )));
        }
        if self.scale < 0.0 {
            return Err(ExplainerError::validation(format!(
                "element '{element}' scale must be >= 0"
            )));
        }
        Ok(())
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            offset: <Vec2 as Lerp>::lerp(&a.offset, &b.offset, t),
            size: <Vec2 as Lerp>::lerp(&a.size, &b.size, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            color: Rgba8Premul::lerp(&a.color, &b.color, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            corner_radius: f64::lerp(&a.corner_radius, &b.corner_radius, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// What an element depicts. Renderers may draw kinds differently.
pub enum ElementKind {
    /// The input photograph or a placeholder for it.
    Image,
    /// One patch of the input image.
    Tile,
    /// A feature vector or embedding drawn as a bar.
    Bar,
    /// A framed container such as the projector box.
    Panel,
    /// A pictogram (eye, brain, arrow, scanner).
    Icon,
    /// A pill-shaped token or label chip.
    Chip,
    /// A line of free text.
    Caption,
    /// A straight connector; its size is the end point relative to the origin.
    Line,
    /// Text cursor for the typewriter.
    Cursor,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One visual element with its entry transition.
pub struct Element {
    /// Identifier unique within the scene.
    pub id: String,
    /// What the element depicts.
    pub kind: ElementKind,
    /// Text drawn on or next to the element.
    pub label: Option<String>,
    /// Text shown on hover.
    pub tooltip: Option<String>,
    /// Layout position of the element's center (line start for lines).
    pub origin: Point,
    /// State at scene entry.
    pub from: VisualState,
    /// State once the entry transition finishes.
    pub to: VisualState,
    /// Position in the group's stagger sequence; `None` starts with the group.
    pub stagger_index: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Elements sharing a base timing and stagger policy.
pub struct ElementGroup {
    /// Group name, unique within the scene.
    pub name: String,
    /// Base timing for every element of the group.
    pub timing: Timing,
    /// Per-element start offsets.
    pub stagger: Stagger,
    /// Members in display order.
    pub elements: Vec<Element>,
}

impl ElementGroup {
    /// Effective timing of `element` after applying the stagger offset.
    pub fn timing_for(&self, element: &Element) -> Timing {
        let offset = element
            .stagger_index
            .map_or(0, |index| self.stagger.offset_ms(index));
        self.timing.delayed(offset)
    }

    /// Entry tween of `element`.
    pub fn tween_for(&self, element: &Element) -> Tween<VisualState> {
        Tween {
            from: element.from,
            to: element.to,
            timing: self.timing_for(element),
        }
    }

    /// Elapsed time at which the last member settles.
    pub fn end_ms(&self) -> u64 {
        self.elements
            .iter()
            .map(|e| self.timing_for(e).end_ms())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which property a free-running loop drives.
pub enum LoopProperty {
    /// Multiplies the target's opacity.
    Opacity,
    /// Multiplies the target's scale.
    Scale,
    /// Dash offset of a dashed line, in pixels.
    DashOffset,
    /// Horizontal position of a highlight sweeping across the target, in widths.
    Shimmer,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A continuously animating sub-element with no terminal state.
pub struct LoopSpec {
    /// Identifier unique within the scene.
    pub id: String,
    /// Element id or group name the loop applies to.
    pub target: String,
    /// Driven property.
    pub property: LoopProperty,
    /// Cycle shape.
    pub cycle: Cycle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Progressive text reveal bound to a caption element.
pub struct TypewriterSpec {
    /// Caption element that displays the revealed text.
    pub element: String,
    /// Complete text; revealed one character per tick.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative visual composition for one stage.
///
/// Descriptors are pure data: sampling one at an elapsed time is the job of the
/// sequencer, painting the result is the job of a render backend.
pub struct SceneDescriptor {
    /// Stage this scene belongs to.
    pub stage: StageId,
    /// Container fade-in applied to the whole scene.
    pub enter: Timing,
    /// Element groups in painter's order.
    pub groups: Vec<ElementGroup>,
    /// Free-running loops.
    pub loops: Vec<LoopSpec>,
    /// Optional typewriter reveal.
    pub typewriter: Option<TypewriterSpec>,
}

impl SceneDescriptor {
    /// Reject scenes that cannot be sequenced.
    pub fn validate(&self) -> ExplainerResult<()> {
        let mut element_ids = BTreeSet::new();
        let mut group_names = BTreeSet::new();
        for group in &self.groups {
            if group.elements.is_empty() {
                return Err(ExplainerError::validation(format!(
                    "scene '{}' group '{}' has no elements",
                    self.stage, group.name
                )));
            }
            if !group_names.insert(group.name.as_str()) {
                return Err(ExplainerError::validation(format!(
                    "scene '{}' has duplicate group '{}'",
                    self.stage, group.name
                )));
            }
            group.stagger.validate()?;
            for element in &group.elements {
                if !element_ids.insert(element.id.as_str()) {
                    return Err(ExplainerError::validation(format!(
                        "scene '{}' has duplicate element '{}'",
                        self.stage, element.id
                    )));
                }
                element.from.validate(&element.id)?;
                element.to.validate(&element.id)?;
            }
        }

        let mut loop_ids = BTreeSet::new();
        for spec in &self.loops {
            if !loop_ids.insert(spec.id.as_str()) {
                return Err(ExplainerError::validation(format!(
                    "scene '{}' has duplicate loop '{}'",
                    self.stage, spec.id
                )));
            }
            let target = spec.target.as_str();
            if !element_ids.contains(target) && !group_names.contains(target) {
                return Err(ExplainerError::validation(format!(
                    "loop '{}' targets unknown '{}'",
                    spec.id, spec.target
                )));
            }
            spec.cycle.validate()?;
        }

        if let Some(tw) = &self.typewriter {
            if tw.text.is_empty() {
                return Err(ExplainerError::validation("typewriter text must be non-empty"));
            }
            let bound = self
                .element(&tw.element)
                .is_some_and(|e| e.kind == ElementKind::Caption);
            if !bound {
                return Err(ExplainerError::validation(format!(
                    "typewriter must bind to a caption element, got '{}'",
                    tw.element
                )));
            }
        }
        Ok(())
    }

    /// Element with `id`, if any.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements().map(|(_, e)| e).find(|e| e.id == id)
    }

    /// Every element with its owning group, in painter's order.
    pub fn elements(&self) -> impl Iterator<Item = (&ElementGroup, &Element)> {
        self.groups
            .iter()
            .flat_map(|g| g.elements.iter().map(move |e| (g, e)))
    }

    /// Number of elements across all groups.
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|g| g.elements.len()).sum()
    }

    /// Elapsed time after which every one-shot transition has finished.
    pub fn transitions_end_ms(&self) -> u64 {
        self.groups
            .iter()
            .map(ElementGroup::end_ms)
            .max()
            .unwrap_or(0)
            .max(self.enter.end_ms())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
