//! A stage-driven explainer of how multimodal language models "see" an image.
//!
//! The presentation walks through six stages, from raw pixels to a generated answer. Each
//! stage pairs an authored text record with a visual scene. A navigation cursor picks the
//! stage, and the live scene animates from the moment it is mounted.
//!
//! # Pieces
//!
//! 1. **Content**: [`ContentTable`] holds one [`Stage`] per [`StageId`], checked at load.
//! 2. **Navigation**: [`NavigationState`] moves with saturating advance, retreat and jump.
//! 3. **Scenes**: [`select_scene`] maps a stage to its [`SceneDescriptor`] through the
//!    fixed [`SCENE_ENTRIES`] table.
//! 4. **Sequencing**: [`LiveScene`] samples entry transitions, loops and the typewriter at any
//!    instant. Timed work lives in a [`Scheduler`] scope that is cancelled on every stage change.
//! 5. **Presentation**: [`Explainer`] ties the above together and hands a [`View`] to a
//!    [`RenderBackend`]: [`TextPanelRenderer`] for terminals, [`CpuRasterizer`] for pixels.
//!
//! Time is always passed in explicitly as [`TimeMs`], so a [`ManualClock`] drives the whole
//! presentation deterministically.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod app;
mod content;
mod foundation;
mod navigation;
mod render;
mod scene;
mod sequencer;

pub use animation::ease::Ease;
pub use animation::stagger::Stagger;
pub use animation::tween::{Cycle, Lerp, LoopMode, Timing, Tween};
pub use app::explainer::Explainer;
pub use app::view::{HEADER_TITLE, NavControls, View};
pub use content::stage::{STAGE_COUNT, Stage, StageId};
pub use content::table::{ContentTable, authored_stages};
pub use foundation::core::{Canvas, Point, Rgba8Premul, TimeMs, Vec2};
pub use foundation::error::{ExplainerError, ExplainerResult};
pub use foundation::settings::{DEFAULT_TYPEWRITER_INTERVAL_MS, ExplainerSettings};
pub use navigation::state::NavigationState;
pub use render::backend::{FrameRGBA, RenderBackend};
pub use render::composite::unpremultiply;
pub use render::cpu::{CpuRasterizer, LINE_WIDTH};
pub use render::font::{SYSTEM_FONT_CANDIDATES, TextBrushRgba8, TextLayoutEngine, locate_font};
pub use render::text::TextPanelRenderer;
pub use scene::dsl::{
    DEFAULT_ENTER_MS, ElementBuilder, GroupBuilder, SceneBuilder, pulse, repeat,
};
pub use scene::model::{
    Element, ElementGroup, ElementKind, LoopProperty, LoopSpec, SceneDescriptor, TypewriterSpec,
    VisualState,
};
pub use scene::selector::{ComposeFn, SCENE_ENTRIES, SceneEntry, SceneTable, select_scene};
pub use scene::stages::INFERENCE_ANSWER;
pub use sequencer::clock::{Clock, ManualClock, SystemClock};
pub use sequencer::live::{
    ElementFrame, LiveScene, LoopFrame, SceneFrame, SceneTask, TypewriterFrame,
};
pub use sequencer::scheduler::{Firing, Scheduler, ScopeId, TaskId};
pub use sequencer::typewriter::TypewriterBuffer;
