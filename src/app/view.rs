use crate::{
    content::stage::Stage,
    navigation::state::NavigationState,
    sequencer::live::SceneFrame,
};

/// Title shown in the page header.
pub const HEADER_TITLE: &str = "LLM Vision Explainer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// State of the previous/next controls.
pub struct NavControls {
    /// "Previous" is enabled.
    pub previous_enabled: bool,
    /// "Next" is enabled.
    pub next_enabled: bool,
    /// Caption of the "next" control.
    pub next_label: &'static str,
}

impl NavControls {
    /// Control state for the cursor `nav`.
    pub fn for_state(nav: NavigationState) -> Self {
        Self {
            previous_enabled: nav.can_retreat(),
            next_enabled: nav.can_advance(),
            next_label: nav.next_label(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// What the rendering collaborator receives: cursor, resolved text and sampled scene.
pub struct View<'a> {
    /// Page header title.
    pub header: &'static str,
    /// Navigation cursor.
    pub nav: NavigationState,
    /// Step badge, e.g. `STEP 1 OF 6`.
    pub step_label: String,
    /// Progress bar fill in `(0, 1]`.
    pub progress: f64,
    /// Previous/next control state.
    pub controls: NavControls,
    /// Text panel content.
    pub stage: &'a Stage,
    /// Sampled scene.
    pub frame: SceneFrame,
}

impl<'a> View<'a> {
    /// Assemble a view; header, step badge, progress and controls derive from `nav`.
    pub fn new(nav: NavigationState, stage: &'a Stage, frame: SceneFrame) -> Self {
        Self {
            header: HEADER_TITLE,
            nav,
            step_label: nav.step_label(),
            progress: nav.progress_fraction(),
            controls: NavControls::for_state(nav),
            stage,
            frame,
        }
    }
}
