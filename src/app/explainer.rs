use std::num::NonZeroU64;

use crate::{
    app::view::View,
    content::stage::StageId,
    content::table::ContentTable,
    foundation::core::TimeMs,
    foundation::error::{ExplainerError, ExplainerResult},
    foundation::settings::ExplainerSettings,
    navigation::state::NavigationState,
    scene::selector::SceneTable,
    sequencer::live::{LiveScene, SceneTask},
    sequencer::scheduler::Scheduler,
};

/// Stage-driven explainer: the cursor, its content, and the one live scene.
///
/// All input is handled one event at a time. Every stage change cancels the outgoing
/// scene's scheduler scope before the incoming scene is mounted, so no timed work from a
/// previous scene can reach the current one.
#[derive(Debug)]
pub struct Explainer {
    settings: ExplainerSettings,
    content: ContentTable,
    scenes: SceneTable,
    nav: NavigationState,
    scheduler: Scheduler<SceneTask>,
    live: LiveScene,
    reveal_every: NonZeroU64,
    stale_dispatches: u64,
}

impl Explainer {
    /// Load the compiled-in tables and mount the first stage at `now`.
    pub fn new(settings: ExplainerSettings, now: TimeMs) -> ExplainerResult<Self> {
        Self::with_tables(settings, ContentTable::load()?, SceneTable::load()?, now)
    }

    /// Build from already-loaded tables.
    pub fn with_tables(
        settings: ExplainerSettings,
        content: ContentTable,
        scenes: SceneTable,
        now: TimeMs,
    ) -> ExplainerResult<Self> {
        settings.validate()?;
        let reveal_every = NonZeroU64::new(settings.typewriter_interval_ms)
            .ok_or_else(|| ExplainerError::validation("typewriter_interval_ms must be > 0"))?;
        let nav = NavigationState::default();
        let mut scheduler = Scheduler::new();
        let live = LiveScene::mount(
            scenes.select(nav.current).clone(),
            &mut scheduler,
            now,
            reveal_every,
        );
        tracing::info!(stage = %nav.current, "explainer ready");
        Ok(Self {
            settings,
            content,
            scenes,
            nav,
            scheduler,
            live,
            reveal_every,
            stale_dispatches: 0,
        })
    }

    /// Settings the explainer was started with.
    pub fn settings(&self) -> &ExplainerSettings {
        &self.settings
    }

    /// The content table every stage resolves against.
    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    /// Current navigation cursor.
    pub fn state(&self) -> NavigationState {
        self.nav
    }

    /// Stage on display.
    pub fn current_stage(&self) -> StageId {
        self.nav.current
    }

    /// The mounted scene.
    pub fn live_scene(&self) -> &LiveScene {
        &self.live
    }

    /// Pending timed work of the mounted scene.
    pub fn scheduler(&self) -> &Scheduler<SceneTask> {
        &self.scheduler
    }

    /// Fired tasks discarded because their scope was no longer live. Stays zero unless a
    /// scene swap skipped its cancellation.
    pub fn stale_dispatches(&self) -> u64 {
        self.stale_dispatches
    }

    /// "Next" pressed. Returns whether the stage changed.
    pub fn on_next(&mut self, now: TimeMs) -> bool {
        self.navigate(self.nav.advance(), now, "next")
    }

    /// "Previous" pressed. Returns whether the stage changed.
    pub fn on_previous(&mut self, now: TimeMs) -> bool {
        self.navigate(self.nav.retreat(), now, "previous")
    }

    /// Direct selection of stage `index`; out-of-range indices are ignored.
    pub fn on_jump(&mut self, index: usize, now: TimeMs) -> bool {
        self.navigate(self.nav.jump(index), now, "jump")
    }

    /// Remount the current scene from scratch, discarding all of its progress.
    pub fn replay(&mut self, now: TimeMs) {
        tracing::debug!(stage = %self.nav.current, "replay");
        self.remount(now);
    }

    fn navigate(&mut self, target: NavigationState, now: TimeMs, cause: &'static str) -> bool {
        let from = self.nav.current;
        if target == self.nav {
            tracing::debug!(cause, stage = %from, "navigation saturated");
            return false;
        }
        self.nav = target;
        tracing::debug!(cause, %from, to = %target.current, "navigation");
        self.remount(now);
        true
    }

    #[tracing::instrument(skip(self), fields(stage = %self.nav.current))]
    fn remount(&mut self, now: TimeMs) {
        let cancelled = self.scheduler.cancel_scope(self.live.scope());
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled outgoing scene tasks");
        }
        let scene = self.scenes.select(self.nav.current).clone();
        self.live = LiveScene::mount(scene, &mut self.scheduler, now, self.reveal_every);
    }

    /// Dispatch every task due at or before `now` to the live scene.
    pub fn tick(&mut self, now: TimeMs) {
        while let Some(firing) = self.scheduler.poll_next(now) {
            if firing.scope != self.live.scope() {
                self.stale_dispatches += 1;
                tracing::warn!(
                    scope = ?firing.scope,
                    task = ?firing.task,
                    "discarding task from a scene that is no longer live"
                );
                self.scheduler.cancel(firing.task);
                continue;
            }
            self.live.handle(&firing, &mut self.scheduler);
        }
    }

    /// Advance timers to `now` and produce the view for that instant.
    pub fn render(&mut self, now: TimeMs) -> ExplainerResult<View<'_>> {
        self.tick(now);
        let frame = self.live.sample(now)?;
        Ok(View::new(self.nav, self.content.lookup(self.nav.current), frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/explainer.rs"]
mod tests;
