use crate::{
    content::stage::{STAGE_COUNT, StageId},
    foundation::error::{ExplainerError, ExplainerResult},
    scene::model::SceneDescriptor,
    scene::stages,
};

/// Composes the scene of one stage.
pub type ComposeFn = fn() -> ExplainerResult<SceneDescriptor>;

#[derive(Clone, Copy, Debug)]
/// One row of the scene dispatch table.
pub struct SceneEntry {
    /// Stage the row serves; must equal the row's position.
    pub stage: StageId,
    /// Composition for that stage.
    pub compose: ComposeFn,
}

/// Dispatch table indexed by [`StageId::index`]. The array length ties it to the stage
/// count; [`SceneTable::from_entries`] checks the rows are in order.
pub const SCENE_ENTRIES: [SceneEntry; STAGE_COUNT] = [
    SceneEntry {
        stage: StageId::Intro,
        compose: stages::intro,
    },
    SceneEntry {
        stage: StageId::Patching,
        compose: stages::patching,
    },
    SceneEntry {
        stage: StageId::EncoderClip,
        compose: stages::encoder_clip,
    },
    SceneEntry {
        stage: StageId::Projection,
        compose: stages::projection,
    },
    SceneEntry {
        stage: StageId::Tokens,
        compose: stages::tokens,
    },
    SceneEntry {
        stage: StageId::Inference,
        compose: stages::inference,
    },
];

/// Compose the scene for `id` from the compiled-in table.
///
/// Pure: repeated calls yield equal descriptors.
#[tracing::instrument(level = "trace")]
pub fn select_scene(id: StageId) -> ExplainerResult<SceneDescriptor> {
    compose_entry(&SCENE_ENTRIES[id.index()], id.index())
}

fn compose_entry(entry: &SceneEntry, index: usize) -> ExplainerResult<SceneDescriptor> {
    if entry.stage.index() != index {
        return Err(ExplainerError::configuration(format!(
            "scene table row {index} serves stage '{}'",
            entry.stage
        )));
    }
    let scene = (entry.compose)().map_err(|e| {
        ExplainerError::configuration(format!("scene '{}' is invalid: {e}", entry.stage))
    })?;
    if scene.stage != entry.stage {
        return Err(ExplainerError::configuration(format!(
            "scene table row {index} composed a scene for '{}'",
            scene.stage
        )));
    }
    Ok(scene)
}

/// Every stage's scene, composed and checked once at startup.
#[derive(Clone, Debug)]
pub struct SceneTable {
    scenes: Vec<SceneDescriptor>,
}

impl SceneTable {
    /// Compose and check the compiled-in table.
    pub fn load() -> ExplainerResult<Self> {
        Self::from_entries(&SCENE_ENTRIES)
    }

    /// Compose every row of `entries`; refuse rows that are out of order or invalid.
    pub fn from_entries(entries: &[SceneEntry]) -> ExplainerResult<Self> {
        if entries.len() != STAGE_COUNT {
            return Err(ExplainerError::configuration(format!(
                "scene table has {} rows, expected {STAGE_COUNT}",
                entries.len()
            )));
        }
        let scenes = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| compose_entry(entry, index))
            .collect::<ExplainerResult<Vec<_>>>()?;
        tracing::debug!(scenes = scenes.len(), "scene table loaded");
        Ok(Self { scenes })
    }

    /// Scene for `id`. Total once the table is loaded.
    pub fn select(&self, id: StageId) -> &SceneDescriptor {
        &self.scenes[id.index()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/selector.rs"]
mod tests;
