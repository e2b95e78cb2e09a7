use super::*;
use crate::content::stage::STAGE_COUNT;

#[test]
fn every_stage_has_a_scene() {
    let table = SceneTable::load().unwrap();
    for id in StageId::ALL {
        assert_eq!(table.select(id).stage, id);
        assert_eq!(select_scene(id).unwrap().stage, id);
    }
}

#[test]
fn selection_is_deterministic() {
    let table = SceneTable::load().unwrap();
    for id in StageId::ALL {
        let a = select_scene(id).unwrap();
        let b = select_scene(id).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a, table.select(id));
    }
}

#[test]
fn out_of_order_rows_refuse_to_load() {
    let mut entries = SCENE_ENTRIES;
    entries.swap(1, 2);
    let err = SceneTable::from_entries(&entries).unwrap_err();
    assert!(matches!(err, ExplainerError::Configuration(_)));
}

#[test]
fn missing_rows_refuse_to_load() {
    let err = SceneTable::from_entries(&SCENE_ENTRIES[..STAGE_COUNT - 1]).unwrap_err();
    assert!(err.to_string().contains("expected 6"));
}

#[test]
fn invalid_compositions_surface_as_configuration_errors() {
    fn broken() -> ExplainerResult<SceneDescriptor> {
        Err(ExplainerError::validation("boom"))
    }
    let mut entries = SCENE_ENTRIES;
    entries[4].compose = broken;
    let err = SceneTable::from_entries(&entries).unwrap_err();
    assert!(matches!(err, ExplainerError::Configuration(_)));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn mislabelled_composition_is_rejected() {
    let mut entries = SCENE_ENTRIES;
    entries[0].compose = stages::patching;
    let err = SceneTable::from_entries(&entries).unwrap_err();
    assert!(err.to_string().contains("composed a scene for 'patching'"));
}
