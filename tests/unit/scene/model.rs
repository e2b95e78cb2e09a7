use super::*;
use crate::scene::dsl::{ElementBuilder, GroupBuilder, SceneBuilder, repeat};
use crate::scene::model::ElementKind;

fn white() -> Rgba8Premul {
    Rgba8Premul::from_straight_rgba(255, 255, 255, 255)
}

fn tile(id: &str) -> ElementBuilder {
    let state = VisualState::boxed(10.0, 10.0, white());
    ElementBuilder::new(id, ElementKind::Tile, Point::new(0.0, 0.0), state)
        .from(state.with_opacity(0.0))
}

#[test]
fn visual_state_lerp_blends_every_property() {
    let a = VisualState::boxed(64.0, 64.0, Rgba8Premul::transparent());
    let b = VisualState::boxed(40.0, 12.0, white())
        .with_offset(10.0, -10.0)
        .with_scale(0.5)
        .with_opacity(0.0)
        .with_radius(4.0);
    let mid = VisualState::lerp(&a, &b, 0.5);
    assert_eq!(mid.size, Vec2::new(52.0, 38.0));
    assert_eq!(mid.offset, Vec2::new(5.0, -5.0));
    assert_eq!(mid.scale, 0.75);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.corner_radius, 2.0);
    assert_eq!(mid.color.a, 128);
}

#[test]
fn group_timing_applies_stagger_index() {
    let group = GroupBuilder::new("g", Timing::new(100).delayed(50))
        .stagger(Stagger::Linear { step_ms: 20 })
        .sequence([tile("a"), tile("b"), tile("c")])
        .element(tile("unindexed"))
        .build();
    let delays: Vec<u64> = group
        .elements
        .iter()
        .map(|e| group.timing_for(e).delay_ms)
        .collect();
    assert_eq!(delays, vec![50, 70, 90, 50]);
    assert_eq!(group.end_ms(), 190);
}

#[test]
fn transitions_end_covers_enter_and_groups() {
    let scene = SceneBuilder::new(StageId::Patching)
        .group(GroupBuilder::new("g", Timing::new(100)).element(tile("a")))
        .build()
        .unwrap();
    assert_eq!(scene.transitions_end_ms(), 300);
    assert_eq!(scene.element_count(), 1);
    assert!(scene.element("a").is_some());
    assert!(scene.element("b").is_none());
}

#[test]
fn duplicate_elements_are_rejected() {
    let err = SceneBuilder::new(StageId::Intro)
        .group(GroupBuilder::fixed("g").element(tile("a")).element(tile("a")))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate element 'a'"));
}

#[test]
fn empty_groups_are_rejected() {
    let err = SceneBuilder::new(StageId::Intro)
        .group(GroupBuilder::fixed("empty"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("no elements"));
}

#[test]
fn loops_must_target_something_and_advance() {
    let err = SceneBuilder::new(StageId::Intro)
        .group(GroupBuilder::fixed("g").element(tile("a")))
        .looping("l", "missing", LoopProperty::Opacity, repeat(0.0, 1.0, 100))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("unknown 'missing'"));

    let err = SceneBuilder::new(StageId::Intro)
        .group(GroupBuilder::fixed("g").element(tile("a")))
        .looping("l", "g", LoopProperty::Opacity, repeat(0.0, 1.0, 0))
        .build()
        .unwrap_err();
    assert!(matches!(err, ExplainerError::Animation(_)));
}

#[test]
fn typewriter_must_bind_to_a_caption() {
    let err = SceneBuilder::new(StageId::Inference)
        .group(GroupBuilder::fixed("g").element(tile("a")))
        .typewriter("a", "hello")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("caption"));
}

#[test]
fn out_of_range_opacity_is_rejected() {
    let bad = VisualState::boxed(1.0, 1.0, white()).with_opacity(1.5);
    let err = SceneBuilder::new(StageId::Intro)
        .group(GroupBuilder::fixed("g").element(ElementBuilder::new(
            "a",
            ElementKind::Tile,
            Point::ORIGIN,
            bad,
        )))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("opacity"));
}
