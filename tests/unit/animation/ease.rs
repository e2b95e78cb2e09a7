use super::*;

const CURVES: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Step,
];

#[test]
fn endpoints_are_stable() {
    for ease in CURVES {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn continuous_curves_increase() {
    for ease in CURVES.into_iter().filter(|e| *e != Ease::Step) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b && b < c, "{ease:?}");
    }
}

#[test]
fn step_holds_until_the_end() {
    assert_eq!(Ease::Step.apply(0.999), 0.0);
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(json, "\"in_out_cubic\"");
    assert_eq!(Ease::default(), Ease::OutCubic);
}
