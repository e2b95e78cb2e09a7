use super::*;

#[test]
fn linear_offsets_grow_with_index() {
    let s = Stagger::Linear { step_ms: 100 };
    let offsets: Vec<u64> = (0..4).map(|i| s.offset_ms(i)).collect();
    assert_eq!(offsets, vec![0, 100, 200, 300]);
}

#[test]
fn grid_offsets_follow_row_plus_column() {
    let s = Stagger::Grid {
        columns: 4,
        step_ms: 40,
    };
    assert_eq!(s.offset_ms(0), 0);
    assert_eq!(s.offset_ms(3), 120);
    assert_eq!(s.offset_ms(4), 40);
    assert_eq!(s.offset_ms(5), 80);
    assert_eq!(s.offset_ms(15), 240);
}

#[test]
fn none_and_zero_columns() {
    assert_eq!(Stagger::None.offset_ms(9), 0);
    let bad = Stagger::Grid {
        columns: 0,
        step_ms: 10,
    };
    assert!(bad.validate().is_err());
    assert_eq!(bad.offset_ms(2), 20);
}
