use super::*;

#[test]
fn starts_empty() {
    let tw = TypewriterBuffer::new("abc");
    assert_eq!(tw.revealed_len(), 0);
    assert_eq!(tw.revealed_text(), "");
    assert!(!tw.is_complete());
}

#[test]
fn k_ticks_reveal_k_characters() {
    let text = "这是一只黑色的拉布拉多犬。";
    let mut tw = TypewriterBuffer::new(text);
    let total = text.chars().count();
    assert_eq!(tw.total_len(), total);
    for k in 1..total {
        assert!(tw.tick());
        assert_eq!(tw.revealed_len(), k);
        assert_eq!(tw.revealed_text().chars().count(), k);
        assert!(text.starts_with(tw.revealed_text()));
    }
}

#[test]
fn stays_complete_after_the_last_tick() {
    let mut tw = TypewriterBuffer::new("hi!");
    for _ in 0..3 {
        assert!(tw.tick());
    }
    assert!(tw.is_complete());
    assert_eq!(tw.revealed_text(), "hi!");
    for _ in 0..10 {
        assert!(!tw.tick());
        assert_eq!(tw.revealed_len(), 3);
    }
}

#[test]
fn empty_text_is_complete_immediately() {
    let mut tw = TypewriterBuffer::new("");
    assert!(tw.is_complete());
    assert!(!tw.tick());
    assert_eq!(tw.revealed_text(), "");
}
