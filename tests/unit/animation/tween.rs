use super::*;

fn tween(from: f64, to: f64, delay_ms: u64, duration_ms: u64) -> Tween<f64> {
    Tween {
        from,
        to,
        timing: Timing {
            delay_ms,
            duration_ms,
            ease: Ease::Linear,
        },
    }
}

#[test]
fn tween_holds_from_until_delay_then_interpolates() {
    let t = tween(0.0, 10.0, 100, 200);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(99), 0.0);
    assert_eq!(t.sample(100), 0.0);
    assert_eq!(t.sample(200), 5.0);
    assert_eq!(t.sample(300), 10.0);
    assert_eq!(t.sample(10_000), 10.0);
}

#[test]
fn zero_duration_jumps_at_delay() {
    let t = tween(1.0, 2.0, 50, 0);
    assert_eq!(t.sample(49), 1.0);
    assert_eq!(t.sample(50), 2.0);
}

#[test]
fn timing_helpers_compose() {
    let timing = Timing::new(500).delayed(20).delayed(30).with_ease(Ease::Linear);
    assert_eq!(timing.delay_ms, 50);
    assert_eq!(timing.end_ms(), 550);
    assert!(!timing.is_finished(549));
    assert!(timing.is_finished(550));
    assert_eq!(timing.progress(300), 0.5);
}

#[test]
fn colour_lerp_rounds_channels() {
    let a = Rgba8Premul::from_straight_rgba(0, 0, 0, 255);
    let b = Rgba8Premul::from_straight_rgba(255, 100, 11, 255);
    let mid = Rgba8Premul::lerp(&a, &b, 0.5);
    assert_eq!((mid.r, mid.g, mid.b, mid.a), (128, 50, 6, 255));
}

#[test]
fn repeat_cycle_wraps_every_period() {
    let c = Cycle {
        from: 0.0,
        to: -20.0,
        period_ms: 1000,
        mode: LoopMode::Repeat,
        ease: Ease::Linear,
    };
    assert_eq!(c.sample(0).unwrap(), 0.0);
    assert_eq!(c.sample(500).unwrap(), -10.0);
    assert_eq!(c.sample(1000).unwrap(), 0.0);
    assert_eq!(c.sample(123_250).unwrap(), -5.0);
}

#[test]
fn ping_pong_cycle_returns_to_start() {
    let c = Cycle {
        from: 0.4,
        to: 1.0,
        period_ms: 2000,
        mode: LoopMode::PingPong,
        ease: Ease::Linear,
    };
    assert_eq!(c.sample(0).unwrap(), 0.4);
    assert!((c.sample(1000).unwrap() - 1.0).abs() < 1e-12);
    assert!((c.sample(1500).unwrap() - 0.7).abs() < 1e-12);
    assert_eq!(c.sample(2000).unwrap(), 0.4);
}

#[test]
fn zero_period_is_an_animation_error() {
    let c = Cycle {
        from: 0.0,
        to: 1.0,
        period_ms: 0,
        mode: LoopMode::Repeat,
        ease: Ease::Linear,
    };
    assert!(matches!(c.validate(), Err(ExplainerError::Animation(_))));
    assert!(c.sample(10).is_err());
}
