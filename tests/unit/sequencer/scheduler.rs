use super::*;

fn every(ms: u64) -> NonZeroU64 {
    NonZeroU64::new(ms).unwrap()
}

#[test]
fn one_shot_fires_once_when_due() {
    let mut s = Scheduler::new();
    let scope = s.open_scope();
    let task = s.schedule_at(scope, TimeMs(100), "a");
    assert!(s.poll(TimeMs(99)).is_empty());

    let fired = s.poll(TimeMs(100));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].task, task);
    assert_eq!(fired[0].payload, "a");
    assert!(s.is_empty());
    assert!(s.poll(TimeMs(1_000)).is_empty());
}

#[test]
fn repeating_task_catches_up_one_firing_per_period() {
    let mut s = Scheduler::new();
    let scope = s.open_scope();
    s.schedule_every(scope, TimeMs(50), every(50), ());
    let fired = s.poll(TimeMs(220));
    let dues: Vec<u64> = fired.iter().map(|f| f.due.0).collect();
    assert_eq!(dues, vec![50, 100, 150, 200]);
    assert_eq!(s.next_due(), Some(TimeMs(250)));
}

#[test]
fn firings_come_out_in_due_order_across_tasks() {
    let mut s = Scheduler::new();
    let scope = s.open_scope();
    s.schedule_every(scope, TimeMs(30), every(30), "fast");
    s.schedule_at(scope, TimeMs(45), "once");
    let order: Vec<&str> = s.poll(TimeMs(60)).into_iter().map(|f| f.payload).collect();
    assert_eq!(order, vec!["fast", "once", "fast"]);
}

#[test]
fn cancel_scope_removes_only_that_scope() {
    let mut s = Scheduler::new();
    let a = s.open_scope();
    let b = s.open_scope();
    assert_ne!(a, b);
    s.schedule_every(a, TimeMs(10), every(10), 'a');
    s.schedule_at(a, TimeMs(500), 'a');
    s.schedule_every(b, TimeMs(10), every(10), 'b');

    assert_eq!(s.cancel_scope(a), 2);
    assert_eq!(s.pending_in_scope(a), 0);
    assert_eq!(s.pending_in_scope(b), 1);
    assert!(s.poll(TimeMs(1_000)).iter().all(|f| f.scope == b));
}

#[test]
fn cancel_stops_a_repeating_task() {
    let mut s = Scheduler::new();
    let scope = s.open_scope();
    let task = s.schedule_every(scope, TimeMs(10), every(10), ());
    assert_eq!(s.poll(TimeMs(25)).len(), 2);
    assert!(s.cancel(task));
    assert!(!s.cancel(task));
    assert!(s.poll(TimeMs(10_000)).is_empty());
}
