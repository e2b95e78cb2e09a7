use std::{collections::BTreeMap, num::NonZeroU64};

use crate::foundation::core::TimeMs;

/// Owner of a set of timed tasks. Cancelling a scope cancels every task in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ScopeId(u64);

/// Handle to one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TaskId,
    scope: ScopeId,
    period: Option<NonZeroU64>,
    payload: K,
}

/// A task that came due.
#[derive(Clone, Debug, PartialEq)]
pub struct Firing<K> {
    /// Task that fired.
    pub task: TaskId,
    /// Scope the task was scheduled in.
    pub scope: ScopeId,
    /// Instant the task was due (not the instant it was polled).
    pub due: TimeMs,
    /// Caller data attached at scheduling time.
    pub payload: K,
}

/// Single-threaded timer queue.
///
/// Nothing runs on its own: the owner polls with the current time and dispatches what came
/// due, one firing at a time and in due order. Ties fire in scheduling order.
#[derive(Debug)]
pub struct Scheduler<K> {
    next_scope: u64,
    next_task: u64,
    queue: BTreeMap<(TimeMs, TaskId), Entry<K>>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            next_scope: 0,
            next_task: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<K: Clone> Scheduler<K> {
    /// Scheduler with no scopes and no tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh scope for a group of tasks that share a lifetime.
    pub fn open_scope(&mut self) -> ScopeId {
        let scope = ScopeId(self.next_scope);
        self.next_scope += 1;
        scope
    }

    /// Run once at `due`.
    pub fn schedule_at(&mut self, scope: ScopeId, due: TimeMs, payload: K) -> TaskId {
        self.insert(scope, due, None, payload)
    }

    /// Run at `first_due` and then every `period` until cancelled.
    pub fn schedule_every(
        &mut self,
        scope: ScopeId,
        first_due: TimeMs,
        period: NonZeroU64,
        payload: K,
    ) -> TaskId {
        self.insert(scope, first_due, Some(period), payload)
    }

    fn insert(
        &mut self,
        scope: ScopeId,
        due: TimeMs,
        period: Option<NonZeroU64>,
        payload: K,
    ) -> TaskId {
        let id = TaskId(self.next_task);
        self.next_task += 1;
        self.queue.insert(
            (due, id),
            Entry {
                id,
                scope,
                period,
                payload,
            },
        );
        id
    }

    /// Remove one task. Returns whether it was still pending.
    pub fn cancel(&mut self, task: TaskId) -> bool {
        let key = self.queue.keys().find(|(_, id)| *id == task).copied();
        key.is_some_and(|k| self.queue.remove(&k).is_some())
    }

    /// Remove every task of `scope`. Returns how many were pending.
    pub fn cancel_scope(&mut self, scope: ScopeId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, entry| entry.scope != scope);
        before - self.queue.len()
    }

    /// Tasks of `scope` still pending.
    pub fn pending_in_scope(&self, scope: ScopeId) -> usize {
        self.queue.values().filter(|e| e.scope == scope).count()
    }

    /// All pending tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// No task is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending due time.
    pub fn next_due(&self) -> Option<TimeMs> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// A repeating task is re-queued one period after the instant it was due, so a caller
    /// that polls late still sees one firing per elapsed period.
    pub fn poll_next(&mut self, now: TimeMs) -> Option<Firing<K>> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > now {
            return None;
        }
        let (_, entry) = self.queue.pop_first()?;
        if let Some(period) = entry.period {
            self.queue.insert(
                (due.after(period.get()), entry.id),
                Entry {
                    id: entry.id,
                    scope: entry.scope,
                    period: entry.period,
                    payload: entry.payload.clone(),
                },
            );
        }
        Some(Firing {
            task: entry.id,
            scope: entry.scope,
            due,
            payload: entry.payload,
        })
    }

    /// Drain every firing due at or before `now`.
    pub fn poll(&mut self, now: TimeMs) -> Vec<Firing<K>> {
        std::iter::from_fn(|| self.poll_next(now)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/scheduler.rs"]
mod tests;
