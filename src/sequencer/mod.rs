pub(crate) mod clock;
pub(crate) mod live;
pub(crate) mod scheduler;
pub(crate) mod typewriter;
