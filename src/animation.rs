use crate::core::ANIMATION_SCALE;
use std::time::{Duration, Instant};

/// Display duration for a route of `total_weight` travel seconds.
pub fn route_duration(total_weight: f64) -> Duration {
    Duration::from_secs_f64(total_weight.max(0.0) * ANIMATION_SCALE)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ProgressTick {
    /// Progress fraction in [0, 1].
    pub fraction: f64,
    /// Set on exactly one tick per run, when the run first reaches 1.0.
    pub just_completed: bool,
}

struct AnimationRun {
    started: Instant,
    duration: Duration,
    completed: bool,
}

/// Cancelable progress animation, advanced by polling from the event loop.
/// Cancel drops the run entirely, so a tick arriving after a reset can never
/// report progress or completion for the cleared route.
#[derive(Default)]
pub struct RouteAnimation {
    run: Option<AnimationRun>,
}

impl RouteAnimation {
    pub fn new() -> Self {
        RouteAnimation { run: None }
    }

    /// Starts a fresh run, replacing any in-flight one.
    pub fn start(&mut self, duration: Duration, now: Instant) {
        self.run = Some(AnimationRun { started: now, duration, completed: false });
    }

    pub fn cancel(&mut self) {
        self.run = None;
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn tick(&mut self, now: Instant) -> Option<ProgressTick> {
        let run = self.run.as_mut()?;

        let fraction = if run.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(run.started);
            (elapsed.as_secs_f64() / run.duration.as_secs_f64()).min(1.0)
        };

        let just_completed = fraction >= 1.0 && !run.completed;
        if just_completed {
            run.completed = true;
        }

        Some(ProgressTick { fraction, just_completed })
    }
}
