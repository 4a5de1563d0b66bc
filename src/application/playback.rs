//! Playback state and the cooperative scheduling of the render loop.

use std::time::Duration;

/// Playback state machine. Every transition is user driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }
}

/// When the render loop wants to run again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// On the next host frame
    NextFrame,
    /// On the first host frame at least this long from now
    After(Duration),
}

/// Work for one render loop iteration at a given speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePlan {
    pub generations: u32,
    pub wake: Wake,
}

impl FramePlan {
    /// Negative speeds run one generation and then wait `-speed` slow-motion
    /// steps. Positive speeds run `speed` generations every frame. Zero
    /// behaves like one.
    pub fn for_speed(speed: i32, slow_motion_step: Duration) -> Self {
        if speed < 0 {
            FramePlan {
                generations: 1,
                wake: Wake::After(slow_motion_step * speed.unsigned_abs()),
            }
        } else {
            FramePlan {
                generations: speed.max(1) as u32,
                wake: Wake::NextFrame,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Armed {
    frame: u64,
    not_before: Duration,
}

/// Single-slot scheduler for the render loop.
///
/// The host calls [`Scheduler::poll`] once at the start of every frame. A
/// task armed after the poll of frame `n` never runs before frame `n + 1`;
/// re-arming replaces the pending task, so at most one loop iteration is
/// ever outstanding.
#[derive(Debug, Default)]
pub struct Scheduler {
    frame: u64,
    armed: Option<Armed>,
}

impl Scheduler {
    pub fn arm(&mut self, now: Duration, wake: Wake) {
        let not_before = match wake {
            Wake::NextFrame => Duration::ZERO,
            Wake::After(delay) => now + delay,
        };
        self.armed = Some(Armed {
            frame: self.frame,
            not_before,
        });
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Start a new host frame. Returns true, and disarms, when the pending
    /// task is due.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.frame += 1;
        match self.armed {
            Some(armed) if armed.frame < self.frame && now >= armed.not_before => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(12);

    #[test]
    fn test_plan_for_speed() {
        assert_eq!(
            FramePlan::for_speed(-2, STEP),
            FramePlan { generations: 1, wake: Wake::After(Duration::from_millis(24)) }
        );
        assert_eq!(
            FramePlan::for_speed(1, STEP),
            FramePlan { generations: 1, wake: Wake::NextFrame }
        );
        assert_eq!(
            FramePlan::for_speed(5, STEP),
            FramePlan { generations: 5, wake: Wake::NextFrame }
        );
        assert_eq!(FramePlan::for_speed(0, STEP).generations, 1);
    }

    #[test]
    fn test_next_frame_never_runs_in_arming_frame() {
        let mut scheduler = Scheduler::default();
        let now = Duration::from_millis(100);
        scheduler.arm(now, Wake::NextFrame);
        assert!(scheduler.poll(now));
        assert!(!scheduler.is_armed());
        assert!(!scheduler.poll(now));
    }

    #[test]
    fn test_delay_is_honoured() {
        let mut scheduler = Scheduler::default();
        scheduler.poll(Duration::ZERO);
        scheduler.arm(Duration::ZERO, Wake::After(Duration::from_millis(24)));
        assert!(!scheduler.poll(Duration::from_millis(16)));
        assert!(scheduler.is_armed());
        assert!(scheduler.poll(Duration::from_millis(33)));
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.arm(Duration::ZERO, Wake::After(Duration::from_secs(10)));
        scheduler.arm(Duration::ZERO, Wake::NextFrame);
        assert!(scheduler.poll(Duration::from_millis(16)));
        assert!(!scheduler.poll(Duration::from_millis(32)));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::default();
        scheduler.arm(Duration::ZERO, Wake::NextFrame);
        scheduler.cancel();
        assert!(!scheduler.poll(Duration::from_millis(16)));
    }
}
