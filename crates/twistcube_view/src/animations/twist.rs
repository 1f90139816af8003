use twistcube_core::{PieceId, Twist};
use web_time::{Duration, Instant};

use super::interpolate;

/// Wall-clock duration of one quarter-turn animation.
pub const TWIST_DURATION: Duration = Duration::from_millis(250);

/// Pause after a turn commits before the next queued turn starts, so
/// consecutive turns stay visually separate.
pub const TWIST_COOLDOWN: Duration = Duration::from_millis(80);

const TWIST_INTERPOLATION_FN: interpolate::InterpolateFn = interpolate::CUBIC;

/// One dequeued twist being animated.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    /// Twist being applied.
    pub twist: Twist,
    /// Whether the twist is pushed onto the undo history when it commits.
    pub record: bool,
    /// Pieces of the twisted layer, resolved when the twist was dequeued.
    pub pieces: Vec<PieceId>,
}

/// Executor state machine. At most one twist is in flight at a time; the
/// simulation keeps everything else queued.
#[derive(Debug, Default, Clone)]
pub enum TwistAnimationState {
    /// No animation in progress.
    #[default]
    Idle,
    /// A twist is partway through its turn.
    Animating {
        /// The in-flight twist.
        anim: TwistAnimation,
        /// When the turn started.
        start: Instant,
    },
    /// The last twist has committed; waiting out the inter-move delay.
    Cooldown {
        /// When the delay ends.
        until: Instant,
    },
}
impl TwistAnimationState {
    /// Returns whether no animation is in progress and no cooldown pending.
    pub fn is_idle(&self) -> bool {
        matches!(self, TwistAnimationState::Idle)
    }

    /// Returns whether a twist is currently in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self, TwistAnimationState::Animating { .. })
    }

    /// Starts animating a twist. Must only be called while idle.
    pub fn begin(&mut self, anim: TwistAnimation, now: Instant) {
        debug_assert!(self.is_idle(), "twist animation started while busy");
        *self = TwistAnimationState::Animating { anim, start: now };
    }

    /// Returns the in-flight animation and its eased progress at `now`, in
    /// the range 0.0..=1.0.
    pub fn current(&self, now: Instant) -> Option<(&TwistAnimation, f32)> {
        match self {
            TwistAnimationState::Animating { anim, start } => {
                Some((anim, TWIST_INTERPOLATION_FN(progress(*start, now))))
            }
            _ => None,
        }
    }

    /// Steps the state machine to the frame at `now`. Returns the completed
    /// animation if the in-flight twist reached the end of its duration this
    /// frame; this is the one-shot completion signal the queue observes.
    pub fn proceed(&mut self, now: Instant) -> Option<TwistAnimation> {
        match std::mem::take(self) {
            TwistAnimationState::Idle => None,
            TwistAnimationState::Animating { anim, start } => {
                if progress(start, now) >= 1.0 {
                    *self = TwistAnimationState::Cooldown {
                        until: now + TWIST_COOLDOWN,
                    };
                    Some(anim)
                } else {
                    *self = TwistAnimationState::Animating { anim, start };
                    None
                }
            }
            TwistAnimationState::Cooldown { until } => {
                if now < until {
                    *self = TwistAnimationState::Cooldown { until };
                }
                None
            }
        }
    }
}

/// Linear progress through the turn at `now`, clamped to 1.0. The angle is
/// recomputed from the absolute elapsed time every frame; nothing accumulates
/// across frames.
fn progress(start: Instant, now: Instant) -> f32 {
    (now.duration_since(start).as_secs_f32() / TWIST_DURATION.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use twistcube_core::Face;

    use super::*;

    fn anim() -> TwistAnimation {
        TwistAnimation {
            twist: Twist::cw(Face::U),
            record: true,
            pieces: vec![],
        }
    }

    #[test]
    fn test_state_machine_cycle() {
        let t0 = Instant::now();
        let mut state = TwistAnimationState::default();
        assert!(state.is_idle());
        assert!(state.current(t0).is_none());

        state.begin(anim(), t0);
        assert!(state.is_animating());

        // Mid-turn: no completion, eased progress at the halfway point.
        assert!(state.proceed(t0 + TWIST_DURATION / 2).is_none());
        let (_, eased) = state.current(t0 + TWIST_DURATION / 2).unwrap();
        assert_eq!(0.5, eased);

        // End of turn: completion fires exactly once, then cooldown.
        let done = state.proceed(t0 + TWIST_DURATION).unwrap();
        assert_eq!(Twist::cw(Face::U), done.twist);
        assert!(!state.is_animating());
        assert!(!state.is_idle());

        // Cooldown holds until the inter-move delay has passed.
        assert!(state.proceed(t0 + TWIST_DURATION + TWIST_COOLDOWN / 2).is_none());
        assert!(!state.is_idle());
        assert!(
            state
                .proceed(t0 + TWIST_DURATION + TWIST_COOLDOWN)
                .is_none()
        );
        assert!(state.is_idle());
    }
}
