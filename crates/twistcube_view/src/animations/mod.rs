pub mod interpolate;
mod twist;

pub use twist::{TWIST_COOLDOWN, TWIST_DURATION, TwistAnimation, TwistAnimationState};
