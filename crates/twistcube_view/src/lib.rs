//! Simulation layer for the cube, to ensure consistent feel across frontends:
//! one eased twist animation at a time, a strict FIFO move queue, and a
//! bounded undo history.
//!
//! The simulation is driven by injected frame timestamps (see
//! [`CubeSimulation::step`]), so it runs headlessly without a rendering loop.

mod animations;
mod simulation;

pub use animations::interpolate;
pub use animations::{TWIST_COOLDOWN, TWIST_DURATION, TwistAnimation, TwistAnimationState};
pub use simulation::{CubeSimulation, PieceSnapshot, SHUFFLE_LENGTH, UNDO_CAPACITY};
