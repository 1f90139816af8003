//! Core state and math for a 3×3×3 twisty puzzle: axes, faces, twists, move
//! notation, and the 27-piece cube with grid-snapped transforms.
//!
//! This crate knows nothing about animation or scheduling; it models resting
//! cube states and the exact effect of a quarter turn. See `twistcube_view`
//! for the simulation layer that animates twists over time.

mod axis;
mod cube;
mod face;
pub mod notation;
mod twist;

pub use axis::{Axis, Sign};
pub use cube::{Cube, GridPos, PIECE_COUNT, Piece, PieceId, SPACING};
pub use face::{Face, NEUTRAL_COLOR};
pub use twist::{Twist, TwistDirection, TwistModifier};
