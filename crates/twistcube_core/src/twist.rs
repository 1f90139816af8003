use std::f32::consts::FRAC_PI_2;
use std::fmt;

use cgmath::{Quaternion, Rad, Rotation3};
use smallvec::{SmallVec, smallvec};

use crate::{Axis, Face, Sign};

/// Direction of a quarter turn, as seen looking at the turned face from
/// outside the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }

    /// Returns the rotation sense about the positive axis of the turned
    /// face's layer. Clockwise turns are negative rotations.
    pub(crate) fn sign(self) -> Sign {
        match self {
            TwistDirection::Cw => Sign::Neg,
            TwistDirection::Ccw => Sign::Pos,
        }
    }
}

/// A quarter turn of one face's layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face whose layer is turned.
    pub face: Face,
    /// Turn direction, viewed from outside the cube.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.direction {
            TwistDirection::Cw => "",
            TwistDirection::Ccw => "'",
        };
        write!(f, "{}{suffix}", self.face)
    }
}
impl Twist {
    /// Constructs a twist of `face` in `direction`.
    pub fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }

    /// Constructs a clockwise twist of `face`.
    pub fn cw(face: Face) -> Self {
        Self::new(face, TwistDirection::Cw)
    }

    /// Constructs a counterclockwise twist of `face`.
    pub fn ccw(face: Face) -> Self {
        Self::new(face, TwistDirection::Ccw)
    }

    /// Returns the twist that exactly undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }

    /// Returns the signed rotation angle of the full turn about the positive
    /// axis of the turned layer.
    pub fn angle(self) -> Rad<f32> {
        Rad(FRAC_PI_2 * self.direction.sign().float())
    }

    /// Returns the rotation of the turned layer at `progress` through the
    /// turn, where 0.0 is at rest and 1.0 is the full quarter turn.
    ///
    /// The rotation is computed from the absolute angle every time; callers
    /// must not accumulate incremental rotations across frames.
    pub fn rotation(self, progress: f32) -> Quaternion<f32> {
        let angle = self.angle() * progress;
        match self.face.axis() {
            Axis::X => Quaternion::from_angle_x(angle),
            Axis::Y => Quaternion::from_angle_y(angle),
            Axis::Z => Quaternion::from_angle_z(angle),
        }
    }
}

/// Suffix modifier on a face symbol in move notation.
///
/// This is the closed set of move variants the engine accepts: a plain
/// clockwise turn, an inverse (`'`) turn, and a double (`2`) turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistModifier {
    /// Clockwise quarter turn.
    #[default]
    Plain,
    /// Counterclockwise quarter turn.
    Inverse,
    /// Two clockwise quarter turns.
    Double,
}
impl TwistModifier {
    /// Returns the notation suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            TwistModifier::Plain => "",
            TwistModifier::Inverse => "'",
            TwistModifier::Double => "2",
        }
    }

    /// Expands a modified move on `face` into individual quarter turns. A
    /// double move becomes two clockwise turns.
    pub fn expand(self, face: Face) -> SmallVec<[Twist; 2]> {
        match self {
            TwistModifier::Plain => smallvec![Twist::cw(face)],
            TwistModifier::Inverse => smallvec![Twist::ccw(face)],
            TwistModifier::Double => smallvec![Twist::cw(face), Twist::cw(face)],
        }
    }
}
