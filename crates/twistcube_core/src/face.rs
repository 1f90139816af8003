use std::fmt;

use strum::EnumIter;

use crate::{Axis, Sign};

/// Color of unpainted interior sticker slots.
pub const NEUTRAL_COLOR: [u8; 3] = [0x22, 0x22, 0x22];

/// Face of the cube, identified by the world direction it looks toward.
///
/// The discriminant doubles as the sticker slot index on a piece.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Right (+X).
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol_str())
    }
}
impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }

    /// Returns which end of the axis this face sits on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }

    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the fixed grid coordinate of this face's layer on its axis.
    pub fn layer_coord(self) -> i8 {
        self.sign().int()
    }

    /// Returns the face-turn notation symbol.
    pub fn symbol_str(self) -> &'static str {
        use Face::*;

        match self {
            R => "R",
            L => "L",
            U => "U",
            D => "D",
            F => "F",
            B => "B",
        }
    }

    /// Returns the face for a notation symbol, if there is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        use Face::*;

        match c {
            'R' => Some(R),
            'L' => Some(L),
            'U' => Some(U),
            'D' => Some(D),
            'F' => Some(F),
            'B' => Some(B),
            _ => None,
        }
    }

    /// Returns the full English name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the outward unit vector of the face in grid coordinates.
    pub fn unit_grid(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.axis() as usize] = self.sign().int();
        ret
    }

    /// Returns the face whose outward unit vector is `v`.
    pub(crate) fn from_unit_grid(v: [i8; 3]) -> Option<Self> {
        use Face::*;

        match v {
            [1, 0, 0] => Some(R),
            [-1, 0, 0] => Some(L),
            [0, 1, 0] => Some(U),
            [0, -1, 0] => Some(D),
            [0, 0, 1] => Some(F),
            [0, 0, -1] => Some(B),
            _ => None,
        }
    }

    /// Returns the RGB sticker color painted on this face.
    pub const fn color(self) -> [u8; 3] {
        use Face::*;

        match self {
            U => [0xff, 0xff, 0xff],
            D => [0xff, 0xff, 0x00],
            L => [0xff, 0x80, 0x00],
            R => [0xff, 0x00, 0x00],
            F => [0x00, 0xff, 0x00],
            B => [0x00, 0x00, 0xff],
        }
    }
}
