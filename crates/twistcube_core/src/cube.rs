//! Cube state: the 27 pieces and the exact effect of a quarter turn on them.

use std::f32::consts::FRAC_PI_2;
use std::ops::Index;

use cgmath::{Euler, One, Quaternion, Rad, Vector3};
use strum::IntoEnumIterator;

use crate::{Axis, Face, Twist};

/// Distance between the centers of adjacent pieces.
pub const SPACING: f32 = 1.05;

/// Number of pieces in the cube.
pub const PIECE_COUNT: usize = 27;

/// Index of one of the 27 pieces.
///
/// Pieces are never created or destroyed after the cube is built, so a
/// `PieceId` stays valid for the cube's lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

/// Discrete grid coordinate of a piece, each component in {-1, 0, 1}.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPos(pub [i8; 3]);
impl GridPos {
    /// Returns the coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i8 {
        self.0[axis as usize]
    }
}

/// One rigid sub-cube.
///
/// At rest, `position` equals `grid * SPACING` per axis and `rotation` is a
/// multiple of 90° about each world axis. Both invariants are restored by
/// snapping whenever a turn commits.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Original assembly slot; determines the sticker colors forever.
    home: GridPos,
    /// Current grid coordinate.
    grid: GridPos,
    /// Current world position.
    position: Vector3<f32>,
    /// Current world orientation.
    rotation: Quaternion<f32>,
    /// Sticker colors indexed by home face slot. A slot is painted iff the
    /// home coordinate is extreme on that face's axis; the assignment never
    /// changes after construction, only which world direction each painted
    /// slot points toward.
    stickers: [Option<Face>; Face::COUNT],
}
impl Piece {
    fn new(home: GridPos) -> Self {
        let mut stickers = [None; Face::COUNT];
        for face in Face::iter() {
            if home.coord(face.axis()) == face.layer_coord() {
                stickers[face as usize] = Some(face);
            }
        }
        Self {
            home,
            grid: home,
            position: grid_to_position(home),
            rotation: Quaternion::one(),
            stickers,
        }
    }

    /// Returns the original assembly slot.
    pub fn home(&self) -> GridPos {
        self.home
    }

    /// Returns the current grid coordinate.
    pub fn grid(&self) -> GridPos {
        self.grid
    }

    /// Returns the current world position.
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Returns the current world orientation.
    pub fn rotation(&self) -> Quaternion<f32> {
        self.rotation
    }

    /// Returns the fixed sticker colors, indexed by home face slot.
    pub fn stickers(&self) -> &[Option<Face>; Face::COUNT] {
        &self.stickers
    }

    /// Rounds the transform to the nearest grid-aligned resting state, then
    /// re-derives the grid coordinate from the snapped position. This is the
    /// only place grid coordinates are derived from continuous state.
    fn snap(&mut self) {
        self.position = Vector3::new(
            (self.position.x / SPACING).round() * SPACING,
            (self.position.y / SPACING).round() * SPACING,
            (self.position.z / SPACING).round() * SPACING,
        );
        let euler = Euler::from(self.rotation);
        self.rotation = Quaternion::from(Euler::new(
            snap_angle(euler.x),
            snap_angle(euler.y),
            snap_angle(euler.z),
        ));
        self.grid = GridPos([
            (self.position.x / SPACING).round() as i8,
            (self.position.y / SPACING).round() as i8,
            (self.position.z / SPACING).round() as i8,
        ]);
    }
}

/// The full 27-piece cube state.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pieces: Vec<Piece>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Index<PieceId> for Cube {
    type Output = Piece;

    fn index(&self, piece: PieceId) -> &Piece {
        &self.pieces[piece.0 as usize]
    }
}
impl Cube {
    /// Constructs the solved cube, one piece per coordinate of {-1,0,1}³.
    pub fn new() -> Self {
        let mut pieces = Vec::with_capacity(PIECE_COUNT);
        for z in -1..=1 {
            for y in -1..=1 {
                for x in -1..=1 {
                    pieces.push(Piece::new(GridPos([x, y, z])));
                }
            }
        }
        Self { pieces }
    }

    /// Returns all pieces.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns an iterator over all piece IDs.
    pub fn ids(&self) -> impl Iterator<Item = PieceId> {
        (0..PIECE_COUNT as u8).map(PieceId)
    }

    /// Returns the 9 pieces whose coordinate on the face's axis equals the
    /// face's layer coordinate.
    pub fn pieces_in_layer(&self, face: Face) -> Vec<PieceId> {
        self.ids()
            .filter(|&id| self[id].grid.coord(face.axis()) == face.layer_coord())
            .collect()
    }

    /// Applies a full quarter turn to the twisted layer and commits the
    /// result: each piece's continuous transform is rotated, snapped back to
    /// the grid, and its grid coordinate re-derived from the snapped
    /// position.
    ///
    /// Callers animating the turn must only call this once the animation has
    /// completed; mid-animation transforms are never written back.
    pub fn twist(&mut self, twist: Twist) {
        let rotation = twist.rotation(1.0);
        for id in self.pieces_in_layer(twist.face) {
            let piece = &mut self.pieces[id.0 as usize];
            piece.position = rotation * piece.position;
            piece.rotation = rotation * piece.rotation;
            piece.snap();
        }
    }

    /// Returns the world face that the given sticker slot of a piece
    /// currently points toward.
    pub fn sticker_world_face(&self, id: PieceId, sticker: Face) -> Face {
        let piece = &self[id];
        let dir = piece.rotation * (sticker.axis().unit_vec3() * sticker.sign().float());
        // The resting rotation is an exact multiple of 90° per axis, so
        // rounding recovers the axis direction exactly.
        let grid = [
            dir.x.round() as i8,
            dir.y.round() as i8,
            dir.z.round() as i8,
        ];
        Face::from_unit_grid(grid).expect("snapped rotation must map a face to a face")
    }

    /// Returns whether every painted sticker points toward the face whose
    /// color it carries.
    pub fn is_solved(&self) -> bool {
        self.ids().all(|id| {
            Face::iter().all(|slot| match self[id].stickers[slot as usize] {
                Some(color) => self.sticker_world_face(id, slot) == color,
                None => true,
            })
        })
    }
}

fn grid_to_position(grid: GridPos) -> Vector3<f32> {
    Vector3::new(grid.0[0] as f32, grid.0[1] as f32, grid.0[2] as f32) * SPACING
}

fn snap_angle(angle: Rad<f32>) -> Rad<f32> {
    Rad((angle.0 / FRAC_PI_2).round() * FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::{Itertools, iproduct};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use proptest::sample::select;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::TwistDirection;

    fn all_coords(cube: &Cube) -> Vec<[i8; 3]> {
        cube.pieces().iter().map(|piece| piece.grid().0).collect()
    }

    #[test]
    fn test_coordinate_coverage() {
        let cube = Cube::new();
        let expected: HashSet<[i8; 3]> = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| [x, y, z])
            .collect();
        let actual: HashSet<[i8; 3]> = all_coords(&cube).into_iter().collect();
        assert_eq!(expected, actual);
        assert_eq!(PIECE_COUNT, cube.pieces().len());
    }

    #[test]
    fn test_layer_selection() {
        let cube = Cube::new();
        for face in Face::iter() {
            let layer = cube.pieces_in_layer(face);
            assert_eq!(9, layer.len(), "{face} layer");
            for id in layer {
                assert_eq!(face.layer_coord(), cube[id].grid().coord(face.axis()));
            }
        }
    }

    #[test]
    fn test_sticker_assignment() {
        let cube = Cube::new();
        let painted_count = |home: [i8; 3]| {
            let id = cube
                .ids()
                .find(|&id| cube[id].home() == GridPos(home))
                .unwrap();
            cube[id].stickers().iter().flatten().count()
        };
        assert_eq!(3, painted_count([1, 1, 1]));
        assert_eq!(2, painted_count([1, 1, 0]));
        assert_eq!(1, painted_count([0, 1, 0]));
        assert_eq!(0, painted_count([0, 0, 0]));
    }

    #[test]
    fn test_up_turn_permutes_coordinates() {
        let mut cube = Cube::new();
        let before: Vec<[i8; 3]> = all_coords(&cube);
        cube.twist(Twist::cw(Face::U));

        for (id, old) in cube.ids().zip_eq(before) {
            let new = cube[id].grid().0;
            if old[1] == 1 {
                // Clockwise viewed from +Y: {x, z} -> {-z, x}.
                assert_eq!([-old[2], old[1], old[0]], new);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_up_turn_rotates_sticker_facings() {
        let mut cube = Cube::new();
        cube.twist(Twist::cw(Face::U));

        // The piece that started at the front-top-right corner.
        let id = cube
            .ids()
            .find(|&id| cube[id].home() == GridPos([1, 1, 1]))
            .unwrap();
        assert_eq!(GridPos([-1, 1, 1]), cube[id].grid());
        // Its U sticker still faces up; F and R stickers moved on.
        assert_eq!(Face::U, cube.sticker_world_face(id, Face::U));
        assert_eq!(Face::L, cube.sticker_world_face(id, Face::F));
        assert_eq!(Face::F, cube.sticker_world_face(id, Face::R));
    }

    #[test]
    fn test_four_turn_identity() {
        let solved = Cube::new();
        let mut cube = solved.clone();
        for _ in 0..4 {
            cube.twist(Twist::cw(Face::R));
        }
        assert_eq!(solved, cube);
    }

    #[test]
    fn test_inverse_law() {
        let solved = Cube::new();
        for face in Face::iter() {
            let mut cube = solved.clone();
            cube.twist(Twist::cw(face));
            cube.twist(Twist::ccw(face));
            assert_eq!(solved, cube, "{face} then {face}'");
        }
    }

    #[test]
    fn test_solved_detection() {
        let mut cube = Cube::new();
        assert!(cube.is_solved());
        cube.twist(Twist::cw(Face::U));
        assert!(!cube.is_solved());
        for _ in 0..3 {
            cube.twist(Twist::cw(Face::U));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_rest_invariants_after_turns() {
        let mut cube = Cube::new();
        for twist in [
            Twist::cw(Face::U),
            Twist::ccw(Face::F),
            Twist::cw(Face::L),
            Twist::cw(Face::B),
            Twist::ccw(Face::D),
        ] {
            cube.twist(twist);
        }
        for id in cube.ids() {
            let piece = &cube[id];
            let expected = grid_to_position(piece.grid());
            assert_eq!(expected, piece.position(), "piece {id:?} off grid");
            assert!(piece.grid().0.iter().all(|c| (-1..=1).contains(c)));
        }
    }

    fn twist_strategy() -> impl Strategy<Value = Twist> {
        (
            select(Face::iter().collect::<Vec<_>>()),
            select(vec![TwistDirection::Cw, TwistDirection::Ccw]),
        )
            .prop_map(|(face, direction)| Twist::new(face, direction))
    }

    proptest! {
        #[test]
        fn proptest_rotation_closure(twists in prop::collection::vec(twist_strategy(), 0..40)) {
            let mut cube = Cube::new();
            for twist in twists {
                cube.twist(twist);
            }
            let coords: HashSet<[i8; 3]> = all_coords(&cube).into_iter().collect();
            prop_assert_eq!(PIECE_COUNT, coords.len());
            for coord in coords {
                prop_assert!(coord.iter().all(|c| (-1..=1).contains(c)));
            }
        }
    }
}
