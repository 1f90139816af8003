//! Unfolded-net renderer: draws the six cube faces as colored sticker grids,
//! reading only the engine's public state.

use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use twistcube_core::{Cube, Face, GridPos, NEUTRAL_COLOR, PieceId};

/// Renders the cube as an unfolded net:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
pub fn render(cube: &Cube) -> String {
    let mut out = String::new();
    let indent = " ".repeat(7);

    for row in 0..3 {
        out.push_str(&indent);
        out.push_str(&face_row(cube, Face::U, row));
        out.push('\n');
    }
    for row in 0..3 {
        for face in [Face::L, Face::F, Face::R, Face::B] {
            out.push_str(&face_row(cube, face, row));
            out.push(' ');
        }
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str(&indent);
        out.push_str(&face_row(cube, Face::D, row));
        out.push('\n');
    }
    out
}

/// One row of one face, left to right as seen from outside the cube.
fn face_row(cube: &Cube, face: Face, row: i8) -> String {
    let mut out = String::new();
    for col in 0..3 {
        let [r, g, b] = sticker_color(cube, face, row, col);
        out.push_str(&"  ".on_truecolor(r, g, b).to_string());
    }
    out
}

/// Color shown at `(row, col)` of `face` in the net, row 0 at the top.
fn sticker_color(cube: &Cube, face: Face, row: i8, col: i8) -> [u8; 3] {
    let (right, up) = face_basis(face);
    let mut coord = face.unit_grid();
    for i in 0..3 {
        coord[i] += (col - 1) * right[i] + (1 - row) * up[i];
    }
    let Some(id) = piece_at(cube, GridPos(coord)) else {
        return NEUTRAL_COLOR;
    };
    // The surface is always fully stickered, so exactly one painted slot of
    // this piece points toward `face`.
    Face::iter()
        .filter(|&slot| cube[id].stickers()[slot as usize].is_some())
        .find(|&slot| cube.sticker_world_face(id, slot) == face)
        .and_then(|slot| cube[id].stickers()[slot as usize])
        .map_or(NEUTRAL_COLOR, Face::color)
}

fn piece_at(cube: &Cube, grid: GridPos) -> Option<PieceId> {
    cube.ids().find(|&id| cube[id].grid() == grid)
}

/// Screen-space basis of a face in the net: the grid directions that map to
/// rightward and upward on screen when looking at the face from outside.
fn face_basis(face: Face) -> ([i8; 3], [i8; 3]) {
    match face {
        Face::U => ([1, 0, 0], [0, 0, -1]),
        Face::D => ([1, 0, 0], [0, 0, 1]),
        Face::L => ([0, 0, 1], [0, 1, 0]),
        Face::R => ([0, 0, -1], [0, 1, 0]),
        Face::F => ([1, 0, 0], [0, 1, 0]),
        Face::B => ([-1, 0, 0], [0, 1, 0]),
    }
}

#[cfg(test)]
mod tests {
    use twistcube_core::Twist;

    use super::*;

    #[test]
    fn test_solved_faces_are_uniform() {
        let cube = Cube::new();
        for face in Face::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(face.color(), sticker_color(&cube, face, row, col));
                }
            }
        }
    }

    #[test]
    fn test_up_turn_cycles_side_rows() {
        let mut cube = Cube::new();
        cube.twist(Twist::cw(Face::U));

        // The top row of each side face shifts one face to the left of it
        // (F -> L -> B -> R -> F); everything below stays put.
        for (from, to) in [
            (Face::F, Face::L),
            (Face::L, Face::B),
            (Face::B, Face::R),
            (Face::R, Face::F),
        ] {
            for col in 0..3 {
                assert_eq!(from.color(), sticker_color(&cube, to, 0, col));
            }
            for row in 1..3 {
                for col in 0..3 {
                    assert_eq!(to.color(), sticker_color(&cube, to, row, col));
                }
            }
        }
    }
}
