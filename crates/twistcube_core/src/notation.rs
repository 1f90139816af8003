//! Face-turn notation parser and serializer.
//!
//! A move is a face symbol (`U`, `D`, `L`, `R`, `F`, `B`) optionally followed
//! by `'` (counterclockwise) or `2` (double). Sequences are separated by
//! whitespace, e.g. `R U R' U2`.

use thiserror::Error;

use crate::{Face, TwistModifier};

/// Error parsing face-turn notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty move string.
    #[error("empty move")]
    Empty,
    /// The first character is not a face symbol.
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    /// The trailing modifier is not `'` or `2`.
    #[error("unknown modifier {0:?} after face {1}")]
    UnknownModifier(String, Face),
}

/// Parses a single move such as `U`, `U'`, or `U2`.
pub fn parse_move(s: &str) -> Result<(Face, TwistModifier), NotationError> {
    let mut chars = s.chars();
    let symbol = chars.next().ok_or(NotationError::Empty)?;
    let face = Face::from_symbol(symbol).ok_or(NotationError::UnknownFace(symbol))?;
    let modifier = match chars.as_str() {
        "" => TwistModifier::Plain,
        "'" => TwistModifier::Inverse,
        "2" => TwistModifier::Double,
        other => return Err(NotationError::UnknownModifier(other.to_string(), face)),
    };
    Ok((face, modifier))
}

/// Parses a whitespace-separated move sequence such as `R U R' U2`.
pub fn parse_sequence(s: &str) -> Result<Vec<(Face, TwistModifier)>, NotationError> {
    s.split_whitespace().map(parse_move).collect()
}

/// Formats a move back to notation.
pub fn format_move(face: Face, modifier: TwistModifier) -> String {
    format!("{}{}", face.symbol_str(), modifier.suffix())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use proptest::sample::select;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(Ok((Face::U, TwistModifier::Plain)), parse_move("U"));
        assert_eq!(Ok((Face::U, TwistModifier::Inverse)), parse_move("U'"));
        assert_eq!(Ok((Face::U, TwistModifier::Double)), parse_move("U2"));
        assert_eq!(Ok((Face::B, TwistModifier::Inverse)), parse_move("B'"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(NotationError::Empty), parse_move(""));
        assert_eq!(Err(NotationError::UnknownFace('X')), parse_move("X"));
        assert_eq!(Err(NotationError::UnknownFace('u')), parse_move("u2"));
        assert_eq!(
            Err(NotationError::UnknownModifier("3".to_string(), Face::U)),
            parse_move("U3"),
        );
        assert_eq!(
            Err(NotationError::UnknownModifier("2'".to_string(), Face::R)),
            parse_move("R2'"),
        );
    }

    #[test]
    fn test_parse_sequence() {
        let sexy = parse_sequence("R U R' U'").unwrap();
        assert_eq!(
            vec![
                (Face::R, TwistModifier::Plain),
                (Face::U, TwistModifier::Plain),
                (Face::R, TwistModifier::Inverse),
                (Face::U, TwistModifier::Inverse),
            ],
            sexy,
        );
        assert_eq!(Vec::<(Face, TwistModifier)>::new(), parse_sequence("   ").unwrap());
        parse_sequence("R U X").unwrap_err();
    }

    proptest! {
        #[test]
        fn proptest_notation_roundtrip(
            face in select(Face::iter().collect::<Vec<_>>()),
            modifier in select(vec![
                TwistModifier::Plain,
                TwistModifier::Inverse,
                TwistModifier::Double,
            ]),
        ) {
            prop_assert_eq!(Ok((face, modifier)), parse_move(&format_move(face, modifier)));
        }
    }
}
