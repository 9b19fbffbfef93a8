//! Reads the board size the way the command-line tool receives it: a single integer on
//! standard input. Only the first whitespace-separated token is looked at.

use crate::queens::error::{QueensError, Result};
use std::io::Read;

/// Parses the first whitespace-separated token of `input` as a board size.
///
/// Negative and zero sizes are accepted here; the solver answers them with an empty set.
///
/// # Errors
///
/// `MissingBoardSize` if `input` is blank, `InvalidBoardSize` if the token is not an integer.
pub fn parse_board_size(input: &str) -> Result<i64> {
    let token = input
        .split_whitespace()
        .next()
        .ok_or(QueensError::MissingBoardSize)?;

    token
        .parse::<i64>()
        .map_err(|source| QueensError::InvalidBoardSize {
            input: token.to_string(),
            source,
        })
}

/// Reads `reader` to the end and parses a board size from it.
///
/// # Errors
///
/// `Io` if reading fails, otherwise the errors of `parse_board_size`.
pub fn read_board_size<R: Read>(mut reader: R) -> Result<i64> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    log::debug!("read {} bytes of input", buffer.len());
    parse_board_size(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_board_size("8").unwrap(), 8);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(parse_board_size("  \n\t 12 \n").unwrap(), 12);
    }

    #[test]
    fn test_parse_negative_and_zero() {
        assert_eq!(parse_board_size("-3").unwrap(), -3);
        assert_eq!(parse_board_size("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        assert_eq!(parse_board_size("4 5 six").unwrap(), 4);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_board_size("   \n"),
            Err(QueensError::MissingBoardSize)
        ));
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = parse_board_size("eight").unwrap_err();
        match err {
            QueensError::InvalidBoardSize { input, .. } => assert_eq!(input, "eight"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_from_reader() {
        let reader = Cursor::new("10\n");
        assert_eq!(read_board_size(reader).unwrap(), 10);
    }

    #[test]
    fn test_read_empty_reader() {
        let reader = Cursor::new("");
        assert!(matches!(
            read_board_size(reader),
            Err(QueensError::MissingBoardSize)
        ));
    }
}
