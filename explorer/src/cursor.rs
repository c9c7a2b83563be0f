//! Cursor-based pagination over the block sequence.
//!
//! A cursor is the plain decimal text of a height value: the height of the
//! last item returned, used as an exclusive upper bound for the next page.
//! No other cursor formats are valid input.

use crate::ExplorerError;

/// Decode a cursor into a height boundary. An empty cursor means "start
/// from the most recent block"; anything that is not plain decimal text is
/// a caller error.
pub fn parse(cursor: &str) -> Result<Option<u64>, ExplorerError> {
    if cursor.is_empty() {
        return Ok(None);
    }
    cursor
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ExplorerError::InvalidCursor(cursor.to_string()))
}

/// Encode a height as a cursor.
pub fn encode(height: u64) -> String {
    height.to_string()
}

/// Compute the next-page cursor. Set only when the page came back exactly
/// full (`returned == limit` with `limit > 0`); a short page, or an
/// unlimited request, signals the end of the sequence with `None`.
pub fn next(returned: usize, limit: i64, last_height: Option<u64>) -> Option<String> {
    if limit > 0 && returned as i64 == limit {
        last_height.map(encode)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor_means_start() {
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn decimal_cursor_roundtrip() {
        for height in [0u64, 1, 42, 100, 999, 123456789] {
            let encoded = encode(height);
            assert_eq!(parse(&encoded).unwrap(), Some(height));
        }
    }

    #[test]
    fn malformed_cursor_rejected() {
        for bad in ["abc", "-1", "1.5", "0x10", " 7", "7 "] {
            let err = parse(bad).unwrap_err();
            assert!(matches!(err, ExplorerError::InvalidCursor(_)), "{bad}");
        }
    }

    #[test]
    fn next_cursor_only_on_exactly_full_page() {
        assert_eq!(next(3, 3, Some(97)), Some("97".to_string()));
        assert_eq!(next(2, 3, Some(97)), None);
        assert_eq!(next(0, 3, None), None);
    }

    #[test]
    fn unlimited_request_never_yields_cursor() {
        assert_eq!(next(50, 0, Some(1)), None);
        assert_eq!(next(50, -1, Some(1)), None);
    }
}
