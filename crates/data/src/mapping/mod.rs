//! Mappings between the wire, storage and domain character shapes
//!
//! Both directions are infallible: malformed URL-embedded ids collapse
//! to the [`UNKNOWN_ID`] sentinel on the way in, and unrecognized enum
//! strings rehydrate as `Unknown` on the way out.

mod character;

use portaldex_domain::UNKNOWN_ID;

/// Extract the identifier a resource URL carries as its last path
/// segment, e.g. `".../location/20"` yields `20`.
///
/// Empty URLs, non-numeric tails and negative numbers all yield
/// [`UNKNOWN_ID`]; a reference without a usable id is an expected shape,
/// not an error.
pub fn parse_trailing_id(url: &str) -> i32 {
    url.rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<i32>().ok())
        .filter(|id| *id >= 0)
        .unwrap_or(UNKNOWN_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_trailing_segment_as_id() {
        assert_eq!(
            parse_trailing_id("https://api.portaldex.io/api/location/20"),
            20
        );
        assert_eq!(parse_trailing_id("location/1"), 1);
    }

    #[test]
    fn empty_url_yields_the_sentinel() {
        assert_eq!(parse_trailing_id(""), UNKNOWN_ID);
    }

    #[test]
    fn non_numeric_tail_yields_the_sentinel() {
        assert_eq!(
            parse_trailing_id("https://api.portaldex.io/api/location/"),
            UNKNOWN_ID
        );
        assert_eq!(
            parse_trailing_id("https://api.portaldex.io/api/location/abc"),
            UNKNOWN_ID
        );
    }

    #[test]
    fn url_without_slashes_parses_as_a_whole() {
        // rsplit always yields at least the full input.
        assert_eq!(parse_trailing_id("12"), 12);
        assert_eq!(parse_trailing_id("nope"), UNKNOWN_ID);
    }

    #[test]
    fn leading_zeroes_parse_numerically() {
        assert_eq!(parse_trailing_id("location/007"), 7);
    }

    #[test]
    fn negative_tail_yields_the_sentinel() {
        // A parsed id must never collide with the sentinel's value space.
        assert_eq!(parse_trailing_id("location/-1"), UNKNOWN_ID);
        assert_eq!(parse_trailing_id("location/-42"), UNKNOWN_ID);
    }
}
