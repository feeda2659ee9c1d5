//! Parsing of the map search box.
//!
//! A search string is classified as one of:
//!
//! * a teleport command, `... tp <letters><row> <x> <y> ...` (the rightmost
//!   `tp ` that is followed by a well-formed address wins);
//! * a coordinate pair, the first `<num><separator><num>` where a number is
//!   an optional `-`, one or two digits and an optional one- or two-digit
//!   fraction, and the separator is any run of characters other than digits
//!   and `-`;
//! * free text, used by the caller to filter resources and animals.
//!
//! Parsing works on the lowercased, trimmed input.

use tracing::debug;

use crate::map::GpsPoint;

/// A classified search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Blank input.
    Empty,
    /// A teleport command naming a cell and in-cell offsets.
    Teleport {
        /// Column letters as typed (lowercased); only single letters resolve.
        column: String,
        /// One-based row; saturates at `u32::MAX` for oversized input.
        row: u32,
        /// Horizontal in-cell offset.
        local_x: f64,
        /// Vertical in-cell offset.
        local_y: f64,
    },
    /// A gameplay coordinate pair.
    Coordinates(GpsPoint),
    /// Anything else.
    Text(String),
}

impl SearchQuery {
    /// Classifies a search string.
    pub fn parse(input: &str) -> Self {
        let search = input.trim().to_lowercase();
        if search.is_empty() {
            return SearchQuery::Empty;
        }

        if let Some(query) = parse_teleport(&search) {
            debug!(?query, "Search parsed as teleport command");
            return query;
        }

        if let Some(point) = parse_coordinates(&search) {
            debug!(x = point.x, y = point.y, "Search parsed as coordinates");
            return SearchQuery::Coordinates(point);
        }

        debug!(%search, "Search treated as text");
        SearchQuery::Text(search)
    }
}

fn parse_teleport(search: &str) -> Option<SearchQuery> {
    search
        .rmatch_indices("tp ")
        .find_map(|(i, _)| parse_teleport_args(&search[i + 3..]))
}

/// Parses `<letters><digits> <int> <int>`; anything may follow.
///
/// Column characters are ASCII letters only. Punctuation such as `_` or `^`
/// is rejected here rather than left for `locate` to discard.
fn parse_teleport_args(args: &str) -> Option<SearchQuery> {
    let b = args.as_bytes();
    let letters_end = run_end(b, 0, |c| c.is_ascii_alphabetic());
    let row_end = run_end(b, letters_end, |c| c.is_ascii_digit());
    if letters_end == 0 || row_end == letters_end {
        return None;
    }

    let x_start = expect_space(b, row_end)?;
    let x_end = signed_int_end(b, x_start)?;
    let y_start = expect_space(b, x_end)?;
    let y_end = signed_int_end(b, y_start)?;

    Some(SearchQuery::Teleport {
        column: args[..letters_end].to_string(),
        row: args[letters_end..row_end].parse().unwrap_or(u32::MAX),
        local_x: args[x_start..x_end].parse().ok()?,
        local_y: args[y_start..y_end].parse().ok()?,
    })
}

fn parse_coordinates(search: &str) -> Option<GpsPoint> {
    let b = search.as_bytes();
    (0..b.len()).find_map(|start| {
        number_ends(b, start).into_iter().find_map(|first_end| {
            let second_start = run_end(b, first_end, |c| !c.is_ascii_digit() && c != b'-');
            let second_end = *number_ends(b, second_start).first()?;

            let x = search[start..first_end].parse().ok()?;
            let y = search[second_start..second_end].parse().ok()?;
            Some(GpsPoint::new(x, y))
        })
    })
}

/// Candidate end positions of a number starting at `pos`, longest first.
fn number_ends(b: &[u8], pos: usize) -> Vec<usize> {
    let digit = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);

    let p = if b.get(pos) == Some(&b'-') { pos + 1 } else { pos };
    let int_ends = match (digit(p), digit(p + 1)) {
        (true, true) => vec![p + 2, p + 1],
        (true, false) => vec![p + 1],
        _ => Vec::new(),
    };

    let mut ends = Vec::new();
    for end in int_ends {
        if b.get(end) == Some(&b'.') && digit(end + 1) {
            if digit(end + 2) {
                ends.push(end + 3);
            }
            ends.push(end + 2);
        }
        ends.push(end);
    }
    ends
}

fn run_end(b: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    b[pos.min(b.len())..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(b.len(), |n| pos + n)
}

fn expect_space(b: &[u8], pos: usize) -> Option<usize> {
    (b.get(pos) == Some(&b' ')).then_some(pos + 1)
}

fn signed_int_end(b: &[u8], pos: usize) -> Option<usize> {
    let digits_start = if b.get(pos) == Some(&b'-') { pos + 1 } else { pos };
    let end = run_end(b, digits_start, |c| c.is_ascii_digit());
    (end > digits_start).then_some(end)
}
