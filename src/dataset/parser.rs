//! Record parsing for the flat-text filming-locations dataset.
//!
//! A record line carries a double-quoted title, a parenthesized year
//! marker, optional curly-brace commentary, and the location text, e.g.
//!
//! ```text
//! "2011 Stanley Cup Finals" (2011)	Boston, Massachusetts, USA
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Brace commentary never nests, so one removal pass is enough. The quote
// match is non-greedy across runs: it must not span from the end of one
// quoted stretch to the start of the next.
static BRACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^{}]*\}").unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// A parsed `(year, location)` pair from one dataset line.
///
/// The year stays a string key: the dataset's year field is free text
/// and grouping is by exact match, not numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub year: String,
    pub location: String,
}

/// Errors from parsing a single candidate line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("record does not split into year and location segments")]
    MalformedRecord,

    #[error("record has an empty year or location field")]
    EmptyField,
}

/// Whether a raw line is a candidate record. Only lines opening with the
/// title marker are; everything else is skipped before parsing.
pub fn is_candidate(line: &str) -> bool {
    line.starts_with('"')
}

/// Extract the year and location from a candidate line.
///
/// Commentary and the title are stripped before parentheses become
/// separators; titles and braced notes may themselves contain parentheses
/// and would misalign the segments otherwise.
pub fn extract_fact(line: &str) -> Result<Fact, ParseError> {
    let stripped = BRACED.replace_all(line, "");
    let stripped = QUOTED.replace_all(&stripped, "");
    let separated = stripped.replace(['(', ')'], "|");

    let mut segments = separated.split('|');
    let year = segments.nth(1).ok_or(ParseError::MalformedRecord)?.trim();
    let location = segments.next().ok_or(ParseError::MalformedRecord)?.trim();

    if year.is_empty() || location.is_empty() {
        return Err(ParseError::EmptyField);
    }

    Ok(Fact {
        year: year.to_string(),
        location: location.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_record_round_trips() {
        let fact =
            extract_fact("\"2011 Stanley Cup Finals\" (2011)\tBoston, Massachusetts, USA").unwrap();
        assert_eq!(fact.year, "2011");
        assert_eq!(fact.location, "Boston, Massachusetts, USA");
    }

    #[test]
    fn braced_commentary_is_stripped() {
        let fact = extract_fact("\"Some Show\" (2011) {Pilot (#1.1)}\tKiev, Ukraine").unwrap();
        assert_eq!(fact.year, "2011");
        assert_eq!(fact.location, "Kiev, Ukraine");
    }

    #[test]
    fn parenthesized_title_text_does_not_shift_segments() {
        let fact = extract_fact("\"Movie (working title)\" (1999)\tParis, France").unwrap();
        assert_eq!(fact.year, "1999");
        assert_eq!(fact.location, "Paris, France");
    }

    #[test]
    fn two_quoted_runs_are_stripped_separately() {
        // A greedy match would swallow the year between the quoted runs.
        let fact = extract_fact("\"A\" (2005)\tLviv, Ukraine\t\"note\"").unwrap();
        assert_eq!(fact.year, "2005");
        assert_eq!(fact.location, "Lviv, Ukraine");
    }

    #[test]
    fn missing_segments_are_malformed() {
        assert_eq!(
            extract_fact("\"No year marker here\""),
            Err(ParseError::MalformedRecord)
        );
    }

    #[test]
    fn empty_location_is_rejected() {
        assert_eq!(extract_fact("\"T\" (2011)"), Err(ParseError::EmptyField));
    }

    #[test]
    fn non_numeric_year_text_is_accepted() {
        // The year field is never validated as numeric; grouping is by
        // exact string match.
        let fact = extract_fact("\"T\" (2011/I)\tSeattle, Washington, USA").unwrap();
        assert_eq!(fact.year, "2011/I");
    }

    #[test]
    fn candidate_lines_start_with_a_quote() {
        assert!(is_candidate("\"Title\" (2011)\tSomewhere"));
        assert!(!is_candidate("CRC: 0x70EE9D6C"));
        assert!(!is_candidate("  \"indented title\" (2011)\tSomewhere"));
        assert!(!is_candidate(""));
    }
}
