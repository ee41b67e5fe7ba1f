//! Version parsing and ordering for DESCRIPTION versions.
//!
//! R package versions are compared segment by segment:
//! - Segments are split on `.` and `-`
//! - Every segment must be a non-negative integer
//! - Segments compare numerically, so `1.10.0` is newer than `1.2.0`
//! - A missing version ranks below every present version
//!
//! Every "newest wins" and "already covered" decision in biospack goes
//! through [`compare`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use biospack_util::errors::BiospackError;

/// A parsed, comparable version.
///
/// `None` is the absent version. The derived ordering puts it below every
/// `Some`, and compares present versions as integer tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(Option<Vec<u64>>);

impl VersionKey {
    /// The key of a missing version.
    pub const ABSENT: VersionKey = VersionKey(None);

    /// Parse an optional version string.
    ///
    /// `None`, the empty string and all-whitespace strings are absent.
    pub fn parse(version: Option<&str>) -> Result<Self, BiospackError> {
        let Some(raw) = version.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::ABSENT);
        };

        let mut segments = Vec::new();
        for segment in raw.split(|c: char| c == '.' || c == '-') {
            segments.push(parse_segment(raw, segment)?);
        }
        Ok(Self(Some(segments)))
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The integer segments, empty for the absent version.
    pub fn segments(&self) -> &[u64] {
        self.0.as_deref().unwrap_or(&[])
    }
}

fn parse_segment(version: &str, segment: &str) -> Result<u64, BiospackError> {
    let malformed = || BiospackError::MalformedVersion {
        version: version.to_string(),
        segment: segment.to_string(),
    };
    // `u64::from_str` accepts a leading `+`, which is not a version digit.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    segment.parse::<u64>().map_err(|_| malformed())
}

impl FromStr for VersionKey {
    type Err = BiospackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("*"),
            Some(segments) => {
                let parts: Vec<String> = segments.iter().map(u64::to_string).collect();
                f.write_str(&parts.join("."))
            }
        }
    }
}

/// Compare two optional version strings.
pub fn compare(a: Option<&str>, b: Option<&str>) -> Result<Ordering, BiospackError> {
    Ok(VersionKey::parse(a)?.cmp(&VersionKey::parse(b)?))
}

/// Return whichever argument ranks newest; ties go to `a`.
pub fn newest<'a>(
    a: Option<&'a str>,
    b: Option<&'a str>,
) -> Result<Option<&'a str>, BiospackError> {
    match compare(a, b)? {
        Ordering::Less => Ok(b),
        Ordering::Equal | Ordering::Greater => Ok(a),
    }
}
