//! Enclosure and overlap between keys
//!
//! A pattern key (which may hold wildcards and ranges) is walked in lockstep
//! with a candidate key:
//!
//! - a trailing `*` in the pattern matches whatever remains of the candidate,
//!   at any depth
//! - a `*` anywhere else matches exactly one candidate segment
//! - any other segment needs a case-insensitive name match, the same array
//!   status, and a capturing array specification
//!
//! The walk fails as soon as exactly one of the two keys runs out.

use super::types::Key;

impl Key {
    /// Answers if this key encloses `other`
    ///
    /// `other` falls within the definition of this key: inside its array
    /// ranges and under its wildcards. Used to check a status, command or event
    /// key against a filter, schema or access grant.
    #[must_use]
    pub fn encloses(&self, other: &Key) -> bool {
        self.captures(other, false)
    }

    /// Deprecated alias of [`Key::encloses`]
    #[deprecated(note = "use `encloses` instead")]
    #[must_use]
    pub fn is_enclosed(&self, other: &Key) -> bool {
        self.encloses(other)
    }

    /// Answers if `other` falls within or overlaps this key
    ///
    /// Identical to [`Key::encloses`] except that array ranges only need to
    /// intersect. Used to validate a query filter against a schema.
    #[must_use]
    pub fn is_overlapping(&self, other: &Key) -> bool {
        self.captures(other, true)
    }

    fn captures(&self, other: &Key, include_overlaps: bool) -> bool {
        let mut these = self.segments.iter().peekable();
        let mut others = other.segments.iter().peekable();

        while let (Some(this), Some(that)) = (these.next(), others.next()) {
            if !this.captures(that, include_overlaps) {
                return false;
            }
            if this.is_segment_wildcard() && these.peek().is_none() {
                return true;
            }
            if these.peek().is_some() != others.peek().is_some() {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> Key {
        Key::parse(text).expect("test key should parse")
    }

    #[test]
    fn mid_path_wildcard_consumes_exactly_one_level() {
        assert!(key("a.*.c").encloses(&key("a.b.c")));
        assert!(!key("a.*.c").encloses(&key("a.b.x.c")));
        assert!(!key("a.*.c").encloses(&key("a.c")));
    }

    #[test]
    fn mid_path_wildcard_skips_name_and_array_checks() {
        assert!(key("a.*.c").encloses(&key("a.b[4].c")));
    }

    #[test]
    fn longer_pattern_never_encloses_shorter_key() {
        assert!(!key("a.b.c").encloses(&key("a.b")));
        assert!(!key("a.b").encloses(&key("a.b.c")));
    }
}
