//! The optional `%% major.minor.patch` version directive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static VERSION_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^%%\s+([0-9]+)\.([0-9]+)\.([0-9]+)").unwrap());

/// Format version declared by a document's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the version from a directive line.
    ///
    /// Returns `None` if the line is not a well-formed directive. Anything
    /// after the patch number (whitespace, a comment) is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::Version;
    ///
    /// assert_eq!(Version::parse_directive("%% 0.2.0"), Some(Version::new(0, 2, 0)));
    /// assert_eq!(Version::parse_directive("%% 1.10.3  # current"), Some(Version::new(1, 10, 3)));
    /// assert_eq!(Version::parse_directive("%% 1.2"), None);
    /// assert_eq!(Version::parse_directive("0.2.0"), None);
    /// ```
    #[must_use]
    pub fn parse_directive(line: &str) -> Option<Version> {
        let captures = VERSION_DIRECTIVE.captures(line)?;
        let part = |i: usize| captures.get(i)?.as_str().parse::<u32>().ok();
        Some(Version::new(part(1)?, part(2)?, part(3)?))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_directive() {
        assert_eq!(Version::parse_directive("%% 0.2.0"), Some(Version::new(0, 2, 0)));
        assert_eq!(
            Version::parse_directive("%%\t12.0.7\n"),
            Some(Version::new(12, 0, 7))
        );
    }

    #[test]
    fn test_rejects_malformed_directives() {
        assert_eq!(Version::parse_directive("%%0.2.0"), None);
        assert_eq!(Version::parse_directive(" %% 0.2.0"), None);
        assert_eq!(Version::parse_directive("%% v0.2.0"), None);
        assert_eq!(Version::parse_directive("%% 0.2"), None);
        assert_eq!(Version::parse_directive("%% 99999999999.0.0"), None);
        assert_eq!(Version::parse_directive("%% \u{663}.0.0"), None);
    }

    #[test]
    fn test_display_and_ordering() {
        assert_eq!(Version::new(0, 2, 0).to_string(), "v0.2.0");
        assert!(Version::new(0, 2, 0) < Version::new(0, 10, 0));
    }
}
