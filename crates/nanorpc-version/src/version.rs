//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Library version descriptor and handshake helpers."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A `major.minor.patch` release triple.
///
/// Serialized as its display string, e.g. `"1.1.1"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    /// Construct a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Major component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component.
    #[must_use]
    pub const fn patch(&self) -> u32 {
        self.patch
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let &Self {
            major,
            minor,
            patch,
        } = self;
        write!(f, "{major}.{minor}.{patch}")
    }
}

/// Failure to parse a `major.minor.patch` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    /// Input was empty or whitespace only.
    #[error("version string is empty")]
    Empty,
    /// Input did not have exactly three dot-separated components.
    #[error("expected major.minor.patch, found {found} component(s) in {input:?}")]
    ComponentCount {
        /// Offending input.
        input: String,
        /// Number of components found.
        found: usize,
    },
    /// A component was empty, not canonical decimal digits, or larger than
    /// `u32::MAX`.
    #[error(
        "invalid {component} component {value:?}: expected an integer in 0..=4294967295 \
         without leading zeros"
    )]
    InvalidComponent {
        /// Which component failed (`major`, `minor`, `patch`).
        component: &'static str,
        /// Raw component text.
        value: String,
    },
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        let parts: Vec<&str> = input.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(ParseVersionError::ComponentCount {
                input: input.to_owned(),
                found: parts.len(),
            });
        };
        Ok(Self::new(
            parse_component("major", major)?,
            parse_component("minor", minor)?,
            parse_component("patch", patch)?,
        ))
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u32, ParseVersionError> {
    let invalid = || ParseVersionError::InvalidComponent {
        component,
        value: value.to_owned(),
    };
    // `u32::from_str` accepts a leading '+' and leading zeros.
    let canonical = match value.as_bytes() {
        [] => false,
        [b'0', _, ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    };
    if !canonical {
        return Err(invalid());
    }
    value.parse::<u32>().map_err(|_| invalid())
}

/// Failure converting a [`semver::Version`] into a release triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemverConversionError {
    /// The semver value carried a pre-release or build suffix.
    #[error("{0} carries pre-release or build metadata")]
    Qualified(semver::Version),
    /// A component did not fit in `u32`.
    #[error("{0} has a component larger than u32::MAX")]
    OutOfRange(semver::Version),
}

impl From<Version> for semver::Version {
    fn from(value: Version) -> Self {
        semver::Version::new(
            u64::from(value.major),
            u64::from(value.minor),
            u64::from(value.patch),
        )
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = SemverConversionError;

    fn try_from(value: &semver::Version) -> Result<Self, Self::Error> {
        if !value.pre.is_empty() || !value.build.is_empty() {
            return Err(SemverConversionError::Qualified(value.clone()));
        }
        let narrow = |n: u64| {
            u32::try_from(n).map_err(|_| SemverConversionError::OutOfRange(value.clone()))
        };
        Ok(Self::new(
            narrow(value.major)?,
            narrow(value.minor)?,
            narrow(value.patch)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_dotted_triple() {
        assert_eq!(Version::new(3, 0, 12).to_string(), "3.0.12");
    }

    #[test]
    fn parses_canonical_form() {
        let parsed: Version = " 2.10.0 ".parse().expect("valid version");
        assert_eq!(parsed, Version::new(2, 10, 0));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Version>(), Err(ParseVersionError::Empty));
        assert!(matches!(
            "1.1".parse::<Version>(),
            Err(ParseVersionError::ComponentCount { found: 2, .. })
        ));
        assert!(matches!(
            "1.1.1.1".parse::<Version>(),
            Err(ParseVersionError::ComponentCount { found: 4, .. })
        ));
        for bad in [
            "v1.1.1",
            "1..1",
            "1.+1.1",
            "1.1.-1",
            "1.1.99999999999",
            "01.1.1",
            "1.00.1",
            "1.1.007",
        ] {
            assert!(
                matches!(
                    bad.parse::<Version>(),
                    Err(ParseVersionError::InvalidComponent { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn zero_components_are_canonical() {
        assert_eq!("0.0.0".parse::<Version>(), Ok(Version::new(0, 0, 0)));
        assert_eq!("10.0.100".parse::<Version>(), Ok(Version::new(10, 0, 100)));
    }

    #[test]
    fn parse_then_display_preserves_text() {
        for text in ["1.1.1", "0.10.0", "4294967295.0.7"] {
            let parsed: Version = text.parse().expect("canonical version");
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn error_names_the_component() {
        let err = "1.x.0".parse::<Version>().expect_err("minor is not numeric");
        assert!(err.to_string().contains("minor"));
        assert!(err.to_string().contains("\"x\""));
    }

    #[test]
    fn orders_by_major_then_minor_then_patch() {
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::new(1, 1, 2) > Version::new(1, 1, 1));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Version::new(1, 4, 2)).expect("serialize");
        assert_eq!(json, "\"1.4.2\"");
        let back: Version = serde_json::from_str("\"0.9.3\"").expect("deserialize");
        assert_eq!(back, Version::new(0, 9, 3));
        assert!(serde_json::from_str::<Version>("\"nope\"").is_err());
    }

    #[test]
    fn converts_with_semver() {
        let sv: semver::Version = Version::new(1, 1, 1).into();
        assert_eq!(sv, semver::Version::new(1, 1, 1));
        assert_eq!(Version::try_from(&sv), Ok(Version::new(1, 1, 1)));

        let pre = semver::Version::parse("1.2.0-rc.1").expect("valid semver");
        assert!(matches!(
            Version::try_from(&pre),
            Err(SemverConversionError::Qualified(_))
        ));
        let huge = semver::Version::new(u64::from(u32::MAX) + 1, 0, 0);
        assert!(matches!(
            Version::try_from(&huge),
            Err(SemverConversionError::OutOfRange(_))
        ));
    }
}
