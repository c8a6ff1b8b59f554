//! ---
//! nrpc_section: "01-version-descriptor"
//! nrpc_subsection: "module"
//! nrpc_type: "source"
//! nrpc_scope: "code"
//! nrpc_description: "Library version descriptor and handshake helpers."
//! nrpc_version: "v1.1.1"
//! nrpc_owner: "tbd"
//! ---
//! Compile-time release identity of the library.
//!
//! Every value here comes from the single [`define_library_version!`] call
//! below, so the numbers and the string cannot drift apart.

use crate::version::Version;

/// Emits the numeric constants and their `major.minor.patch` string from one
/// set of literals. Bump the release here only.
macro_rules! define_library_version {
    ($major:literal, $minor:literal, $patch:literal) => {
        /// Major component of the library release.
        pub const MAJOR: u32 = $major;
        /// Minor component of the library release.
        pub const MINOR: u32 = $minor;
        /// Patch component of the library release.
        pub const PATCH: u32 = $patch;
        /// Canonical `major.minor.patch` form of the library release.
        pub const VERSION_STRING: &str = concat!($major, ".", $minor, ".", $patch);
    };
}

define_library_version!(1, 1, 1);

/// The library release as a [`Version`] value.
pub const LIBRARY: Version = Version::new(MAJOR, MINOR, PATCH);

/// Read-only accessors for the library release.
///
/// Zero-sized; every accessor is a `const fn` returning a constant, so callers
/// on any thread see the same values without synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryVersion;

impl LibraryVersion {
    /// Major release number.
    #[must_use]
    pub const fn major() -> u32 {
        MAJOR
    }

    /// Minor release number.
    #[must_use]
    pub const fn minor() -> u32 {
        MINOR
    }

    /// Patch release number.
    #[must_use]
    pub const fn patch() -> u32 {
        PATCH
    }

    /// Canonical `major.minor.patch` string.
    #[must_use]
    pub const fn as_str() -> &'static str {
        VERSION_STRING
    }

    /// The release as a comparable value.
    #[must_use]
    pub const fn version() -> Version {
        LIBRARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_one_one_one() {
        assert_eq!(LibraryVersion::major(), 1);
        assert_eq!(LibraryVersion::minor(), 1);
        assert_eq!(LibraryVersion::patch(), 1);
        assert_eq!(LibraryVersion::as_str(), "1.1.1");
    }

    #[test]
    fn string_matches_numeric_components() {
        let expected = format!(
            "{}.{}.{}",
            LibraryVersion::major(),
            LibraryVersion::minor(),
            LibraryVersion::patch()
        );
        assert_eq!(LibraryVersion::as_str(), expected);
        assert_eq!(LIBRARY.to_string(), VERSION_STRING);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = (
            LibraryVersion::patch(),
            LibraryVersion::as_str(),
            LibraryVersion::major(),
            LibraryVersion::minor(),
        );
        for _ in 0..64 {
            let again = (
                LibraryVersion::patch(),
                LibraryVersion::as_str(),
                LibraryVersion::major(),
                LibraryVersion::minor(),
            );
            assert_eq!(first, again);
        }
    }

    #[test]
    fn accessors_are_usable_in_const_context() {
        const RELEASE: (u32, u32, u32) = (
            LibraryVersion::major(),
            LibraryVersion::minor(),
            LibraryVersion::patch(),
        );
        assert_eq!(RELEASE, (MAJOR, MINOR, PATCH));
        assert_eq!(LibraryVersion::version(), LIBRARY);
    }

    #[test]
    fn concurrent_readers_agree() {
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    scope.spawn(|| {
                        (
                            LibraryVersion::major(),
                            LibraryVersion::minor(),
                            LibraryVersion::patch(),
                            LibraryVersion::as_str(),
                        )
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("reader thread panicked"))
                .collect()
        });
        assert_eq!(results.len(), 16);
        assert!(results.iter().all(|r| *r == (1, 1, 1, "1.1.1")));
    }
}
