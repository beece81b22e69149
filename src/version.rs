use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use semver::Version;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid package manager version: '{input}'")]
    InvalidFormat { input: String },
}

/// A package manager version as it was found, e.g. `3.2.1` or just `8`.
///
/// The original text is kept for the corepack invocation; missing minor/patch
/// components count as `0` when comparing.
#[derive(Debug, Clone)]
pub struct ManagerVersion {
    raw: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ManagerVersion {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let raw = input.trim();
        let invalid = || VersionError::InvalidFormat { input: input.to_string() };

        let components = raw.split('.').count();
        if raw.is_empty() || components > 3 {
            return Err(invalid());
        }
        let mut padded = raw.to_string();
        for _ in components..3 {
            padded.push_str(".0");
        }
        let version = Version::parse(&padded).map_err(|_| invalid())?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(invalid());
        }

        Ok(ManagerVersion {
            raw: raw.to_string(),
            major: version.major,
            minor: version.minor,
            patch: version.patch,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for ManagerVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ManagerVersion::parse(s)
    }
}

impl fmt::Display for ManagerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for ManagerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for ManagerVersion {}

impl PartialOrd for ManagerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ManagerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = ManagerVersion::parse("3.2.1").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 2, 1));
        assert_eq!(v.to_string(), "3.2.1");
    }

    #[test]
    fn test_parse_major_only_keeps_text() {
        let v = ManagerVersion::parse("8").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (8, 0, 0));
        assert_eq!(v.as_str(), "8");
        assert_eq!(v, ManagerVersion::parse("8.0.0").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ManagerVersion::parse("").is_err());
        assert!(ManagerVersion::parse("berry").is_err());
        assert!(ManagerVersion::parse("1.2.3.4").is_err());
        assert!(ManagerVersion::parse("1.2.3-rc.1").is_err());
    }

    #[test]
    fn test_ordering() {
        let six = ManagerVersion::parse("6.5.0").unwrap();
        let seven = ManagerVersion::parse("7").unwrap();
        let seven_one = ManagerVersion::parse("7.1.0").unwrap();
        assert!(six < seven);
        assert!(seven < seven_one);
        assert_eq!(six.cmp(&six.clone()), Ordering::Equal);
    }
}
