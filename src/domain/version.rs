use crate::error::{ReleaseCheckError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// Exact shape of a release version: three dot-separated ASCII digit runs.
const VERSION_PATTERN: &str = r"^([0-9]+)\.([0-9]+)\.([0-9]+)$";

/// Shapes accepted while a version is still being typed ("1", "1.", "1.2.").
const PARTIAL_VERSION_PATTERN: &str = r"^[0-9]+\.?[0-9]*\.?[0-9]*$";

/// Release version in `MAJOR.MINOR.PATCH` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a release version such as "1.2.3".
    ///
    /// No prefix, suffix or whitespace is tolerated, and a component may only
    /// start with `0` when it is exactly `"0"`. Leading zeros are rejected
    /// rather than stripped so a parsed version always prints back as the
    /// original text.
    pub fn parse(text: &str) -> Result<Self> {
        let re = Regex::new(VERSION_PATTERN)
            .map_err(|e| ReleaseCheckError::version(format!("Invalid version pattern: {}", e)))?;

        let captures = re.captures(text).ok_or_else(|| {
            ReleaseCheckError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u64> {
            let raw = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            parse_component(raw, name, text)
        };

        Ok(Version::new(
            component(1, "major")?,
            component(2, "minor")?,
            component(3, "patch")?,
        ))
    }

    /// Components ordered most significant first
    pub fn components(&self) -> [u64; 3] {
        [self.major, self.minor, self.patch]
    }
}

fn parse_component(raw: &str, name: &str, text: &str) -> Result<u64> {
    if raw.len() > 1 && raw.starts_with('0') {
        return Err(ReleaseCheckError::version(format!(
            "Invalid {} version in '{}': leading zero in '{}'",
            name, text, raw
        )));
    }

    raw.parse::<u64>().map_err(|_| {
        ReleaseCheckError::version(format!(
            "Invalid {} version in '{}': '{}' is out of range",
            name, text, raw
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = ReleaseCheckError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components(), &other.components())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two versions, most significant component first
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Compare numeric component lists of possibly different lengths.
///
/// The shorter list is padded with zeros, so `[1, 2]` equals `[1, 2, 0]`.
pub fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());

    for idx in 0..len {
        let a_num = a.get(idx).copied().unwrap_or(0);
        let b_num = b.get(idx).copied().unwrap_or(0);
        match a_num.cmp(&b_num) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Compare raw dotted numeric strings ("1.2", "1.2.0.4") with zero padding.
///
/// Returns `None` when either side has a non-numeric component.
pub fn compare_dotted(a: &str, b: &str) -> Option<Ordering> {
    let parse = |s: &str| -> Option<Vec<u64>> {
        s.split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()
    };

    Some(compare_components(&parse(a)?, &parse(b)?))
}

/// Sort versions ascending. Equal versions keep their encounter order.
pub fn sort_ascending(versions: impl IntoIterator<Item = Version>) -> Vec<Version> {
    let mut sorted: Vec<Version> = versions.into_iter().collect();
    sorted.sort();
    sorted
}

/// Check whether `text` is a complete version or could still become one
/// while being typed.
pub fn is_partial_version(text: &str) -> bool {
    Regex::new(PARTIAL_VERSION_PATTERN)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_zero_components() {
        assert_eq!(Version::parse("0.0.0").unwrap(), Version::new(0, 0, 0));
        assert_eq!(Version::parse("10.0.20").unwrap(), Version::new(10, 0, 20));
    }

    #[test]
    fn test_version_parse_rejects_prefix() {
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("V1.2.3").is_err());
        assert!(Version::parse(" 1.2.3").is_err());
        assert!(Version::parse("1.2.3\n").is_err());
    }

    #[test]
    fn test_version_parse_invalid_shapes() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("-1.2.3").is_err());
        assert!(Version::parse("1..3").is_err());
    }

    #[test]
    fn test_version_parse_leading_zero() {
        let err = Version::parse("01.2.3").unwrap_err();
        assert!(err.to_string().contains("leading zero"));
        assert!(Version::parse("1.02.3").is_err());
        assert!(Version::parse("1.2.00").is_err());
    }

    #[test]
    fn test_version_parse_overflow() {
        let err = Version::parse("99999999999999999999.0.0").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_version_parse_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not version digits
        assert!(Version::parse("١.٢.٣").is_err());
    }

    #[test]
    fn test_version_display_round_trip() {
        for text in ["0.0.0", "1.2.3", "10.20.30"] {
            assert_eq!(Version::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "4.5.6".parse().unwrap();
        assert_eq!(v, Version::new(4, 5, 6));
    }

    #[test]
    fn test_compare_numeric_not_lexical() {
        let a = Version::new(1, 10, 0);
        let b = Version::new(1, 9, 0);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_components_pads_with_zero() {
        assert_eq!(compare_components(&[1, 2], &[1, 2, 0]), Ordering::Equal);
        assert_eq!(compare_components(&[1, 2], &[1, 2, 1]), Ordering::Less);
        assert_eq!(compare_components(&[2], &[1, 9, 9]), Ordering::Greater);
    }

    #[test]
    fn test_compare_dotted() {
        assert_eq!(compare_dotted("1.2", "1.2.0"), Some(Ordering::Equal));
        assert_eq!(compare_dotted("1.2.0.1", "1.2.0"), Some(Ordering::Greater));
        assert_eq!(compare_dotted("1.a", "1.0"), None);
    }

    #[test]
    fn test_sort_ascending() {
        let sorted = sort_ascending(vec![
            Version::new(1, 10, 0),
            Version::new(0, 9, 9),
            Version::new(1, 2, 0),
        ]);
        assert_eq!(
            sorted,
            vec![
                Version::new(0, 9, 9),
                Version::new(1, 2, 0),
                Version::new(1, 10, 0)
            ]
        );
    }

    #[test]
    fn test_sort_ascending_with_ties() {
        let sorted = sort_ascending(vec![
            Version::new(1, 1, 0),
            Version::new(1, 0, 0),
            Version::new(1, 1, 0),
        ]);
        assert_eq!(
            sorted,
            vec![Version::new(1, 0, 0), Version::new(1, 1, 0), Version::new(1, 1, 0)]
        );
    }

    #[test]
    fn test_is_partial_version() {
        assert!(is_partial_version("1"));
        assert!(is_partial_version("1."));
        assert!(is_partial_version("1.2"));
        assert!(is_partial_version("1.2."));
        assert!(is_partial_version("1.2.3"));
        assert!(!is_partial_version(""));
        assert!(!is_partial_version("."));
        assert!(!is_partial_version("1.2.3.4"));
        assert!(!is_partial_version("v1"));
    }
}
