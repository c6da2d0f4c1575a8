//! Deploy manifest source codec

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::warn;

/// Where a deploy stage reads its manifest from
///
/// The set is closed on this side, but documents produced by newer service
/// versions may carry members this client does not know yet. Decoding
/// therefore never fails: anything unrecognized normalizes to `Unknown` with
/// a logged warning, and the containing document keeps decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeployManifestSource {
    #[default]
    Unknown,
    Text,
}

impl DeployManifestSource {
    /// Wire spelling of this member
    pub fn as_str(self) -> &'static str {
        match self {
            DeployManifestSource::Unknown => "UNKNOWN",
            DeployManifestSource::Text => "text",
        }
    }

    /// Pure mapping from a wire spelling
    ///
    /// `None` flags unrecognized input without deciding how to surface it;
    /// the match is case-sensitive and only the `"text"` spelling is a
    /// recognized member.
    pub fn recognize(value: &str) -> Option<Self> {
        match value {
            "text" => Some(DeployManifestSource::Text),
            _ => None,
        }
    }

    /// Lenient decode used by the document hooks
    ///
    /// Unrecognized input falls back to `Unknown` and emits a warning
    /// instead of an error.
    pub fn parse_lenient(value: &str) -> Self {
        match Self::recognize(value) {
            Some(source) => source,
            None => {
                warn!(value, "unknown deploy manifest source");
                DeployManifestSource::Unknown
            }
        }
    }
}

impl fmt::Display for DeployManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type exists for interface symmetry only; parsing never fails.
impl FromStr for DeployManifestSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl Serialize for DeployManifestSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeployManifestSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_members_round_trip() {
        for source in [DeployManifestSource::Unknown, DeployManifestSource::Text] {
            let parsed: DeployManifestSource = source.to_string().parse().unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_wire_spellings() {
        assert_eq!(DeployManifestSource::Unknown.to_string(), "UNKNOWN");
        assert_eq!(DeployManifestSource::Text.to_string(), "text");
    }

    #[test]
    fn test_unrecognized_input_falls_back() {
        assert_eq!(
            DeployManifestSource::parse_lenient("UNKNOWN"),
            DeployManifestSource::Unknown
        );
        assert_eq!(
            DeployManifestSource::parse_lenient(""),
            DeployManifestSource::Unknown
        );
        assert_eq!(
            DeployManifestSource::parse_lenient("garbage"),
            DeployManifestSource::Unknown
        );
        // case-sensitive match
        assert_eq!(
            DeployManifestSource::parse_lenient("Text"),
            DeployManifestSource::Unknown
        );
    }

    #[test]
    fn test_recognize_is_pure_and_flags_unknown() {
        assert_eq!(
            DeployManifestSource::recognize("text"),
            Some(DeployManifestSource::Text)
        );
        assert_eq!(DeployManifestSource::recognize("UNKNOWN"), None);
        assert_eq!(DeployManifestSource::recognize("garbage"), None);
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(
            DeployManifestSource::default(),
            DeployManifestSource::Unknown
        );
    }

    #[test]
    fn test_unknown_member_does_not_abort_containing_document() {
        #[derive(Debug, serde::Deserialize)]
        struct Stage {
            source: DeployManifestSource,
        }

        let stage: Stage = serde_json::from_str(r#"{"source":"artifact"}"#).unwrap();
        assert_eq!(stage.source, DeployManifestSource::Unknown);

        let stage: Stage = serde_json::from_str(r#"{"source":"text"}"#).unwrap();
        assert_eq!(stage.source, DeployManifestSource::Text);
    }

    #[test]
    fn test_serialize_as_wire_spelling() {
        let encoded = serde_json::to_string(&DeployManifestSource::Text).unwrap();
        assert_eq!(encoded, r#""text""#);
        let encoded = serde_json::to_string(&DeployManifestSource::Unknown).unwrap();
        assert_eq!(encoded, r#""UNKNOWN""#);
    }
}
