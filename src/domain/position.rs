use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque key of one land unit in the remote store.
///
/// The store hands ids back either as text or as JSON numbers; both are kept
/// as their textual form so they can be echoed into query filters unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionId(String);

impl PositionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PositionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PositionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for PositionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl<'de> Deserialize<'de> for PositionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Integer(n) => Self(n.to_string()),
        })
    }
}

impl Serialize for PositionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_id_from_json_number_and_text() {
        let ids: Vec<PositionId> = serde_json::from_str(r#"[42, "P-7"]"#).unwrap();
        assert_eq!(ids[0], PositionId::from(42));
        assert_eq!(ids[1].as_str(), "P-7");
    }

    #[test]
    fn test_position_id_display() {
        assert_eq!(PositionId::from(17).to_string(), "17");
    }
}
