use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a master-data record as returned by the API.
///
/// The backend is inconsistent between resources: some return numeric keys,
/// others string keys. Both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_number_and_string() {
        let n: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(n, RecordId::Number(5));

        let s: RecordId = serde_json::from_str("\"64f0c1\"").unwrap();
        assert_eq!(s, RecordId::Text("64f0c1".to_string()));

        assert_eq!(serde_json::to_string(&RecordId::Number(7)).unwrap(), "7");
    }
}
