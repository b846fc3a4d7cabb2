//! Serde helpers for record ids
//!
//! Record ids are exposed as `"table:key"` strings. Deserialization accepts
//! both that string form (API JSON) and SurrealDB's native form (query results).

use serde::{Deserialize, Deserializer, Serializer};
use surrealdb::RecordId;

/// Accepts a `"table:key"` string or a native RecordId
#[derive(Debug, Clone)]
struct FlexibleRecordId(RecordId);

impl<'de> Deserialize<'de> for FlexibleRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string 'table:key' or RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(FlexibleRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid RecordId: {}", value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FlexibleRecordId)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// RecordId as `"table:key"`
pub mod record_id {
    use super::*;

    pub fn serialize<S>(id: &RecordId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexibleRecordId::deserialize(d).map(|f| f.0)
    }
}

/// Option<RecordId> as `"table:key"` or null
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.serialize_some(&id.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<FlexibleRecordId>::deserialize(d).map(|opt| opt.map(|f| f.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "record_id")]
        id: RecordId,
        #[serde(default, with = "option_record_id")]
        parent: Option<RecordId>,
    }

    #[test]
    fn test_string_round_trip() {
        let holder: Holder = serde_json::from_str(r#"{"id":"employee:anna"}"#).unwrap();
        assert_eq!(holder.id, RecordId::from_table_key("employee", "anna"));
        assert!(holder.parent.is_none());

        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json["id"], "employee:anna");
        assert!(json["parent"].is_null());
    }

    #[test]
    fn test_rejects_bare_key() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"id":"anna"}"#);
        assert!(result.is_err());
    }
}
