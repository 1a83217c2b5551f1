/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an id received on the wire (path segment or JSON string).
///
/// Returns `None` for anything that is not a positive decimal integer.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}

/// Serde adapter that writes a [`DbId`] as a decimal string.
///
/// Deserialization accepts both `"42"` and `42` so clients that echo a
/// numeric id back still round-trip.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tunebox_core::types::{id_string, DbId};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "id_string")]
///     id: DbId,
/// }
///
/// let json = serde_json::to_string(&Row { id: 7 }).unwrap();
/// assert_eq!(json, r#"{"id":"7"}"#);
/// ```
pub mod id_string {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    use super::DbId;

    pub fn serialize<S: Serializer>(id: &DbId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DbId, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }

    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = DbId;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an id as a decimal string or integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<DbId, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<DbId, E> {
            DbId::try_from(v).map_err(|_| E::custom("id out of range"))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<DbId, E> {
            v.trim()
                .parse::<DbId>()
                .map_err(|_| E::custom(format!("invalid id '{v}'")))
        }
    }
}
