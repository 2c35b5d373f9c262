use std::fmt::Display;

use serde::de::Error as _;
use serde_json::Value;

/// Connection state transition delivered to `/connections`.
///
/// Only read for logging; the raw body is what gets queued.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionMsg {
    pub connection_id: String,
    pub state: String,
}

impl ConnectionMsg {
    /// Accepts a JSON object (or `null`, which yields the empty message).
    ///
    /// Keys match case-insensitively and `_` is ignored, so `ConnectionID`,
    /// `connectionid` and `connection_id` all name the same field. When a field
    /// appears more than once the last occurrence wins. `null` field values are
    /// skipped; any other non-string value is an error.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields = match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(serde_json::Error::custom(
                    "connection state event must be a JSON object",
                ))
            }
        };

        let mut connection_msg = Self::default();
        for (key, value) in fields {
            if value.is_null() {
                continue;
            }
            let slot = match key.replace('_', "").to_lowercase().as_str() {
                "connectionid" => &mut connection_msg.connection_id,
                "state" => &mut connection_msg.state,
                _ => continue,
            };
            *slot = serde_json::from_value(value)?;
        }

        Ok(connection_msg)
    }
}

impl Display for ConnectionMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connID={} state={}", self.connection_id, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_transition() {
        let msg = ConnectionMsg::parse(br#"{"ConnectionID":"abc","State":"completed"}"#).unwrap();

        assert_eq!("abc", msg.connection_id);
        assert_eq!("completed", msg.state);
        assert_eq!("connID=abc state=completed", msg.to_string());
    }

    #[test]
    fn accepts_snake_case_field_names() {
        let msg = ConnectionMsg::parse(br#"{"connection_id":"xyz","state":"requested"}"#).unwrap();

        assert_eq!("xyz", msg.connection_id);
        assert_eq!("requested", msg.state);
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let msg = ConnectionMsg::parse(br#"{"connectionid":"a","STATE":"invited"}"#).unwrap();

        assert_eq!("a", msg.connection_id);
        assert_eq!("invited", msg.state);
    }

    #[test]
    fn last_duplicate_field_wins() {
        let msg = ConnectionMsg::parse(
            br#"{"connection_id":"first","State":"completed","ConnectionID":"second"}"#,
        )
        .unwrap();

        assert_eq!("second", msg.connection_id);
    }

    #[test]
    fn null_body_and_null_fields_yield_empty_values() {
        assert_eq!(ConnectionMsg::default(), ConnectionMsg::parse(b"null").unwrap());

        let msg = ConnectionMsg::parse(br#"{"ConnectionID":null,"State":"active"}"#).unwrap();
        assert_eq!("", msg.connection_id);
        assert_eq!("active", msg.state);
    }

    #[test]
    fn non_string_field_values_are_rejected() {
        assert!(ConnectionMsg::parse(br#"{"ConnectionID":42}"#).is_err());
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let msg = ConnectionMsg::parse(br#"{"Type":"post_state","Extra":{"a":1}}"#).unwrap();

        assert_eq!(ConnectionMsg::default(), msg);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(ConnectionMsg::parse(b"not json").is_err());
        assert!(ConnectionMsg::parse(b"[1, 2]").is_err());
        assert!(ConnectionMsg::parse(br#"["abc","completed"]"#).is_err());
        assert!(ConnectionMsg::parse(br#""abc""#).is_err());
        assert!(ConnectionMsg::parse(b"").is_err());
    }
}
