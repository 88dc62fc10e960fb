//! Serde mapping for `std::time::Duration` using humantime strings (`"30s"`, `"1m 5s"`).
//!
//! All `Duration` fields of `*Config` structs go through this module:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use std::time::Duration;
//!
//! #[derive(Serialize, Deserialize)]
//! struct ServerConfig {
//!     #[serde(with = "fedcat_utils::humantime_serde")]
//!     request_timeout: Duration,
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserializer, Serializer, de};

struct DurationVisitor;

impl de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration such as \"30s\" or \"1m 30s\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Duration, E>
    where
        E: de::Error,
    {
        humantime::parse_duration(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Deserializes a humantime string into a `Duration`.
///
/// # Errors
/// Returns a deserialization error when the value is not a string or not a valid duration.
pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    d.deserialize_str(DurationVisitor)
}

/// Serializes a `Duration` as a humantime string.
///
/// # Errors
/// Propagates serializer errors.
pub fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&humantime::format_duration(*d).to_string())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Serialize, Deserialize)]
    struct Foo {
        #[serde(with = "super")]
        timeout: Duration,
    }

    #[test]
    fn parses_and_formats() {
        let foo: Foo = serde_json::from_str(r#"{"timeout": "10m 10s"}"#).unwrap();
        assert_eq!(foo.timeout, Duration::from_secs(610));
        assert_eq!(
            serde_json::to_string(&foo).unwrap(),
            r#"{"timeout":"10m 10s"}"#
        );
    }

    #[test]
    fn rejects_garbage() {
        let res = serde_json::from_str::<Foo>(r#"{"timeout": "soon"}"#);
        assert!(res.is_err());
    }
}
