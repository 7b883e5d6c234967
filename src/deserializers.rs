//! Lenient deserializers for request bodies.

use serde::{Deserialize, Deserializer, de::Error};

// Web clients often send numbers taken from form inputs or object keys, so a
// numeric string or a whole float such as `2.0` is accepted wherever an
// integer is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrString {
    Integer(i64),
    Float(f64),
    String(String),
}

impl IntegerOrString {
    fn into_integer<E: Error>(self) -> Result<i64, E> {
        match self {
            IntegerOrString::Integer(value) => Ok(value),
            IntegerOrString::Float(value)
                if value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Ok(value as i64)
            }
            IntegerOrString::Float(value) => Err(E::custom(format!(
                "Wrong value {value}, expected a whole number"
            ))),
            IntegerOrString::String(value) => value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("Wrong value {value:?}, can not parse to integer"))),
        }
    }
}

/// Deserialize an integer given either as a JSON number or a numeric string.
pub fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntegerOrString::deserialize(deserializer)?.into_integer()
}

/// Like [deserialize_integer], but `null` becomes `None`.
///
/// Use together with `#[serde(default)]` so that a missing field is also `None`.
pub fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntegerOrString>::deserialize(deserializer)?
        .map(IntegerOrString::into_integer)
        .transpose()
}
