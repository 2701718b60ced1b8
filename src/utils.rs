/// Serde adapter for naive date-times that are known to be UTC.
pub mod utc {
  use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(date: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    ser.serialize_str(
      &date.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true),
    )
  }

  pub fn deserialize<'de, D>(de: D) -> Result<NaiveDateTime, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(de)?;
    DateTime::parse_from_rfc3339(&raw)
      .map(|date| date.with_timezone(&Utc).naive_utc())
      .map_err(serde::de::Error::custom)
  }
}
