//! Build entity - tracked build metadata and its lifecycle status

use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils;

/// Deployment target a build was made for
#[derive(
  Clone,
  Copy,
  Debug,
  PartialEq,
  Eq,
  EnumIter,
  DeriveActiveEnum,
  Serialize,
  Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
  #[sea_orm(string_value = "development")]
  Development,
  #[sea_orm(string_value = "staging")]
  Staging,
  #[sea_orm(string_value = "production")]
  Production,
}

impl BuildType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Development => "development",
      Self::Staging => "staging",
      Self::Production => "production",
    }
  }
}

impl FromStr for BuildType {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "staging" => Ok(Self::Staging),
      "production" => Ok(Self::Production),
      _ => Err(()),
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Only mutable part of a build; any value may follow any other
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  PartialEq,
  Eq,
  EnumIter,
  DeriveActiveEnum,
  Serialize,
  Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Status {
  #[default]
  #[sea_orm(string_value = "In Progress")]
  #[serde(rename = "In Progress")]
  InProgress,
  #[sea_orm(string_value = "Complete")]
  Complete,
  #[sea_orm(string_value = "Failed")]
  Failed,
}

impl Status {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::InProgress => "In Progress",
      Self::Complete => "Complete",
      Self::Failed => "Failed",
    }
  }
}

impl FromStr for Status {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "In Progress" => Ok(Self::InProgress),
      "Complete" => Ok(Self::Complete),
      "Failed" => Ok(Self::Failed),
      _ => Err(()),
    }
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "builds")]
#[serde(rename_all = "camelCase")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub project_name: String,
  pub build_type: BuildType,
  pub description: Option<String>,
  pub status: Status,
  /// Stored as naive UTC, emitted as RFC 3339
  #[serde(with = "utils::utc")]
  pub timestamp: DateTime,
  #[serde(with = "utils::utc")]
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
  use sea_orm::Iterable;

  use super::*;

  #[test]
  fn test_status_wire_values() {
    for status in Status::iter() {
      assert_eq!(status.as_str().parse::<Status>(), Ok(status));
      assert_eq!(
        json::to_value(status).unwrap(),
        json::Value::String(status.to_string())
      );
    }

    assert!("in progress".parse::<Status>().is_err());
    assert!("Done".parse::<Status>().is_err());
  }

  #[test]
  fn test_build_type_wire_values() {
    for kind in BuildType::iter() {
      assert_eq!(kind.as_str().parse::<BuildType>(), Ok(kind));
      assert_eq!(json::to_value(kind).unwrap(), json::json!(kind.as_str()));
    }

    assert!("Production".parse::<BuildType>().is_err());
    assert!("qa".parse::<BuildType>().is_err());
  }

  #[test]
  fn test_model_serializes_camel_case() {
    let now = chrono::Utc::now().naive_utc();
    let model = Model {
      id: Uuid::new_v4(),
      project_name: "zanika-app".into(),
      build_type: BuildType::Production,
      description: None,
      status: Status::InProgress,
      timestamp: now,
      created_at: now,
    };

    let value = json::to_value(&model).unwrap();
    assert_eq!(value["projectName"], "zanika-app");
    assert_eq!(value["buildType"], "production");
    assert_eq!(value["status"], "In Progress");
    assert_eq!(value["timestamp"], value["createdAt"]);
    assert!(value["createdAt"].as_str().unwrap().ends_with('Z'));
  }
}
