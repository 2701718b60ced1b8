pub use anyhow::Context;
pub use chrono::Utc;
pub use sea_orm::{
  ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
pub use tracing::{debug, error, info, warn};
pub use uuid::Uuid;

pub use crate::error::{Error, Result};
