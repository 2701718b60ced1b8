use sea_orm::DbErr;

use crate::{entity::*, prelude::*};

pub struct Build<'a> {
  db: &'a DatabaseConnection,
}

fn parse_id(id: &str) -> Result<Uuid> {
  Uuid::parse_str(id).map_err(|_| Error::InvalidId)
}

impl<'a> Build<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// All builds, most recently created first. Builds sharing a
  /// `created_at` instant come back in no particular order.
  pub async fn all(&self) -> Result<Vec<build::Model>> {
    let builds = build::Entity::find()
      .order_by_desc(build::Column::CreatedAt)
      .all(self.db)
      .await?;

    Ok(builds)
  }

  /// Records a new build. Status always starts as `In Progress`.
  pub async fn create(
    &self,
    project_name: &str,
    build_type: &str,
    description: Option<String>,
  ) -> Result<build::Model> {
    if project_name.trim().is_empty() || build_type.trim().is_empty() {
      return Err(Error::validation("Project name and build type are required"));
    }

    let build_type: BuildType = build_type.parse().map_err(|_| {
      Error::validation(format!("Invalid build type: {build_type}"))
    })?;

    let now = Utc::now().naive_utc();

    let build = build::ActiveModel {
      id: Set(Uuid::new_v4()),
      project_name: Set(project_name.to_owned()),
      build_type: Set(build_type),
      description: Set(description),
      status: Set(Status::InProgress),
      timestamp: Set(now),
      created_at: Set(now),
    };

    let build = build.insert(self.db).await?;
    debug!(id = %build.id, project = %build.project_name, "build created");

    Ok(build)
  }

  pub async fn by_id(&self, id: &str) -> Result<build::Model> {
    let id = parse_id(id)?;

    build::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::BuildNotFound)
  }

  pub async fn set_status(
    &self,
    id: &str,
    status: &str,
  ) -> Result<build::Model> {
    let status: Status =
      status.parse().map_err(|_| Error::validation("Invalid status"))?;

    let build = self.by_id(id).await?;
    self.apply_status(build, status).await
  }

  /// The row may vanish between the lookup and the write.
  async fn apply_status(
    &self,
    build: build::Model,
    status: Status,
  ) -> Result<build::Model> {
    build::ActiveModel { status: Set(status), ..build.into() }
      .update(self.db)
      .await
      .map_err(|err| match err {
        DbErr::RecordNotUpdated => Error::BuildNotFound,
        err => Error::Database(err),
      })
  }

  pub async fn delete(&self, id: &str) -> Result<()> {
    let id = parse_id(id)?;

    let result = build::Entity::delete_by_id(id).exec(self.db).await?;
    if result.rows_affected == 0 {
      return Err(Error::BuildNotFound);
    }

    Ok(())
  }
}
