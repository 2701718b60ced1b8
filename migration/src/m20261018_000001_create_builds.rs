use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Builds::Table)
          .if_not_exists()
          .col(ColumnDef::new(Builds::Id).uuid().not_null().primary_key())
          .col(ColumnDef::new(Builds::ProjectName).string().not_null())
          .col(ColumnDef::new(Builds::BuildType).string().not_null())
          .col(ColumnDef::new(Builds::Description).text().null())
          .col(
            ColumnDef::new(Builds::Status)
              .string()
              .not_null()
              .default("In Progress"),
          )
          .col(ColumnDef::new(Builds::Timestamp).date_time().not_null())
          .col(ColumnDef::new(Builds::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_builds_created_at")
          .table(Builds::Table)
          .col(Builds::CreatedAt)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Builds::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Builds {
  Table,
  Id,
  ProjectName,
  BuildType,
  Description,
  Status,
  Timestamp,
  CreatedAt,
}
