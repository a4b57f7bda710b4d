use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Communities {
    Table,
    Id,
    Name,
    District,
    AdminId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Communities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Communities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Communities::Name).string().not_null())
                    .col(ColumnDef::new(Communities::District).string().not_null())
                    .col(ColumnDef::new(Communities::AdminId).uuid().not_null())
                    .col(
                        ColumnDef::new(Communities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_communities_admin_id")
                            .from(Communities::Table, Communities::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing pages are ordered by (name, id).
        manager
            .create_index(
                Index::create()
                    .name("idx_communities_name_id")
                    .table(Communities::Table)
                    .col(Communities::Name)
                    .col(Communities::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Communities::Table).to_owned())
            .await
    }
}
