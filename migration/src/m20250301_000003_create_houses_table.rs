use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Houses {
    Table,
    Id,
    CommunityId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Communities {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Houses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Houses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Houses::CommunityId).uuid().not_null())
                    .col(ColumnDef::new(Houses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Houses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_houses_community_id")
                            .from(Houses::Table, Houses::CommunityId)
                            .to(Communities::Table, Communities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_houses_community_name")
                    .table(Houses::Table)
                    .col(Houses::CommunityId)
                    .col(Houses::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Houses::Table).to_owned())
            .await
    }
}
