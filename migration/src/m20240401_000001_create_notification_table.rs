use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    UserId,
    Time,
    Status,
    Text,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Notification::Table)
                .if_not_exists()
                .col(ColumnDef::new(Notification::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Notification::UserId).uuid().not_null())
                .col(ColumnDef::new(Notification::Time).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Notification::Status).string_len(16).not_null().default("unread"))
                .col(ColumnDef::new(Notification::Text).text().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_notification_user")
                        .from(Notification::Table, Notification::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_notification_user")
                .table(Notification::Table)
                .col(Notification::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Notification::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
