use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Membership {
    Table,
    Id,
    CompanyId,
    UserId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Membership::Table)
                .if_not_exists()
                .col(ColumnDef::new(Membership::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Membership::CompanyId).uuid().not_null())
                .col(ColumnDef::new(Membership::UserId).uuid().not_null())
                .col(ColumnDef::new(Membership::Status).string_len(16).not_null())
                .col(ColumnDef::new(Membership::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Membership::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_company")
                        .from(Membership::Table, Membership::CompanyId)
                        .to(Company::Table, Company::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_user")
                        .from(Membership::Table, Membership::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // One row per (company, user); status carries the whole lifecycle.
        m.create_index(
            Index::create()
                .name("uq_membership_company_user")
                .table(Membership::Table)
                .col(Membership::CompanyId)
                .col(Membership::UserId)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_membership_user")
                .table(Membership::Table)
                .col(Membership::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Membership::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
