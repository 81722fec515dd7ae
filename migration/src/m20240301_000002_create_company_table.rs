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
    Name,
    Description,
    OwnerId,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Company::Table)
                .if_not_exists()
                .col(ColumnDef::new(Company::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Company::Name).string_len(100).not_null().unique_key())
                .col(ColumnDef::new(Company::Description).text().not_null().default(""))
                .col(ColumnDef::new(Company::OwnerId).uuid().not_null())
                .col(ColumnDef::new(Company::IsPublic).boolean().not_null().default(true))
                .col(ColumnDef::new(Company::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Company::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_company_owner")
                        .from(Company::Table, Company::OwnerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_company_owner")
                .table(Company::Table)
                .col(Company::OwnerId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Company::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
