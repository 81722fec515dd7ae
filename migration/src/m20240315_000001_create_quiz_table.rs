use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Quiz {
    Table,
    Id,
    CompanyId,
    Name,
    Description,
    Frequency,
    Questions,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Quiz::Table)
                .if_not_exists()
                .col(ColumnDef::new(Quiz::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Quiz::CompanyId).uuid().not_null())
                .col(ColumnDef::new(Quiz::Name).string().not_null())
                .col(ColumnDef::new(Quiz::Description).text().not_null().default(""))
                .col(ColumnDef::new(Quiz::Frequency).integer().not_null().default(1))
                .col(ColumnDef::new(Quiz::Questions).json_binary().not_null())
                .col(ColumnDef::new(Quiz::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Quiz::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_quiz_company")
                        .from(Quiz::Table, Quiz::CompanyId)
                        .to(Company::Table, Company::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_quiz_company")
                .table(Quiz::Table)
                .col(Quiz::CompanyId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Quiz::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
