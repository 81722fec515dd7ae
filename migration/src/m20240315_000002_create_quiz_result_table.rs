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
enum Quiz {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum QuizResult {
    Table,
    Id,
    UserId,
    CompanyId,
    QuizId,
    Time,
    Answered,
    Correct,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(QuizResult::Table)
                .if_not_exists()
                .col(ColumnDef::new(QuizResult::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(QuizResult::UserId).uuid().not_null())
                .col(ColumnDef::new(QuizResult::CompanyId).uuid().not_null())
                .col(ColumnDef::new(QuizResult::QuizId).uuid().not_null())
                .col(ColumnDef::new(QuizResult::Time).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(QuizResult::Answered).integer().not_null())
                .col(ColumnDef::new(QuizResult::Correct).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_quiz_result_user")
                        .from(QuizResult::Table, QuizResult::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_quiz_result_company")
                        .from(QuizResult::Table, QuizResult::CompanyId)
                        .to(Company::Table, Company::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_quiz_result_quiz")
                        .from(QuizResult::Table, QuizResult::QuizId)
                        .to(Quiz::Table, Quiz::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_quiz_result_user_company")
                .table(QuizResult::Table)
                .col(QuizResult::UserId)
                .col(QuizResult::CompanyId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(QuizResult::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
