pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_company_table;
mod m20240302_000001_create_membership_table;
mod m20240315_000001_create_quiz_table;
mod m20240315_000002_create_quiz_result_table;
mod m20240401_000001_create_notification_table;

pub struct Migrator;

// New migrations are registered by hand: add the module above and push it here.
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_company_table::Migration),
            Box::new(m20240302_000001_create_membership_table::Migration),
            Box::new(m20240315_000001_create_quiz_table::Migration),
            Box::new(m20240315_000002_create_quiz_result_table::Migration),
            Box::new(m20240401_000001_create_notification_table::Migration),
        ]
    }
}
