pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_workers_table;
mod m20260801_000003_create_requests_table;
mod m20260801_000004_create_proposals_table;
mod m20260801_000005_create_reviews_table;
mod m20260805_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_workers_table::Migration),
            Box::new(m20260801_000003_create_requests_table::Migration),
            Box::new(m20260801_000004_create_proposals_table::Migration),
            Box::new(m20260801_000005_create_reviews_table::Migration),
            Box::new(m20260805_000001_add_indexes::Migration),
        ]
    }
}
