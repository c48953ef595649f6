pub use sea_orm_migration::prelude::*;

mod m20250214_000001_create_partnership_schema;
mod m20250214_000002_create_operations_schema;
mod m20250214_000003_create_community_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250214_000001_create_partnership_schema::Migration),
            Box::new(m20250214_000002_create_operations_schema::Migration),
            Box::new(m20250214_000003_create_community_schema::Migration),
        ]
    }
}
