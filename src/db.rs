use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Create every table from the entity definitions on startup.
///
/// Statements are `CREATE TABLE IF NOT EXISTS`, so re-running against an
/// already-populated store is a no-op. Building the DDL from the entities
/// keeps the schema identical across the Postgres and SQLite backends.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(entity::Customers),
        schema.create_table_from_entity(entity::Products),
        schema.create_table_from_entity(entity::Orders),
        schema.create_table_from_entity(entity::OrderProducts),
    ];
    for statement in &mut statements {
        conn.execute(backend.build(statement.if_not_exists())).await?;
    }

    Ok(())
}
