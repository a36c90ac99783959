//! Connections to the catalogue database
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::{Configuration, Error, Result};

pub mod schema;

mod fetch;
pub use fetch::Fetch;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

// SQLite only honours ON DELETE CASCADE with this pragma set, per connection.
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

pub fn db_error<T: Into<String>>(message: T, err: diesel::result::Error) -> Error {
    let context = message.into();
    error!("db_error: {}; {:?}", context, err);
    Error::Database {
        context,
        source: err,
    }
}

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the connection pool and brings the schema up to date
pub fn init_pool(config: &Configuration) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());
    let pool = Pool::builder()
        .max_size(config.database_pool_size())
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    info!(
        "database pool ready: {} ({} connections)",
        config.database_url(),
        config.database_pool_size()
    );
    Ok(pool)
}

/// Opens a single connection with the schema applied, e.g. `":memory:"`
pub fn establish_connection(database_url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    conn.batch_execute(CONNECTION_PRAGMAS)
        .map_err(|e| db_error("enabling connection pragmas", e))?;
    run_migrations(&mut conn)?;
    Ok(conn)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(Error::Migration)?;
    for version in applied {
        debug!("applied migration {}", version);
    }
    Ok(())
}
