//! Database initialization and cleanup utilities
//!
//! This module initializes and tears down the PostgreSQL schema by executing
//! the SQL scripts under `migrations/` and `cleanup/`. The scripts are
//! embedded at compile time so a deployed binary needs no source tree.

use sqlx::PgPool;

/// A named SQL script; scripts run ordered by name.
type SqlScript = (&'static str, &'static str);

const MIGRATIONS: &[SqlScript] = &[(
    "0001_create_history.sql",
    include_str!("../../migrations/0001_create_history.sql"),
)];

const CLEANUP: &[SqlScript] = &[(
    "0001_drop_history.sql",
    include_str!("../../cleanup/0001_drop_history.sql"),
)];

/// Initialize the database by executing migration scripts in ascending order
///
/// Every script is written with `IF NOT EXISTS` guards, so running this
/// against an initialized database is a no-op.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use history_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    execute_sql_scripts_in_order(pool, MIGRATIONS, true).await
}

/// Cleanup the database by executing cleanup scripts in descending order
///
/// Drops the history table and everything stored in it.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    execute_sql_scripts_in_order(pool, CLEANUP, false).await
}

/// Execute SQL scripts in the specified order
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `scripts` - Named scripts to run
/// * `ascending` - If true, execute in ascending name order; if false, in descending order
async fn execute_sql_scripts_in_order(
    pool: &PgPool,
    scripts: &[SqlScript],
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut ordered: Vec<&SqlScript> = scripts.iter().collect();

    ordered.sort_by(|a, b| {
        let ordering = a.0.cmp(b.0);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    for &(name, sql) in ordered {
        tracing::debug!(script = %name, "executing sql script");
        sqlx::raw_sql(sql).execute(pool).await?;
    }

    Ok(())
}
