//! Schema steps for the roster database.
//!
//! Each step is a SQL script applied once, in order, inside a single
//! transaction together with every other pending step.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, Transaction};

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "slots",
    sql: include_str!("0001_slots.sql"),
}];

/// Schema version a freshly migrated roster file ends up at.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Brings `conn` up to `latest_version()`.
///
/// Files already at the latest version are left untouched; files from a
/// newer build are rejected with `DbError::UnsupportedSchemaVersion`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::UnsupportedSchemaVersion { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in SCHEMA_STEPS.iter().filter(|step| step.version > found) {
        run_step(&tx, step)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={supported}");
    Ok(())
}

fn run_step(tx: &Transaction<'_>, step: &SchemaStep) -> DbResult<()> {
    tx.execute_batch(step.sql)?;
    tx.pragma_update(None, "user_version", step.version)?;
    info!(
        "event=db_migrate_step module=db status=ok version={} name={}",
        step.version, step.name
    );
    Ok(())
}

fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
