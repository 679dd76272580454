use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::internal_error::InternalResult;

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn init_schema(connection: &Connection) -> InternalResult<()> {
    connection.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE IF NOT EXISTS categories (
             id   INTEGER PRIMARY KEY,
             name TEXT NOT NULL UNIQUE
         );
         CREATE TABLE IF NOT EXISTS tasks (
             id          INTEGER PRIMARY KEY,
             title       TEXT NOT NULL,
             date        TEXT NOT NULL,
             status      TEXT NOT NULL DEFAULT 'pending',
             category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE
         );",
    )?;

    Ok(())
}
