use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::internal_error::InternalResult;

use super::data::*;

pub const DEFAULT_CATEGORY_NAME: &str = "General";

pub fn sweep_expired(db_connection: &Connection, today: NaiveDate) -> InternalResult<usize> {
    let expired = db_connection.execute(
        "UPDATE tasks SET status = ?1 WHERE status = ?2 AND date < ?3",
        params![TaskStatus::Expired, TaskStatus::Pending, today],
    )?;

    if expired > 0 {
        log::info!("swept {} stale task(s) to expired", expired);
    }

    Ok(expired)
}

pub fn complete_task(
    db_connection: &Connection,
    task_id: TaskID,
    today: NaiveDate,
) -> InternalResult<()> {
    // Missing ids, past-dated tasks and terminal statuses fall through as no-ops.
    db_connection.execute(
        "UPDATE tasks SET status = ?1 WHERE id = ?2 AND status = ?3 AND date >= ?4",
        params![
            TaskStatus::Completed,
            task_id,
            TaskStatus::Pending,
            today
        ],
    )?;

    Ok(())
}

pub fn add_task(
    db_connection: &Connection,
    title: &str,
    category_id: CategoryID,
    today: NaiveDate,
) -> InternalResult<()> {
    // Inserting against an unknown category is a no-op, not an error.
    db_connection.execute(
        "INSERT INTO tasks (title, date, status, category_id)
         SELECT ?1, ?2, ?3, id FROM categories WHERE id = ?4",
        params![title, today, TaskStatus::Pending, category_id],
    )?;

    Ok(())
}

pub fn add_category(db_connection: &Connection, name: &str) -> InternalResult<()> {
    db_connection.execute(
        "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
        params![name],
    )?;

    Ok(())
}

pub fn delete_category(db_connection: &Connection, category_id: CategoryID) -> InternalResult<()> {
    // ON DELETE CASCADE removes the category's tasks with it.
    db_connection.execute("DELETE FROM categories WHERE id = ?1", params![category_id])?;

    // Deleting the last category may not leave the table empty.
    ensure_default_category(db_connection)?;

    Ok(())
}

pub fn reset_all_tasks(db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute("DELETE FROM tasks", [])?;

    Ok(())
}

pub fn ensure_default_category(db_connection: &Connection) -> InternalResult<()> {
    let count: i64 =
        db_connection.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;

    if count == 0 {
        add_category(db_connection, DEFAULT_CATEGORY_NAME)?;
    }

    Ok(())
}

pub fn today_tasks(
    db_connection: &Connection,
    today: NaiveDate,
) -> InternalResult<Vec<TodayTask>> {
    let mut statement = db_connection.prepare(
        "SELECT tasks.id, tasks.title, categories.name
         FROM tasks JOIN categories ON categories.id = tasks.category_id
         WHERE tasks.date = ?1 AND tasks.status = ?2",
    )?;

    let rows = statement.query_map(params![today, TaskStatus::Pending], |row| {
        Ok(TodayTask {
            id: row.get(0)?,
            title: row.get(1)?,
            category_name: row.get(2)?,
        })
    })?;

    let mut tasks = vec![];
    for row_result in rows {
        tasks.push(row_result?);
    }

    Ok(tasks)
}

pub fn all_categories(db_connection: &Connection) -> InternalResult<Vec<Category>> {
    let mut statement = db_connection.prepare("SELECT id, name FROM categories")?;

    let rows = statement.query_map([], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut categories = vec![];
    for row_result in rows {
        categories.push(row_result?);
    }

    Ok(categories)
}
