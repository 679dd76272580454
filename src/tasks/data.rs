use rocket::FromForm;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::Serialize;

pub type TaskID = i64;
pub type CategoryID = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
    Expired,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Expired => "expired",
        }
    }

    pub fn from_str(s: &str) -> Option<TaskStatus> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            "expired" => Some(TaskStatus::Expired),
            _ => None,
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<TaskStatus> {
        let s = value.as_str()?;
        TaskStatus::from_str(s).ok_or(FromSqlError::InvalidType)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Category {
    pub id: CategoryID,
    pub name: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct TodayTask {
    pub id: TaskID,
    pub title: String,
    pub category_name: String,
}

#[derive(FromForm)]
pub struct AddTaskForm {
    pub title: String,
    pub category_id: CategoryID,
}

#[derive(FromForm)]
pub struct AddCategoryForm {
    pub name: String,
}
