use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::internal_error::InternalResult;
use crate::tasks::data::TaskStatus;

use super::data::*;

pub const ALL_CATEGORIES_LABEL: &str = "All categories";

pub fn compute_stats(
    db_connection: &Connection,
    period: PeriodFilter,
    category: CategoryFilter,
    today: NaiveDate,
) -> InternalResult<Stats> {
    let mut statement = db_connection.prepare(
        "SELECT status FROM tasks
         WHERE status IN (?1, ?2)
           AND (?3 IS NULL OR date >= ?3)
           AND (?4 IS NULL OR category_id = ?4)",
    )?;

    let rows = statement.query_map(
        params![
            TaskStatus::Completed,
            TaskStatus::Expired,
            period.cutoff(today),
            category.category_id()
        ],
        |row| row.get::<_, TaskStatus>(0),
    )?;

    let mut stats = Stats::default();
    for row_result in rows {
        match row_result? {
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::Expired => stats.expired += 1,
            TaskStatus::Pending => continue,
        }
        stats.total += 1;
    }

    if stats.total > 0 {
        stats.efficiency =
            ((stats.completed as f64 / stats.total as f64) * 100.0).round() as i64;
    }

    Ok(stats)
}

pub fn category_label(
    db_connection: &Connection,
    category: CategoryFilter,
) -> InternalResult<String> {
    let name: Option<String> = match category.category_id() {
        Some(id) => db_connection
            .query_row(
                "SELECT name FROM categories WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?,
        None => None,
    };

    Ok(name.unwrap_or_else(|| ALL_CATEGORIES_LABEL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::init_schema;
    use crate::tasks::helpers::add_category;
    use chrono::Duration;

    fn test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        init_schema(&connection).unwrap();
        add_category(&connection, "Work").unwrap();
        connection
    }

    fn insert_task(connection: &Connection, date: NaiveDate, status: TaskStatus) {
        insert_task_in(connection, date, status, 1);
    }

    fn insert_task_in(
        connection: &Connection,
        date: NaiveDate,
        status: TaskStatus,
        category_id: i64,
    ) {
        connection
            .execute(
                "INSERT INTO tasks (title, date, status, category_id) VALUES ('t', ?1, ?2, ?3)",
                params![date, status, category_id],
            )
            .unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn empty_task_set_yields_all_zeros() {
        let connection = test_connection();

        let stats = compute_stats(
            &connection,
            PeriodFilter::All,
            CategoryFilter::All,
            today(),
        )
        .unwrap();

        assert_eq!(
            stats,
            Stats {
                total: 0,
                completed: 0,
                expired: 0,
                efficiency: 0
            }
        );
    }

    #[test]
    fn pending_tasks_never_count() {
        let connection = test_connection();
        insert_task(&connection, today(), TaskStatus::Pending);

        let stats = compute_stats(
            &connection,
            PeriodFilter::All,
            CategoryFilter::All,
            today(),
        )
        .unwrap();

        assert_eq!(stats.total, 0);
    }

    #[test]
    fn week_filter_excludes_older_tasks() {
        let connection = test_connection();
        insert_task(&connection, today(), TaskStatus::Completed);
        insert_task(&connection, today() - Duration::days(1), TaskStatus::Expired);
        insert_task(&connection, today() - Duration::days(10), TaskStatus::Completed);

        let week = compute_stats(
            &connection,
            PeriodFilter::Week,
            CategoryFilter::All,
            today(),
        )
        .unwrap();

        assert_eq!(
            week,
            Stats {
                total: 2,
                completed: 1,
                expired: 1,
                efficiency: 50
            }
        );

        let all = compute_stats(
            &connection,
            PeriodFilter::All,
            CategoryFilter::All,
            today(),
        )
        .unwrap();

        // 2 of 3 completed rounds up from 66.6.
        assert_eq!(
            all,
            Stats {
                total: 3,
                completed: 2,
                expired: 1,
                efficiency: 67
            }
        );
    }

    #[test]
    fn category_filter_restricts_to_one_category() {
        let connection = test_connection();
        add_category(&connection, "Home").unwrap();
        insert_task_in(&connection, today(), TaskStatus::Completed, 1);
        insert_task_in(&connection, today(), TaskStatus::Expired, 2);

        let stats = compute_stats(
            &connection,
            PeriodFilter::All,
            CategoryFilter::Category(2),
            today(),
        )
        .unwrap();

        assert_eq!(
            stats,
            Stats {
                total: 1,
                completed: 0,
                expired: 1,
                efficiency: 0
            }
        );
    }

    #[test]
    fn category_label_resolves_or_falls_back() {
        let connection = test_connection();

        assert_eq!(
            category_label(&connection, CategoryFilter::Category(1)).unwrap(),
            "Work"
        );
        assert_eq!(
            category_label(&connection, CategoryFilter::Category(99)).unwrap(),
            ALL_CATEGORIES_LABEL
        );
        assert_eq!(
            category_label(&connection, CategoryFilter::All).unwrap(),
            ALL_CATEGORIES_LABEL
        );
    }

    #[test]
    fn period_filter_parse_falls_back_to_all() {
        assert_eq!(PeriodFilter::parse("week"), PeriodFilter::Week);
        assert_eq!(PeriodFilter::parse("month"), PeriodFilter::Month);
        assert_eq!(PeriodFilter::parse("all"), PeriodFilter::All);
        assert_eq!(PeriodFilter::parse("daily"), PeriodFilter::All);
    }

    #[test]
    fn category_filter_parse_falls_back_to_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("7"), CategoryFilter::Category(7));
        assert_eq!(CategoryFilter::parse("kitchen"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    }
}
