use chrono::{Duration, NaiveDate};
use rocket::FromForm;

use crate::tasks::data::CategoryID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    Week,
    Month,
    All,
}

impl PeriodFilter {
    // Unrecognized values fall back to the unbounded period.
    pub fn parse(raw: &str) -> PeriodFilter {
        match raw {
            "week" => PeriodFilter::Week,
            "month" => PeriodFilter::Month,
            _ => PeriodFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodFilter::Week => "week",
            PeriodFilter::Month => "month",
            PeriodFilter::All => "all",
        }
    }

    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            PeriodFilter::Week => Some(today - Duration::days(7)),
            PeriodFilter::Month => Some(today - Duration::days(30)),
            PeriodFilter::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(CategoryID),
}

impl CategoryFilter {
    // Non-numeric, non-"all" input falls back to all categories.
    pub fn parse(raw: &str) -> CategoryFilter {
        if raw == "all" {
            return CategoryFilter::All;
        }

        match raw.parse::<CategoryID>() {
            Ok(id) => CategoryFilter::Category(id),
            Err(_) => CategoryFilter::All,
        }
    }

    pub fn category_id(&self) -> Option<CategoryID> {
        match self {
            CategoryFilter::Category(id) => Some(*id),
            CategoryFilter::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: i64,
    pub completed: i64,
    pub expired: i64,
    pub efficiency: i64,
}

#[derive(FromForm)]
pub struct ResetForm {
    pub password: String,
}
