use chrono::Local;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket::{get, post, State};
use rocket_dyn_templates::{context, Template};

use crate::config::AppConfig;
use crate::data::DBConnection;
use crate::internal_error::InternalResult;
use crate::tasks::helpers::{all_categories, reset_all_tasks, sweep_expired};

use super::data::*;
use super::helpers::*;

#[get("/stats?<period>&<cat_filter>&<reset>")]
pub fn stats(
    period: Option<&str>,
    cat_filter: Option<&str>,
    reset: Option<&str>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Template> {
    let db_connection = db_connection.lock()?;
    let today = Local::now().date_naive();

    sweep_expired(&db_connection, today)?;

    let period = PeriodFilter::parse(period.unwrap_or("all"));
    let category = CategoryFilter::parse(cat_filter.unwrap_or("all"));

    let stats = compute_stats(&db_connection, period, category, today)?;
    let selected_cat_name = category_label(&db_connection, category)?;
    let categories = all_categories(&db_connection)?;

    Ok(Template::render(
        "stats",
        context! {
            total: stats.total,
            completed: stats.completed,
            expired: stats.expired,
            efficiency: stats.efficiency,
            period: period.as_str(),
            cat_filter: cat_filter.unwrap_or("all"),
            categories,
            selected_cat_name,
            reset,
        },
    ))
}

#[post("/reset-data", data = "<reset_form>")]
pub fn reset_data(
    reset_form: Form<ResetForm>,
    db_connection: &State<DBConnection>,
    app_config: &State<AppConfig>,
) -> InternalResult<Redirect> {
    if reset_form.password != app_config.reset_secret {
        log::warn!("task reset rejected: wrong secret");
        return Ok(Redirect::to("/stats?reset=error"));
    }

    let db_connection = db_connection.lock()?;
    reset_all_tasks(&db_connection)?;
    log::info!("all tasks deleted by reset");

    Ok(Redirect::to("/stats?reset=success"))
}
