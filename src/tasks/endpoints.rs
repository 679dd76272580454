use chrono::Local;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket::{get, post, State};
use rocket_dyn_templates::{context, Template};

use crate::data::DBConnection;
use crate::internal_error::InternalResult;

use super::data::*;
use super::helpers::*;

#[get("/")]
pub fn index(db_connection: &State<DBConnection>) -> InternalResult<Template> {
    let db_connection = db_connection.lock()?;
    let today = Local::now().date_naive();

    sweep_expired(&db_connection, today)?;

    let tasks = today_tasks(&db_connection, today)?;
    let categories = all_categories(&db_connection)?;

    Ok(Template::render(
        "index",
        context! { tasks, categories, today: today.to_string() },
    ))
}

#[post("/add", data = "<add_task_form>")]
pub fn add(
    add_task_form: Form<AddTaskForm>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Redirect> {
    let db_connection = db_connection.lock()?;
    let today = Local::now().date_naive();

    add_task(
        &db_connection,
        &add_task_form.title,
        add_task_form.category_id,
        today,
    )?;

    Ok(Redirect::to(uri!(index)))
}

#[get("/complete/<task_id>")]
pub fn complete(task_id: TaskID, db_connection: &State<DBConnection>) -> InternalResult<Redirect> {
    let db_connection = db_connection.lock()?;
    let today = Local::now().date_naive();

    complete_task(&db_connection, task_id, today)?;

    Ok(Redirect::to(uri!(index)))
}

#[post("/category/add", data = "<add_category_form>")]
pub fn category_add(
    add_category_form: Form<AddCategoryForm>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Redirect> {
    let db_connection = db_connection.lock()?;

    add_category(&db_connection, &add_category_form.name)?;

    Ok(Redirect::to(uri!(index)))
}

#[get("/category/delete/<category_id>")]
pub fn category_delete(
    category_id: CategoryID,
    db_connection: &State<DBConnection>,
) -> InternalResult<Redirect> {
    let db_connection = db_connection.lock()?;

    delete_category(&db_connection, category_id)?;

    Ok(Redirect::to(uri!(index)))
}
