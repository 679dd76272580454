use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod config;
mod data;
mod internal_error;
mod stats;
mod tasks;

use config::AppConfig;
use data::DBConnection;

#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

fn build_rocket(connection: DBConnection, app_config: AppConfig) -> Rocket<Build> {
    rocket::build()
        .manage(connection)
        .manage(app_config)
        .attach(Template::fairing())
        .mount(
            "/",
            routes![
                tasks::endpoints::index,
                tasks::endpoints::add,
                tasks::endpoints::complete,
                tasks::endpoints::category_add,
                tasks::endpoints::category_delete,
                stats::endpoints::stats,
                stats::endpoints::reset_data,
            ],
        )
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let app_config: AppConfig = rocket::Config::figment().extract()?;

    let connection = Connection::open(&app_config.database_path)?;
    data::init_schema(&connection)?;
    tasks::helpers::ensure_default_category(&connection)?;

    let connection = Arc::new(Mutex::new(connection));

    build_rocket(connection, app_config).launch().await?;

    Ok(())
}
