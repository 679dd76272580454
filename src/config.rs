use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub reset_secret: String,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            database_path: "tasks.db".to_string(),
            reset_secret: "1234".to_string(),
        }
    }
}
