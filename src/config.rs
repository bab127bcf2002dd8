use std::env;

use tracing::info;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
pub const DEFAULT_PRODUCT_DB_URL: &str = "https://world.openfoodfacts.org";

pub struct Config {
    pub backend_url: String,
    pub product_db_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            backend_url: try_load("CALTRACK_BACKEND_URL", DEFAULT_BACKEND_URL),
            product_db_url: try_load("CALTRACK_PRODUCT_DB_URL", DEFAULT_PRODUCT_DB_URL),
        }
    }
}

fn try_load(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
