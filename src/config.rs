// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::pagination::QUESTIONS_PER_PAGE;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    /// Questions served per listing page. Overridable via QUESTIONS_PER_PAGE.
    pub questions_per_page: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let questions_per_page = env::var("QUESTIONS_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(QUESTIONS_PER_PAGE);

        Self {
            database_url,
            rust_log,
            questions_per_page,
        }
    }
}
