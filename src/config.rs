use std::env;

use crate::domain::services::ticket_id::TicketIdStyle;
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    /// `sqlite:` URL. When unset the stores live in memory for the process lifetime.
    pub database_url: Option<String>,
    pub port: u16,
    /// Mail relay endpoint. When unset confirmations are only logged.
    pub mail_service_url: Option<String>,
    pub mail_service_token: String,
    pub ticket_id_style: TicketIdStyle,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 3000,
            mail_service_url: None,
            mail_service_token: String::new(),
            ticket_id_style: TicketIdStyle::Numeric,
            log_dir: "./logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank URLs count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let ticket_id_style = match lookup("TICKET_ID_STYLE") {
            Some(raw) => raw.parse()?,
            None => defaults.ticket_id_style,
        };

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            port,
            mail_service_url: non_empty("MAIL_SERVICE_URL"),
            mail_service_token: lookup("MAIL_SERVICE_TOKEN").unwrap_or(defaults.mail_service_token),
            ticket_id_style,
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}
