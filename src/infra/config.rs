use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use super::InfraError;

pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A:A";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// When set, JSON logs are written here in addition to the console.
    pub log_file: Option<String>,
    /// Leading rows of the sheet that are not waitlist entries (e.g. a header).
    pub header_rows: usize,
    pub sheets: SheetsConfig,
}

/// Service-account credentials and location of the waitlist sheet.
pub struct SheetsConfig {
    pub service_account_email: String,
    /// PEM-encoded key with real newlines.
    pub private_key: SecretString,
    pub sheet_id: String,
    pub range: String,
    pub token_uri: Url,
    pub api_base: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 8888)),
        );
        let cors_origin = get_env_default("CORS_ORIGIN", String::from("http://localhost:5173"))
            .parse::<HeaderValue>()
            .map_err(|e| InfraError::ConfigInvalid {
                var: "CORS_ORIGIN",
                reason: e.to_string(),
            })?;
        let log_file: Option<String> = std::env::var("LOG_FILE").ok().filter(|s| !s.is_empty());
        let header_rows: usize = get_env_default("WAITLIST_HEADER_ROWS", 0);

        let sheets = SheetsConfig {
            service_account_email: required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?,
            private_key: SecretString::new(
                normalize_private_key(&required("GOOGLE_PRIVATE_KEY")?).into(),
            ),
            sheet_id: required("GOOGLE_SHEET_ID")?,
            range: get_env_default("GOOGLE_SHEET_RANGE", DEFAULT_SHEET_RANGE.to_string()),
            token_uri: url_var("GOOGLE_TOKEN_URI", DEFAULT_TOKEN_URI)?,
            api_base: url_var("GOOGLE_SHEETS_API_BASE", DEFAULT_SHEETS_API_BASE)?,
        };

        Ok(Self {
            bind_addr,
            cors_origin,
            log_file,
            header_rows,
            sheets,
        })
    }
}

/// Keys pasted into env files usually carry literal `\n` sequences.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn required(var: &'static str) -> Result<String, InfraError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InfraError::ConfigMissing { var }),
    }
}

fn url_var(var: &'static str, default: &str) -> Result<Url, InfraError> {
    let raw = get_env_default(var, default.to_string());
    Url::parse(&raw).map_err(|e| InfraError::ConfigInvalid {
        var,
        reason: e.to_string(),
    })
}
