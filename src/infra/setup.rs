use crate::{
    adapters::{
        http::app_state::AppState,
        sheets::{GoogleSheetsRowStore, token::ServiceAccountTokenProvider},
    },
    application::use_cases::waitlist::{RowStore, WaitlistUseCases},
    infra::{InfraError, config::AppConfig, http_client::build_client},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let client = build_client().map_err(InfraError::HttpClient)?;

    let tokens = ServiceAccountTokenProvider::new(
        client.clone(),
        config.sheets.service_account_email.clone(),
        &config.sheets.private_key,
        config.sheets.token_uri.clone(),
    )
    .map_err(InfraError::PrivateKey)?;

    let store = GoogleSheetsRowStore::new(
        client,
        config.sheets.api_base.clone(),
        config.sheets.sheet_id.clone(),
        Arc::new(tokens),
    );

    let waitlist_use_cases = WaitlistUseCases::new(
        Arc::new(store) as Arc<dyn RowStore>,
        config.sheets.range.clone(),
        config.header_rows,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&str>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "circlefolk_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when asked for
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
