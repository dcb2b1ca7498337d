//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` whose row store is an
//! in-memory mock, so routes can be exercised without Google credentials.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{RowStore, WaitlistUseCases},
    infra::config::{AppConfig, DEFAULT_SHEET_RANGE, SheetsConfig},
    test_utils::InMemoryRowStore,
};

/// Builder for creating `AppState` with mocks for testing.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryRowStore::new());
/// let app_state = TestAppStateBuilder::new()
///     .with_store(store.clone())
///     .with_header_rows(1)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    store: Option<Arc<dyn RowStore>>,
    header_rows: usize,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            header_rows: 0,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn RowStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    pub fn build(self) -> AppState {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryRowStore::new()) as Arc<dyn RowStore>);
        let config = test_config(self.header_rows);
        let waitlist_use_cases =
            WaitlistUseCases::new(store, config.sheets.range.clone(), config.header_rows);

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }
}

/// Config with placeholder credentials; nothing in it is ever sent anywhere.
pub fn test_config(header_rows: usize) -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:5173"),
        log_file: None,
        header_rows,
        sheets: SheetsConfig {
            service_account_email: "waitlist@test-project.iam.gserviceaccount.com".to_string(),
            private_key: SecretString::new("not-a-real-key".into()),
            sheet_id: "test-sheet".to_string(),
            range: DEFAULT_SHEET_RANGE.to_string(),
            token_uri: Url::parse("http://127.0.0.1:9/token").unwrap(),
            api_base: Url::parse("http://127.0.0.1:9").unwrap(),
        },
    }
}
