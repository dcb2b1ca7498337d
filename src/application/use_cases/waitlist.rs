use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    validators::{email_key, is_valid_email},
};

/// Tabular store the waitlist lives in. Rows come back in store order; only
/// the first cell of each row is meaningful for the waitlist.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn read_column(&self, range: &str) -> AppResult<Vec<Vec<String>>>;
    async fn append_row(&self, range: &str, values: Vec<String>) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    store: Arc<dyn RowStore>,
    range: String,
    header_rows: usize,
}

impl WaitlistUseCases {
    pub fn new(store: Arc<dyn RowStore>, range: String, header_rows: usize) -> Self {
        Self {
            store,
            range,
            header_rows,
        }
    }

    /// Registers `email` unless it is malformed or already present.
    ///
    /// The duplicate scan and the append are two separate store calls, so two
    /// concurrent joins with the same address can both succeed.
    #[instrument(skip(self))]
    pub async fn join(&self, email: &str) -> AppResult<WaitlistEntry> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email address".into()));
        }

        let key = email_key(email);
        let rows = self.store.read_column(&self.range).await?;
        let taken = self
            .entry_rows(&rows)
            .any(|row| row.first().is_some_and(|stored| email_key(stored) == key));
        if taken {
            return Err(AppError::Conflict);
        }

        let entry = WaitlistEntry::new(email, Utc::now());
        self.store.append_row(&self.range, entry.to_row()).await?;

        info!(joined_at = %entry.joined_at, "Waitlist entry added");
        Ok(entry)
    }

    /// Live number of entries, header rows excluded.
    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<u64> {
        let rows = self.store.read_column(&self.range).await?;
        Ok(self.entry_rows(&rows).count() as u64)
    }

    fn entry_rows<'a>(&self, rows: &'a [Vec<String>]) -> impl Iterator<Item = &'a Vec<String>> {
        rows.iter().skip(self.header_rows)
    }
}
