//! Google Sheets v4 adapter for the `RowStore` port.

pub mod token;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::RowStore,
};
use token::AccessTokenProvider;

pub struct GoogleSheetsRowStore {
    client: Client,
    api_base: Url,
    sheet_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

#[derive(Deserialize)]
struct ValueRange {
    // Omitted by the API when the range is empty.
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
struct AppendBody<'a> {
    values: [&'a [String]; 1],
}

impl GoogleSheetsRowStore {
    pub fn new(
        client: Client,
        api_base: Url,
        sheet_id: String,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client,
            api_base,
            sheet_id,
            tokens,
        }
    }

    /// `{api_base}/v4/spreadsheets/{sheet_id}/values/{range}{suffix}`, each
    /// segment percent-encoded.
    fn values_url(&self, range: &str, suffix: &str) -> AppResult<Url> {
        let last = format!("{range}{suffix}");
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Upstream("Sheets API base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.sheet_id.as_str(),
                "values",
                last.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl RowStore for GoogleSheetsRowStore {
    async fn read_column(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let url = self.values_url(range, "")?;
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("sheet read failed: {e}")))?;

        let parsed: ValueRange = ensure_success(response, "read")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("sheet read response unreadable: {e}")))?;

        Ok(parsed
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append_row(&self, range: &str, values: Vec<String>) -> AppResult<()> {
        let mut url = self.values_url(range, ":append")?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token.expose_secret())
            .json(&AppendBody {
                values: [values.as_slice()],
            })
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("sheet append failed: {e}")))?;

        ensure_success(response, "append").await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, op: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Upstream(format!(
        "sheet {op} returned {status}: {body}"
    )))
}

/// Cells usually come back as strings; anything else is rendered as JSON text.
fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
