//! Airtable REST client
//!
//! Lists rows page by page following the `offset` cursor and updates single
//! rows with `PATCH`. Authentication is a bearer personal access token.

use super::RecordStore;
use crate::config::AttacherConfig;
use crate::core::record::Record;
use crate::utils::error::{AttacherError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;
use url::Url;

/// One page of a list call
#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    #[serde(default)]
    records: Vec<Record>,
    #[serde(default)]
    offset: Option<String>,
}

/// Airtable client scoped to one base and table
#[derive(Debug, Clone)]
pub struct AirtableClient {
    client: Client,
    api_base: String,
    base_id: String,
    table_name: String,
    access_token: String,
}

impl AirtableClient {
    pub fn new(config: &AttacherConfig, client: Client) -> Self {
        Self {
            client,
            api_base: config.api_base.clone(),
            base_id: config.base_id.clone(),
            table_name: config.table_name.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// `{api_base}/{base_id}/{table}` with each segment percent-encoded
    fn table_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| AttacherError::invalid_url(format!("{} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .push(&self.base_id)
            .push(&self.table_name);
        Ok(url)
    }

    fn record_url(&self, record_id: &str) -> Result<Url> {
        let mut url = self.table_url()?;
        url.path_segments_mut()
            .map_err(|_| AttacherError::invalid_url(format!("{} cannot be a base", self.api_base)))?
            .push(record_id);
        Ok(url)
    }

    async fn list_page(&self, fields: &[String], offset: Option<&str>) -> Result<ListRecordsResponse> {
        let mut query: Vec<(&str, &str)> = fields.iter().map(|f| ("fields[]", f.as_str())).collect();
        if let Some(offset) = offset {
            query.push(("offset", offset));
        }

        let response = self
            .client
            .get(self.table_url()?)
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()
            .await?;

        Ok(error_for_status(response).await?.json().await?)
    }
}

#[async_trait]
impl RecordStore for AirtableClient {
    async fn list_records(&self, fields: &[String]) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.list_page(fields, offset.as_deref()).await?;
            debug!(
                table = %self.table_name,
                page_records = page.records.len(),
                "Fetched record page"
            );
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }

    async fn update_field(&self, record_id: &str, field: &str, value: Value) -> Result<()> {
        let mut fields = Map::new();
        fields.insert(field.to_string(), value);

        let response = self
            .client
            .patch(self.record_url(record_id)?)
            .bearer_auth(&self.access_token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        error_for_status(response).await?;
        debug!(record_id, field, "Record updated");
        Ok(())
    }
}

/// Turn a non-2xx response into `AttacherError::Store`
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AttacherError::store(status.as_u16(), error_message(&body)))
}

/// Extract the message from `{"error": {"type", "message"}}` or `{"error": "TYPE"}`
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    match value.get("error") {
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Object(error)) => {
            let kind = error.get("type").and_then(Value::as_str);
            let message = error.get("message").and_then(Value::as_str);
            match (kind, message) {
                (Some(kind), Some(message)) => format!("{}: {}", kind, message),
                (Some(kind), None) => kind.to_string(),
                (None, Some(message)) => message.to_string(),
                (None, None) => body.trim().to_string(),
            }
        }
        _ => body.trim().to_string(),
    }
}
