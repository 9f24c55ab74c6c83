//! Configuration validation

use super::AttacherConfig;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for AttacherConfig {
    fn validate(&self) -> Result<(), String> {
        if self.access_token.trim().is_empty() {
            return Err("Access token cannot be empty".to_string());
        }

        if self.base_id.trim().is_empty() {
            return Err("Base ID cannot be empty".to_string());
        }

        if self.table_name.trim().is_empty() {
            return Err("Table name cannot be empty".to_string());
        }

        if self.url_field.is_empty() || self.attachment_field.is_empty() {
            return Err("Field names cannot be empty".to_string());
        }

        if self.url_field == self.attachment_field {
            return Err(format!(
                "URL field and attachment field must differ, both are '{}'",
                self.url_field
            ));
        }

        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }

        let api_base = Url::parse(&self.api_base)
            .map_err(|e| format!("API base has invalid URL format: {}", e))?;
        match api_base.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "API base must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        Ok(())
    }
}
