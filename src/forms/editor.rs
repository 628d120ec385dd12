//! Content editor form handling.

use std::collections::HashMap;

use serde::Deserialize;
use validator::ValidateUrl;

use crate::domain::content::{ContentEntry, FieldKind, HOMEPAGE_FIELDS};
use crate::forms::FormError;

/// Posted editor values, one input per content key. Keys not in the fixed
/// homepage field set are ignored; missing keys persist as empty text.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct EditorForm {
    pub values: HashMap<String, String>,
}

impl EditorForm {
    /// Converts the posted values into entries in the fixed field order the
    /// bulk save walks through. URL fields must hold a valid URL or be left
    /// empty.
    pub fn into_entries(self) -> Result<Vec<ContentEntry>, FormError> {
        let mut entries = Vec::with_capacity(HOMEPAGE_FIELDS.len());
        for field in HOMEPAGE_FIELDS {
            let value = self.values.get(field.key).cloned().unwrap_or_default();
            if field.kind == FieldKind::Url && !value.trim().is_empty() && !value.validate_url() {
                return Err(FormError::InvalidUrl(field.key.to_string()));
            }
            entries.push(ContentEntry {
                key: field.key.to_string(),
                value,
            });
        }
        Ok(entries)
    }
}
