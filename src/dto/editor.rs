//! Data rendered by the content editor template.

use serde::Serialize;

/// One editable field with its current overlay value.
#[derive(Debug, Serialize)]
pub struct EditorField {
    pub key: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
}

/// Data required to render the editor page.
#[derive(Debug, Serialize)]
pub struct EditorPageData {
    pub fields: Vec<EditorField>,
}
