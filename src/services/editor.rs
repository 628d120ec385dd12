//! Content editor services: page assembly and the bulk save.

use crate::backend::ContentStore;
use crate::content::ContentOverlay;
use crate::domain::content::{ContentEntry, HOMEPAGE_FIELDS};
use crate::domain::types::ContentKey;
use crate::dto::editor::{EditorField, EditorPageData};

/// What the bulk save does after a key fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Stop at the first failure; remaining keys are never attempted.
    /// This is the behavior the editor route uses.
    AbortOnFirst,
    /// Attempt every key regardless of failures.
    BestEffort,
}

/// Per-key outcome of one bulk save.
#[derive(Debug)]
pub enum FieldOutcome {
    Saved,
    Failed(String),
    /// Not attempted because an earlier key failed under
    /// [`SavePolicy::AbortOnFirst`].
    Skipped,
}

/// Result list of a bulk save, one entry per key in save order. The save is
/// not a transaction: earlier successes stay persisted after a failure.
#[derive(Debug)]
pub struct SaveReport {
    pub results: Vec<(String, FieldOutcome)>,
}

impl SaveReport {
    pub fn first_failure(&self) -> Option<(&str, &str)> {
        self.results.iter().find_map(|(key, outcome)| match outcome {
            FieldOutcome::Failed(message) => Some((key.as_str(), message.as_str())),
            _ => None,
        })
    }

    pub fn saved_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FieldOutcome::Saved))
            .count()
    }
}

/// Loads the editor form: the fixed homepage field list, each initialized
/// from the overlay. Refreshes first so the operator edits the backend's
/// current state, not a stale cache; a failed refresh degrades to whatever
/// is cached.
pub async fn load_editor_page<B: ContentStore>(overlay: &ContentOverlay<B>) -> EditorPageData {
    if let Err(err) = overlay.refresh().await {
        log::warn!("Failed to refresh content before editing: {err}");
    }

    let mut fields = Vec::with_capacity(HOMEPAGE_FIELDS.len());
    for field in HOMEPAGE_FIELDS {
        fields.push(EditorField {
            key: field.key.to_string(),
            label: field.label.to_string(),
            placeholder: field.fallback.to_string(),
            value: overlay.get(field.key, "").await,
        });
    }

    EditorPageData { fields }
}

/// Persists the entries sequentially through the overlay's write-through
/// path. Not atomic by design: the report tells the caller exactly which
/// keys were saved, which failed and which were skipped.
pub async fn save_content<B: ContentStore>(
    overlay: &ContentOverlay<B>,
    entries: Vec<ContentEntry>,
    policy: SavePolicy,
) -> SaveReport {
    let mut results = Vec::with_capacity(entries.len());
    let mut aborted = false;

    for entry in entries {
        if aborted {
            results.push((entry.key, FieldOutcome::Skipped));
            continue;
        }
        let key = match entry.key.parse::<ContentKey>() {
            Ok(key) => key,
            Err(err) => {
                results.push((entry.key, FieldOutcome::Failed(err.to_string())));
                if policy == SavePolicy::AbortOnFirst {
                    aborted = true;
                }
                continue;
            }
        };
        match overlay.set(&key, &entry.value).await {
            Ok(_) => results.push((entry.key, FieldOutcome::Saved)),
            Err(err) => {
                log::error!("Failed to save content key {}: {err}", entry.key);
                results.push((entry.key, FieldOutcome::Failed(err.to_string())));
                if policy == SavePolicy::AbortOnFirst {
                    aborted = true;
                }
            }
        }
    }

    SaveReport { results }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::backend::errors::{BackendError, BackendResult};

    /// Store that rejects writes to one designated key.
    struct FlakyStore {
        stored: Mutex<HashMap<String, String>>,
        poison_key: &'static str,
        attempts: Mutex<Vec<String>>,
    }

    impl FlakyStore {
        fn poisoned_at(key: &'static str) -> Self {
            Self {
                stored: Mutex::new(HashMap::new()),
                poison_key: key,
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContentStore for FlakyStore {
        async fn load_content(&self, _prefix: &str) -> BackendResult<Vec<ContentEntry>> {
            Ok(Vec::new())
        }

        async fn store_content(&self, entry: &ContentEntry) -> BackendResult<ContentEntry> {
            self.attempts.lock().unwrap().push(entry.key.clone());
            if entry.key == self.poison_key {
                return Err(BackendError::Status(500));
            }
            self.stored
                .lock()
                .unwrap()
                .insert(entry.key.clone(), entry.value.clone());
            Ok(entry.clone())
        }
    }

    fn all_field_entries() -> Vec<ContentEntry> {
        HOMEPAGE_FIELDS
            .iter()
            .map(|field| ContentEntry {
                key: field.key.to_string(),
                value: format!("nilai {}", field.key),
            })
            .collect()
    }

    #[actix_web::test]
    async fn abort_on_first_stops_after_third_key_fails() {
        // Third of the sixteen editor fields.
        let poison = HOMEPAGE_FIELDS[2].key;
        let overlay = ContentOverlay::new(FlakyStore::poisoned_at(poison), "homepage.");

        let report = save_content(&overlay, all_field_entries(), SavePolicy::AbortOnFirst).await;

        assert_eq!(report.saved_count(), 2);
        let (failed_key, _) = report.first_failure().unwrap();
        assert_eq!(failed_key, poison);
        // Keys 4..16 were never attempted.
        let attempts = overlay.backend().attempts.lock().unwrap();
        assert_eq!(attempts.len(), 3);
        assert_eq!(
            report
                .results
                .iter()
                .filter(|(_, o)| matches!(o, FieldOutcome::Skipped))
                .count(),
            HOMEPAGE_FIELDS.len() - 3
        );
        // Keys 1 and 2 stay persisted; the save is not rolled back.
        let stored = overlay.backend().stored.lock().unwrap();
        assert!(stored.contains_key(HOMEPAGE_FIELDS[0].key));
        assert!(stored.contains_key(HOMEPAGE_FIELDS[1].key));
    }

    #[actix_web::test]
    async fn best_effort_attempts_every_key() {
        let poison = HOMEPAGE_FIELDS[2].key;
        let overlay = ContentOverlay::new(FlakyStore::poisoned_at(poison), "homepage.");

        let report = save_content(&overlay, all_field_entries(), SavePolicy::BestEffort).await;

        assert_eq!(report.saved_count(), HOMEPAGE_FIELDS.len() - 1);
        let attempts = overlay.backend().attempts.lock().unwrap();
        assert_eq!(attempts.len(), HOMEPAGE_FIELDS.len());
    }

    #[actix_web::test]
    async fn malformed_key_fails_without_reaching_the_store() {
        let overlay = ContentOverlay::new(FlakyStore::poisoned_at("none"), "homepage.");
        let entries = vec![ContentEntry {
            key: "Homepage Brand".to_string(),
            value: "Aurum".to_string(),
        }];

        let report = save_content(&overlay, entries, SavePolicy::BestEffort).await;

        assert_eq!(report.saved_count(), 0);
        let (failed_key, _) = report.first_failure().unwrap();
        assert_eq!(failed_key, "Homepage Brand");
        assert!(overlay.backend().attempts.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn editor_page_initializes_from_overlay_with_empty_values() {
        let overlay = ContentOverlay::new(FlakyStore::poisoned_at("none"), "homepage.");
        let page = load_editor_page(&overlay).await;

        assert_eq!(page.fields.len(), HOMEPAGE_FIELDS.len());
        assert!(page.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(page.fields[0].placeholder, "Aurum Estates");
    }
}
