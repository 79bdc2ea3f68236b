//! Keyword commands of the client detail page.
//!
//! Delete and status change are applied to the local collection before the request
//! and rolled back if it fails. Add, import and clear touch local state only after
//! the backend acknowledged them.

use contracts::domain::a002_keyword::aggregate::{BulkKeywordsResponse, Keyword, KeywordStatus};
use contracts::domain::a002_keyword::collection::KeywordCollection;
use contracts::domain::a002_keyword::csv_import::parse_keyword_csv;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

use super::api::KeywordApi;
use crate::shared::date_utils::format_date_opt;
use crate::shared::export::CsvExportable;

pub const ADD_FAILED: &str = "Impossibile aggiungere la keyword.";
pub const DELETE_FAILED: &str = "Impossibile eliminare la keyword.";
pub const STATUS_FAILED: &str = "Impossibile aggiornare lo stato della keyword.";
pub const CLEAR_FAILED: &str = "Impossibile svuotare le keyword.";
pub const IMPORT_FAILED: &str = "Importazione keyword non riuscita.";
pub const IMPORT_EMPTY: &str = "Nessuna keyword valida trovata nel file.";

/// Holder of the local keyword collection.
pub trait KeywordStore {
    /// Run `f` on the collection; `None` if the store is gone (e.g. page disposed).
    fn modify<R>(&self, f: impl FnOnce(&mut KeywordCollection) -> R) -> Option<R>;
}

impl KeywordStore for RwSignal<KeywordCollection> {
    fn modify<R>(&self, f: impl FnOnce(&mut KeywordCollection) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Outcome of [`add_keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Blank input, nothing sent.
    Ignored,
    Added,
}

pub async fn add_keyword<A: KeywordApi + ?Sized>(
    api: &A,
    client_id: &str,
    input: &str,
) -> Result<AddOutcome, ApiError> {
    let keyword = input.trim();
    if keyword.is_empty() {
        return Ok(AddOutcome::Ignored);
    }
    api.add_keyword(client_id, keyword)
        .await
        .map_err(|e| e.with_context(ADD_FAILED))?;
    Ok(AddOutcome::Added)
}

pub async fn delete_keyword<A, S>(
    api: &A,
    store: &S,
    client_id: &str,
    keyword_id: &str,
) -> Result<(), ApiError>
where
    A: KeywordApi + ?Sized,
    S: KeywordStore,
{
    let Some(pending) = store.modify(|c| c.remove(keyword_id)).flatten() else {
        log::debug!("Keyword {} not in local collection, nothing to delete", keyword_id);
        return Ok(());
    };
    if let Err(e) = api.delete_keyword(client_id, keyword_id).await {
        log::warn!("Rolling back deletion of keyword {}", keyword_id);
        store.modify(|c| c.rollback(pending));
        return Err(e.with_context(DELETE_FAILED));
    }
    Ok(())
}

pub async fn change_status<A, S>(
    api: &A,
    store: &S,
    client_id: &str,
    keyword_id: &str,
    status: KeywordStatus,
) -> Result<(), ApiError>
where
    A: KeywordApi + ?Sized,
    S: KeywordStore,
{
    let unchanged = store
        .modify(|c| c.get(keyword_id).map(|k| k.status == status))
        .flatten()
        .unwrap_or(true);
    if unchanged {
        return Ok(());
    }
    let Some(pending) = store.modify(|c| c.set_status(keyword_id, status)).flatten() else {
        return Ok(());
    };
    if let Err(e) = api.update_keyword_status(client_id, keyword_id, status).await {
        log::warn!("Rolling back status change of keyword {}", keyword_id);
        store.modify(|c| c.rollback(pending));
        return Err(e.with_context(STATUS_FAILED));
    }
    Ok(())
}

pub async fn clear_keywords<A, S>(api: &A, store: &S, client_id: &str) -> Result<(), ApiError>
where
    A: KeywordApi + ?Sized,
    S: KeywordStore,
{
    api.clear_keywords(client_id)
        .await
        .map_err(|e| e.with_context(CLEAR_FAILED))?;
    store.modify(|c| c.clear());
    Ok(())
}

/// Parse an uploaded file and submit its keywords in one bulk request.
pub async fn import_keywords<A: KeywordApi + ?Sized>(
    api: &A,
    client_id: &str,
    file_text: &str,
) -> Result<BulkKeywordsResponse, ApiError> {
    let keywords = parse_keyword_csv(file_text);
    if keywords.is_empty() {
        return Err(ApiError::validation(IMPORT_EMPTY));
    }
    log::debug!("Importing {} keywords", keywords.len());
    api.bulk_add_keywords(client_id, &keywords)
        .await
        .map_err(|e| e.with_context(IMPORT_FAILED))
}

/// User-facing summary of a bulk import.
pub fn import_summary(result: &BulkKeywordsResponse) -> String {
    format!(
        "Importate {} keyword, {} saltate perché duplicate.",
        result.added, result.skipped
    )
}

impl CsvExportable for Keyword {
    fn headers() -> Vec<&'static str> {
        vec!["keyword", "stato", "creata il"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.keyword.clone(),
            self.status.display_name().to_string(),
            format_date_opt(self.created_at.as_deref()),
        ]
    }
}

/// File name of the keyword export, e.g. `keyword-acme-srl.csv`.
pub fn export_file_name(client_name: &str) -> String {
    let slug: String = client_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "keyword.csv".to_string()
    } else {
        format!("keyword-{}.csv", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{Call, FakeBackend};
    use crate::shared::export::build_csv;
    use futures::executor::block_on;
    use std::cell::RefCell;

    impl KeywordStore for RefCell<KeywordCollection> {
        fn modify<R>(&self, f: impl FnOnce(&mut KeywordCollection) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    fn kw(id: &str, status: KeywordStatus) -> Keyword {
        Keyword {
            id: id.into(),
            keyword: format!("keyword {id}"),
            status,
            created_at: None,
        }
    }

    fn store() -> RefCell<KeywordCollection> {
        RefCell::new(KeywordCollection::new(vec![
            kw("k1", KeywordStatus::Backlog),
            kw("k2", KeywordStatus::Planned),
            kw("k3", KeywordStatus::Written),
        ]))
    }

    fn ids(store: &RefCell<KeywordCollection>) -> Vec<String> {
        store.borrow().items().iter().map(|k| k.id.clone()).collect()
    }

    #[test]
    fn test_blank_keyword_issues_no_request() {
        let backend = FakeBackend::new();
        for input in ["", "   ", "\t"] {
            let outcome = block_on(add_keyword(&backend, "c1", input)).unwrap();
            assert_eq!(outcome, AddOutcome::Ignored);
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_add_trims_input() {
        let backend = FakeBackend::new();
        block_on(add_keyword(&backend, "c1", "  scarpe running ")).unwrap();
        assert_eq!(
            backend.calls(),
            vec![Call::AddKeyword {
                client_id: "c1".into(),
                keyword: "scarpe running".into()
            }]
        );
    }

    #[test]
    fn test_delete_removes_only_that_keyword_with_one_request() {
        let backend = FakeBackend::new();
        let store = store();
        block_on(delete_keyword(&backend, &store, "c1", "k2")).unwrap();
        assert_eq!(ids(&store), vec!["k1", "k3"]);
        assert_eq!(
            backend.calls(),
            vec![Call::DeleteKeyword {
                client_id: "c1".into(),
                keyword_id: "k2".into()
            }]
        );
    }

    #[test]
    fn test_failed_delete_rolls_back() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Network("offline".into()));
        let store = store();
        let err = block_on(delete_keyword(&backend, &store, "c1", "k2")).unwrap_err();
        assert!(err.to_string().starts_with(DELETE_FAILED));
        assert_eq!(ids(&store), vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn test_unknown_keyword_is_not_sent() {
        let backend = FakeBackend::new();
        let store = store();
        block_on(delete_keyword(&backend, &store, "c1", "k9")).unwrap();
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_status_change_any_direction() {
        let backend = FakeBackend::new();
        let store = store();
        block_on(change_status(&backend, &store, "c1", "k3", KeywordStatus::Backlog)).unwrap();
        assert_eq!(store.borrow().get("k3").unwrap().status, KeywordStatus::Backlog);
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_failed_status_change_rolls_back() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Http {
            status: 500,
            message: "boom".into(),
        });
        let store = store();
        let err =
            block_on(change_status(&backend, &store, "c1", "k1", KeywordStatus::Published)).unwrap_err();
        assert_eq!(err.to_string(), format!("{STATUS_FAILED} (boom)"));
        assert_eq!(store.borrow().get("k1").unwrap().status, KeywordStatus::Backlog);
    }

    #[test]
    fn test_same_status_is_not_sent() {
        let backend = FakeBackend::new();
        let store = store();
        block_on(change_status(&backend, &store, "c1", "k2", KeywordStatus::Planned)).unwrap();
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_clear_applies_after_ack_only() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Network("offline".into()));
        let store = store();
        assert!(block_on(clear_keywords(&backend, &store, "c1")).is_err());
        assert_eq!(store.borrow().len(), 3);

        block_on(clear_keywords(&backend, &store, "c1")).unwrap();
        assert!(store.borrow().is_empty());
    }

    #[test]
    fn test_import_sends_parsed_keywords() {
        let backend = FakeBackend::new();
        let id = backend.seed_client("Acme");
        let result =
            block_on(import_keywords(&backend, &id, "keyword\nseo, tools\n\"local seo\"")).unwrap();
        assert_eq!(result.added, 2);
        assert_eq!(
            backend.calls(),
            vec![Call::BulkAddKeywords {
                client_id: id,
                keywords: vec!["seo".into(), "local seo".into()]
            }]
        );
    }

    #[test]
    fn test_import_reports_duplicates() {
        let backend = FakeBackend::new();
        let id = backend.seed_client("Acme");
        block_on(add_keyword(&backend, &id, "seo")).unwrap();
        let result = block_on(import_keywords(&backend, &id, "seo\nsem\n")).unwrap();
        assert_eq!(result, BulkKeywordsResponse { added: 1, skipped: 1 });
        assert_eq!(
            import_summary(&result),
            "Importate 1 keyword, 1 saltate perché duplicate."
        );
    }

    #[test]
    fn test_import_of_header_only_file_is_rejected_locally() {
        let backend = FakeBackend::new();
        let err = block_on(import_keywords(&backend, "c1", "keyword\n\n")).unwrap_err();
        assert_eq!(err, ApiError::validation(IMPORT_EMPTY));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_keyword_export_rows() {
        let mut k = kw("k1", KeywordStatus::BriefDone);
        k.keyword = "impianti; elettrici".into();
        k.created_at = Some("2024-03-15T10:00:00".into());
        let csv = build_csv(&[k]);
        assert!(csv.contains("keyword;stato;creata il\n"));
        assert!(csv.contains("\"impianti; elettrici\";Brief pronto;15/03/2024\n"));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Acme Srl"), "keyword-acme-srl.csv");
        assert_eq!(export_file_name("  Caffè & Co. "), "keyword-caffè-co.csv");
        assert_eq!(export_file_name("!!"), "keyword.csv");
    }
}
