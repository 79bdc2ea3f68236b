//! In-memory copy of a client's keywords held by the detail page.
//!
//! Single-keyword mutations (delete, status change) are applied optimistically and
//! return a [`PendingChange`] that restores the previous state if the backend refuses
//! the change. Local and server state therefore never silently diverge.

use super::aggregate::{Keyword, KeywordStatus};

/// Status filter of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(KeywordStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: KeywordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    /// Value used by the filter `<select>`: `all` or a status code.
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.code(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        KeywordStatus::from_code(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }
}

/// Per-status counters computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    by_status: [usize; 5],
}

impl StatusCounts {
    pub fn get(&self, status: KeywordStatus) -> usize {
        self.by_status[status.index()]
    }

    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total,
            StatusFilter::Only(s) => self.get(s),
        }
    }
}

/// Undo record of an optimistic mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Removed { index: usize, keyword: Keyword },
    StatusChanged { id: String, previous: KeywordStatus },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCollection {
    items: Vec<Keyword>,
}

impl KeywordCollection {
    pub fn new(items: Vec<Keyword>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Keyword] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Keyword> {
        self.items.iter().find(|k| k.id == id)
    }

    pub fn replace_all(&mut self, items: Vec<Keyword>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.items.len(),
            ..Default::default()
        };
        for k in &self.items {
            counts.by_status[k.status.index()] += 1;
        }
        counts
    }

    pub fn filtered(&self, filter: StatusFilter) -> Vec<Keyword> {
        self.items
            .iter()
            .filter(|k| filter.matches(k.status))
            .cloned()
            .collect()
    }

    /// Optimistically remove a keyword. `None` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> Option<PendingChange> {
        let index = self.items.iter().position(|k| k.id == id)?;
        let keyword = self.items.remove(index);
        Some(PendingChange::Removed { index, keyword })
    }

    /// Optimistically change a status. `None` when the id is unknown.
    pub fn set_status(&mut self, id: &str, status: KeywordStatus) -> Option<PendingChange> {
        let keyword = self.items.iter_mut().find(|k| k.id == id)?;
        let previous = keyword.status;
        keyword.status = status;
        Some(PendingChange::StatusChanged {
            id: id.to_string(),
            previous,
        })
    }

    /// Undo an optimistic mutation after the backend rejected it.
    pub fn rollback(&mut self, change: PendingChange) {
        match change {
            PendingChange::Removed { index, keyword } => {
                if self.items.iter().any(|k| k.id == keyword.id) {
                    return;
                }
                let index = index.min(self.items.len());
                self.items.insert(index, keyword);
            }
            PendingChange::StatusChanged { id, previous } => {
                if let Some(k) = self.items.iter_mut().find(|k| k.id == id) {
                    k.status = previous;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(id: &str, status: KeywordStatus) -> Keyword {
        Keyword {
            id: id.into(),
            keyword: format!("kw {id}"),
            status,
            created_at: None,
        }
    }

    fn sample() -> KeywordCollection {
        KeywordCollection::new(vec![
            kw("1", KeywordStatus::Backlog),
            kw("2", KeywordStatus::Planned),
            kw("3", KeywordStatus::Backlog),
            kw("4", KeywordStatus::Published),
        ])
    }

    #[test]
    fn test_counts_single_pass() {
        let counts = sample().counts();
        assert_eq!(counts.total, 4);
        assert_eq!(counts.get(KeywordStatus::Backlog), 2);
        assert_eq!(counts.get(KeywordStatus::Planned), 1);
        assert_eq!(counts.get(KeywordStatus::BriefDone), 0);
        assert_eq!(counts.get(KeywordStatus::Published), 1);
    }

    #[test]
    fn test_filter_sizes_match_counts() {
        let c = sample();
        let counts = c.counts();
        assert_eq!(c.filtered(StatusFilter::All).len(), c.len());
        for status in KeywordStatus::ALL {
            let filter = StatusFilter::Only(status);
            assert_eq!(c.filtered(filter).len(), counts.for_filter(filter));
        }
    }

    #[test]
    fn test_remove_only_that_id_and_rollback_restores_position() {
        let mut c = sample();
        let pending = c.remove("2").unwrap();
        assert_eq!(c.len(), 3);
        assert!(c.get("2").is_none());
        assert!(c.get("1").is_some() && c.get("3").is_some());

        c.rollback(pending);
        let ids: Vec<_> = c.items().iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut c = sample();
        assert!(c.remove("99").is_none());
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_any_status_transition_allowed() {
        let mut c = sample();
        let pending = c.set_status("4", KeywordStatus::Backlog).unwrap();
        assert_eq!(c.get("4").unwrap().status, KeywordStatus::Backlog);
        c.rollback(pending);
        assert_eq!(c.get("4").unwrap().status, KeywordStatus::Published);
    }

    #[test]
    fn test_rollback_after_reload_does_not_duplicate() {
        let mut c = sample();
        let pending = c.remove("1").unwrap();
        c.replace_all(sample().items().to_vec());
        c.rollback(pending);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_filter_codes() {
        assert_eq!(StatusFilter::from_code("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_code("written"),
            StatusFilter::Only(KeywordStatus::Written)
        );
        assert_eq!(StatusFilter::from_code("???"), StatusFilter::All);
    }
}
