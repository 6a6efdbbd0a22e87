//! Shared state owner for the feedback collection.
//!
//! [`FeedbackStore`] is the single writer of the in-memory collection and its
//! sync flags. Presentation collaborators read and submit exclusively through
//! this type; nothing else in the application reaches the network.
//!
//! The lock is never held across an await. Concurrent operations therefore
//! interleave freely with last-writer-wins semantics: a slow earlier load can
//! overwrite a faster later one. Loads are not coalesced or sequence-tagged;
//! callers must tolerate the last resolver winning.

use parking_lot::RwLock;

use crate::error::Result;
use crate::parser::parse_submission;
use crate::remote::FeedbackApi;
use crate::types::{FeedbackItem, company_matches, normalize_company};

/// Everything the store owns, behind one lock.
#[derive(Debug, Default)]
struct StoreState {
    items: Vec<FeedbackItem>,
    is_loading: bool,
    error_message: String,
    company_filter: String,
}

/// Client-side id rule: one greater than the largest existing id, 1 for an
/// empty collection. A stand-in for server-side assignment, isolated here so
/// a backend-assigned id can replace it at the one call site in `submit`.
pub fn next_feedback_id(items: &[FeedbackItem]) -> u64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

/// Single owner of the feedback collection, its loading/error flags, and the
/// company filter selector.
pub struct FeedbackStore<A: FeedbackApi> {
    api: A,
    state: RwLock<StoreState>,
}

impl<A: FeedbackApi> FeedbackStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Replace the collection with the server's current state.
    ///
    /// Exactly one of `items` or `error_message` changes per call, and the
    /// loading flag is cleared on every exit path. A failed load leaves
    /// `items` untouched; there is no partial update.
    pub async fn load(&self) {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error_message.clear();
        }

        let result = self.api.list_feedback().await;

        let mut state = self.state.write();
        match result {
            Ok(items) => state.items = items,
            Err(err) => {
                tracing::warn!("failed to load feedback items: {err}");
                state.error_message = err.sync_message();
            }
        }
        state.is_loading = false;
    }

    /// Append one item to the remote collection.
    ///
    /// Never mutates `items`; callers reload to observe the accepted state.
    /// A failure is recorded into `error_message` rather than returned.
    pub async fn create(&self, candidate: &FeedbackItem) {
        if let Err(err) = self.api.create_feedback(candidate).await {
            tracing::warn!("failed to create feedback item: {err}");
            self.state.write().error_message = err.sync_message();
        }
    }

    /// Parse a submission, create it remotely, then reload.
    ///
    /// A missing company tag aborts before any network call and is the only
    /// error returned to the caller, so the form can show inline validation.
    /// Create and load failures land in `error_message` instead, and the
    /// trailing reload runs even when the create failed, so consumers see the
    /// true server state rather than a false local echo.
    pub async fn submit(&self, text: &str) -> Result<()> {
        let next_id = next_feedback_id(&self.state.read().items);

        let mut candidate = parse_submission(text)?;
        candidate.id = next_id;

        self.create(&candidate).await;
        self.load().await;

        Ok(())
    }

    /// Set the company filter selector. An empty name clears filtering.
    /// The selector is stored trimmed and lowercased.
    pub fn select_company(&self, name: &str) {
        self.state.write().company_filter = normalize_company(name);
    }

    /// The full collection, in server order.
    pub fn items(&self) -> Vec<FeedbackItem> {
        self.state.read().items.clone()
    }

    /// The collection narrowed to the selected company, preserving server
    /// order; the full collection when no company is selected.
    pub fn filtered_items(&self) -> Vec<FeedbackItem> {
        let state = self.state.read();
        if state.company_filter.is_empty() {
            return state.items.clone();
        }
        state
            .items
            .iter()
            .filter(|item| company_matches(&item.company, &state.company_filter))
            .cloned()
            .collect()
    }

    /// Distinct companies of the filtered view with occurrence counts,
    /// sorted by count descending (ties by name). Feeds the company facet.
    pub fn company_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for item in self.filtered_items() {
            let name = normalize_company(&item.company);
            match counts.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// Empty when the last sync operation succeeded.
    pub fn error_message(&self) -> String {
        self.state.read().error_message.clone()
    }

    pub fn company_filter(&self) -> String {
        self.state.read().company_filter.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, company: &str) -> FeedbackItem {
        FeedbackItem {
            id,
            text: format!("feedback #{company}"),
            company: company.to_string(),
            badge_letter: company.chars().next().unwrap_or('?'),
            upvote_count: 0,
            days_ago: 0,
        }
    }

    #[test]
    fn test_next_id_empty_collection() {
        assert_eq!(next_feedback_id(&[]), 1);
    }

    #[test]
    fn test_next_id_exceeds_every_existing_id() {
        let items = vec![item(3, "acme"), item(9, "hulu"), item(4, "acme")];
        let next = next_feedback_id(&items);
        assert_eq!(next, 10);
        assert!(items.iter().all(|i| i.id < next));
    }

    #[test]
    fn test_next_id_unordered_ids() {
        let items = vec![item(42, "acme"), item(7, "hulu")];
        assert_eq!(next_feedback_id(&items), 43);
    }
}
