//! Remote sync against the feedback collection endpoint.
//!
//! All network access in the crate goes through the [`FeedbackApi`] trait;
//! [`HttpFeedbackApi`] is the production implementation.

pub mod http;

use crate::error::Result;
use crate::types::FeedbackItem;

pub use http::HttpFeedbackApi;

/// Interface to the remote feedback collection.
///
/// The store only talks to the endpoint through this trait, so tests can
/// substitute a scripted implementation, and a backend that assigns ids
/// server-side can replace the client-side rule without touching callers.
pub trait FeedbackApi: Send + Sync {
    /// Fetch the full collection.
    fn list_feedback(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<FeedbackItem>>> + Send;

    /// Append one item to the collection.
    fn create_feedback(
        &self,
        item: &FeedbackItem,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
