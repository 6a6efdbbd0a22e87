pub mod config;
pub mod error;
pub mod parser;
pub mod remote;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{Result, SoapboxError};
pub use parser::parse_submission;
pub use remote::{FeedbackApi, HttpFeedbackApi};
pub use store::{FeedbackStore, next_feedback_id};
pub use types::{FeedbackItem, FeedbackPage};
