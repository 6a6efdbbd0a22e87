//! Free-text submission parsing.
//!
//! A submission encodes its target company as a hashtag token: the first
//! whitespace-delimited word starting with `#`. Parsing is pure and
//! synchronous; the only failure mode is a missing or marker-only tag.

use crate::error::{Result, SoapboxError};
use crate::types::FeedbackItem;

/// Marker that introduces the company tag inside a submission.
const TAG_MARKER: char = '#';

/// Parse a free-text submission into a candidate feedback item.
///
/// The company is the tag with the marker stripped, lowercased to match the
/// filter comparison; the badge letter is the character immediately following
/// the marker, uppercased. The id is left at zero for the caller to assign.
pub fn parse_submission(text: &str) -> Result<FeedbackItem> {
    let tag = text
        .split_whitespace()
        .find(|token| token.starts_with(TAG_MARKER))
        .ok_or(SoapboxError::MissingCompanyTag)?;

    // A bare "#" carries no company name.
    let company = tag.strip_prefix(TAG_MARKER).unwrap_or_default();
    let first = company
        .chars()
        .next()
        .ok_or(SoapboxError::MissingCompanyTag)?;
    let badge_letter = first.to_uppercase().next().unwrap_or(first);

    Ok(FeedbackItem {
        id: 0,
        text: text.to_string(),
        company: company.to_lowercase(),
        badge_letter,
        upvote_count: 0,
        days_ago: 0,
    })
}
