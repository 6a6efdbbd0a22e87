use serde::{Deserialize, Serialize};
use unicase::UniCase;

/// A single feedback record, as exchanged with the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    /// Unique within the collection; assigned client-side for new items.
    pub id: u64,
    /// Full submitted text, including the embedded hashtag token.
    pub text: String,
    /// Company name from the hashtag token, marker stripped, lowercased.
    pub company: String,
    /// Display initial: the character following the marker, uppercased.
    pub badge_letter: char,
    pub upvote_count: u32,
    /// Age in days; server-assigned for pre-existing items.
    pub days_ago: u32,
}

/// Response envelope for listing the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPage {
    pub feedbacks: Vec<FeedbackItem>,
}

/// Normalize a company name for storage and filter comparison.
pub fn normalize_company(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a stored company name matches a filter selector, ignoring
/// surrounding whitespace and case.
pub fn company_matches(company: &str, selector: &str) -> bool {
    UniCase::new(company.trim()) == UniCase::new(selector.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> FeedbackItem {
        FeedbackItem {
            id: 7,
            text: "Great support #Acme team!".to_string(),
            company: "acme".to_string(),
            badge_letter: 'A',
            upvote_count: 3,
            days_ago: 2,
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let value = serde_json::to_value(item()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("badgeLetter"));
        assert!(object.contains_key("upvoteCount"));
        assert!(object.contains_key("daysAgo"));
        assert_eq!(value["badgeLetter"], "A");
    }

    #[test]
    fn test_page_envelope_roundtrip() {
        let raw = r#"{"feedbacks":[{"id":1,"text":"Love it #Acme","company":"acme","badgeLetter":"A","upvoteCount":0,"daysAgo":0}]}"#;
        let page: FeedbackPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.feedbacks.len(), 1);
        assert_eq!(page.feedbacks[0].company, "acme");
    }

    #[test]
    fn test_company_matches_ignores_case_and_whitespace() {
        assert!(company_matches(" Acme ", "acme"));
        assert!(company_matches("acme", " ACME"));
        assert!(!company_matches("acme", "acme inc"));
    }

    #[test]
    fn test_normalize_company() {
        assert_eq!(normalize_company("  Acme "), "acme");
        assert_eq!(normalize_company(""), "");
    }
}
