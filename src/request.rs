//! Search request parameters.

use serde::{Deserialize, Serialize};

/// Parameters for any Serper search, shared by all verticals.
///
/// Only the query `q` is required. Optional fields are omitted from the
/// outgoing payload when unset, so the upstream service applies its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// The search terms.
    pub q: String,
    /// Country code (e.g., "us").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
    /// Interface language code (e.g., "en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// Number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
    /// Whether the service may autocorrect the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocorrect: Option<bool>,
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Result-type filter.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    /// Location to search from (e.g., "London, United Kingdom").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Time-range filter (e.g., "qdr:w" for past week).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tbs: Option<String>,
    /// Safe-search mode (e.g., "active" or "off").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe: Option<String>,
}

impl SearchRequest {
    /// Creates a new request with the given search terms.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    /// Sets the country code.
    pub fn with_gl(mut self, gl: impl Into<String>) -> Self {
        self.gl = Some(gl.into());
        self
    }

    /// Sets the language code.
    pub fn with_hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = Some(hl.into());
        self
    }

    /// Sets the number of results.
    pub fn with_num(mut self, num: u32) -> Self {
        self.num = Some(num);
        self
    }

    /// Sets the autocorrect flag.
    pub fn with_autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the result-type filter.
    pub fn with_search_type(mut self, search_type: impl Into<String>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the time-range filter.
    pub fn with_tbs(mut self, tbs: impl Into<String>) -> Self {
        self.tbs = Some(tbs.into());
        self
    }

    /// Sets the safe-search mode.
    pub fn with_safe(mut self, safe: impl Into<String>) -> Self {
        self.safe = Some(safe.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_new() {
        let request = SearchRequest::new("test query");
        assert_eq!(request.q, "test query");
        assert!(request.gl.is_none());
        assert!(request.hl.is_none());
        assert!(request.num.is_none());
        assert!(request.autocorrect.is_none());
        assert!(request.page.is_none());
        assert!(request.search_type.is_none());
        assert!(request.location.is_none());
        assert!(request.tbs.is_none());
        assert!(request.safe.is_none());
    }

    #[test]
    fn test_search_request_builder_chain() {
        let request = SearchRequest::new("rust programming")
            .with_gl("us")
            .with_hl("en")
            .with_num(20)
            .with_autocorrect(false)
            .with_page(2)
            .with_search_type("search")
            .with_location("Austin, Texas")
            .with_tbs("qdr:w")
            .with_safe("active");

        assert_eq!(request.q, "rust programming");
        assert_eq!(request.gl, Some("us".to_string()));
        assert_eq!(request.hl, Some("en".to_string()));
        assert_eq!(request.num, Some(20));
        assert_eq!(request.autocorrect, Some(false));
        assert_eq!(request.page, Some(2));
        assert_eq!(request.search_type, Some("search".to_string()));
        assert_eq!(request.location, Some("Austin, Texas".to_string()));
        assert_eq!(request.tbs, Some("qdr:w".to_string()));
        assert_eq!(request.safe, Some("active".to_string()));
    }

    #[test]
    fn test_serialization_omits_unset_fields() {
        let request = SearchRequest::new("test");
        let json = serde_json::to_value(&request).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 1);
        assert_eq!(obj["q"], "test");
    }

    #[test]
    fn test_serialization_includes_set_fields() {
        let request = SearchRequest::new("test").with_gl("de").with_num(10);
        let json = serde_json::to_value(&request).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["q"], "test");
        assert_eq!(obj["gl"], "de");
        assert_eq!(obj["num"], 10);
    }

    #[test]
    fn test_type_field_wire_name() {
        let request = SearchRequest::new("test").with_search_type("news");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["type"], "news");
        assert!(json.get("search_type").is_none());
    }

    #[test]
    fn test_autocorrect_false_is_serialized() {
        // An explicit `false` is distinct from "unset" and must reach the wire.
        let request = SearchRequest::new("test").with_autocorrect(false);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["autocorrect"], false);
    }

    #[test]
    fn test_round_trip() {
        let request = SearchRequest::new("coffee shops")
            .with_gl("fr")
            .with_hl("fr")
            .with_page(3)
            .with_location("Paris, France")
            .with_tbs("qdr:d");

        let json = serde_json::to_string(&request).unwrap();
        let decoded: SearchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let decoded: SearchRequest = serde_json::from_str(r#"{"q":"test"}"#).unwrap();
        assert_eq!(decoded, SearchRequest::new("test"));
    }
}
