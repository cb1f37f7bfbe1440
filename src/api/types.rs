use serde::Serialize;

/// Body of the explanation request: the sole JSON field the endpoint
/// accepts. The acronym is caller-supplied text carried verbatim; no
/// trimming, case folding, or shape validation happens at this layer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExplainRequest<'a> {
    pub acronym: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contract test: the endpoint expects exactly `{"acronym": ...}`.
    #[test]
    fn test_explain_request_serialization() {
        let req = ExplainRequest { acronym: "API" };
        let serialized = serde_json::to_string(&req).unwrap();
        assert_eq!(serialized, r#"{"acronym":"API"}"#);
    }

    #[test]
    fn test_explain_request_carries_input_verbatim() {
        // Whitespace and case are the presentation layer's business.
        let req = ExplainRequest { acronym: " gpu \t" };
        let serialized = serde_json::to_string(&req).unwrap();
        assert_eq!(serialized, r#"{"acronym":" gpu \t"}"#);
    }

    #[test]
    fn test_explain_request_escapes_json_metacharacters() {
        let req = ExplainRequest {
            acronym: "A\"B\\C",
        };
        let serialized = serde_json::to_string(&req).unwrap();
        let round_trip: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(round_trip["acronym"], "A\"B\\C");
    }
}
