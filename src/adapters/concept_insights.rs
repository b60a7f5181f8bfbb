use crate::adapters::http::ServiceConnection;
use crate::config::toml_config::ServiceConfig;
use crate::core::params::to_query_pairs;
use crate::domain::model::QueryParams;
use crate::domain::ports::ConceptSearch;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::validate_corpus;
use async_trait::async_trait;
use serde_json::Value;

const SERVICE_NAME: &str = "concept-insights";

/// Concept Insights v2 的 HTTP 用戶端
#[derive(Debug, Clone)]
pub struct ConceptInsightsClient {
    connection: ServiceConnection,
}

impl ConceptInsightsClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            connection: ServiceConnection::new(SERVICE_NAME, config)?,
        })
    }

    /// `corpus` 會成為路徑的一部分，不放在查詢字串裡
    fn split_corpus(params: &QueryParams) -> Result<(String, QueryParams)> {
        let mut rest = params.clone();
        let corpus = match rest.remove("corpus") {
            Some(Value::String(corpus)) => corpus,
            Some(other) => {
                return Err(AdvisorError::malformed(format!(
                    "corpus must be a single value, got {}",
                    other
                )))
            }
            None => return Err(AdvisorError::malformed("corpus is required")),
        };
        validate_corpus("corpus", &corpus).map_err(|e| AdvisorError::malformed(e.to_string()))?;
        Ok((corpus, rest))
    }

    async fn corpus_get(&self, operation: &str, params: &QueryParams) -> Result<Value> {
        let (corpus, query) = Self::split_corpus(params)?;
        let path = format!("/v2{}/{}", corpus, operation);
        tracing::debug!("📡 {}: GET {}", SERVICE_NAME, path);

        let request = self.connection.get(&path).query(&to_query_pairs(&query));
        self.connection.send_json(request).await
    }
}

#[async_trait]
impl ConceptSearch for ConceptInsightsClient {
    async fn search_by_label(&self, params: &QueryParams) -> Result<Value> {
        self.corpus_get("label_search", params).await
    }

    async fn related_documents(&self, params: &QueryParams) -> Result<Value> {
        self.corpus_get("related_documents", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config_for(server: &MockServer) -> ServiceConfig {
        ServiceConfig {
            endpoint: server.url("/concept-insights/api"),
            username: Some("ci-user".to_string()),
            password: Some("ci-pass".to_string()),
            timeout_seconds: Some(5),
        }
    }

    #[tokio::test]
    async fn test_search_by_label_builds_corpus_path_and_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/concept-insights/api/v2/corpora/acct/locations/label_search")
                .query_param("query", "Par")
                .query_param("prefix", "true")
                .query_param("limit", "4")
                .query_param("concept_fields", r#"{"abstract":1,"type":1}"#)
                .header_exists("authorization");
            then.status(200)
                .json_body(json!({"matches": [{"label": "Paris", "type": "concept"}]}));
        });

        let client = ConceptInsightsClient::new(&config_for(&server)).unwrap();
        let mut params = QueryParams::new();
        params.insert("corpus", "/corpora/acct/locations");
        params.insert("query", "Par");
        params.insert("prefix", true);
        params.insert("limit", 4);
        params.insert("concept_fields", r#"{"abstract":1,"type":1}"#);

        let response = client.search_by_label(&params).await.unwrap();

        mock.assert();
        assert_eq!(response["matches"][0]["label"], json!("Paris"));
    }

    #[tokio::test]
    async fn test_related_documents_empty_body_is_null() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/concept-insights/api/v2/corpora/acct/locations/related_documents")
                .query_param("ids", r#"["a"]"#);
            then.status(200);
        });

        let client = ConceptInsightsClient::new(&config_for(&server)).unwrap();
        let mut params = QueryParams::new();
        params.insert("corpus", "/corpora/acct/locations");
        params.insert("ids", r#"["a"]"#);

        let response = client.related_documents(&params).await.unwrap();

        mock.assert();
        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(401).body("Not Authorized");
        });

        let client = ConceptInsightsClient::new(&config_for(&server)).unwrap();
        let mut params = QueryParams::new();
        params.insert("corpus", "/corpora/acct/locations");

        let err = client.search_by_label(&params).await.unwrap_err();
        match err {
            AdvisorError::UpstreamStatus { service, status, body } => {
                assert_eq!(service, SERVICE_NAME);
                assert_eq!(status, 401);
                assert_eq!(body, "Not Authorized");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_corpus_is_rejected_before_sending() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        });

        let client = ConceptInsightsClient::new(&config_for(&server)).unwrap();
        let mut params = QueryParams::new();
        params.insert("corpus", "X");

        let err = client.related_documents(&params).await.unwrap_err();

        assert!(matches!(err, AdvisorError::MalformedInput { .. }));
        mock.assert_hits(0);
    }
}
