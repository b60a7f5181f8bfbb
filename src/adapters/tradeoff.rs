use crate::adapters::http::ServiceConnection;
use crate::config::toml_config::ServiceConfig;
use crate::domain::ports::TradeoffAnalytics;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

const SERVICE_NAME: &str = "tradeoff-analytics";

/// Tradeoff Analytics v1 的 HTTP 用戶端
#[derive(Debug, Clone)]
pub struct TradeoffAnalyticsClient {
    connection: ServiceConnection,
}

impl TradeoffAnalyticsClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            connection: ServiceConnection::new(SERVICE_NAME, config)?,
        })
    }
}

#[async_trait]
impl TradeoffAnalytics for TradeoffAnalyticsClient {
    async fn dilemmas(&self, problem: &Value) -> Result<Value> {
        let request = self.connection.post("/v1/dilemmas").json(problem);
        self.connection.send_json(request).await
    }
}
