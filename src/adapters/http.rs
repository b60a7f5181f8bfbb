use crate::config::toml_config::ServiceConfig;
use crate::utils::error::{AdvisorError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// 回應內容過長時，錯誤訊息只保留前面這些字元
const MAX_ERROR_BODY_CHARS: usize = 512;

/// 外部服務的共用連線資訊
#[derive(Debug, Clone)]
pub struct ServiceConnection {
    pub name: &'static str,
    client: Client,
    endpoint: String,
    credentials: Option<(String, String)>,
}

impl ServiceConnection {
    pub fn new(name: &'static str, config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        let credentials = config
            .credentials()?
            .map(|(user, pass)| (user.to_string(), pass.to_string()));

        Ok(Self {
            name,
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => request.basic_auth(user, Some(pass)),
            None => request,
        }
    }

    /// 送出請求並解析 JSON 回應；非 2xx 視為上游錯誤，空白回應視為 null
    pub async fn send_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        tracing::debug!("📡 {}: API response status: {}", self.name, response.status());
        self.read_json(response).await
    }

    async fn read_json(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("📡 {}: request failed with status {}", self.name, status);
            return Err(AdvisorError::UpstreamStatus {
                service: self.name.to_string(),
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
