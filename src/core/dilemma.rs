use crate::domain::ports::TradeoffAnalytics;
use crate::utils::error::Result;
use serde_json::Value;

/// 原樣轉送請求內容，回應也不做任何處理
pub async fn forward_dilemma(client: &dyn TradeoffAnalytics, problem: &Value) -> Result<Value> {
    tracing::debug!("⚖️ Forwarding dilemma request to tradeoff analytics");
    client.dilemmas(problem).await
}
