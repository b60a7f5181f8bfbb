use crate::domain::model::QueryParams;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// 概念搜尋服務（標籤搜尋與相關文件）
#[async_trait]
pub trait ConceptSearch: Send + Sync {
    /// 以前綴比對標籤，回傳服務的原始 JSON 回應
    async fn search_by_label(&self, params: &QueryParams) -> Result<Value>;

    /// 取得與指定概念相關的文件，回傳服務的原始 JSON 回應
    async fn related_documents(&self, params: &QueryParams) -> Result<Value>;
}

/// 權衡分析服務
#[async_trait]
pub trait TradeoffAnalytics: Send + Sync {
    async fn dilemmas(&self, problem: &Value) -> Result<Value>;
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &Value) -> Result<String>;
}
