use crate::domain::model::Datasets;
use crate::domain::ports::{ConceptSearch, TradeoffAnalytics, ViewRenderer};
use std::sync::Arc;

/// 每個請求共用的唯讀狀態；外部服務用戶端在啟動時注入
#[derive(Clone)]
pub struct AppState {
    pub concepts: Arc<dyn ConceptSearch>,
    pub tradeoff: Arc<dyn TradeoffAnalytics>,
    pub views: Arc<dyn ViewRenderer>,
    pub datasets: Arc<Datasets>,
    pub corpus: Arc<str>,
}

impl AppState {
    pub fn new(
        concepts: Arc<dyn ConceptSearch>,
        tradeoff: Arc<dyn TradeoffAnalytics>,
        views: Arc<dyn ViewRenderer>,
        datasets: Datasets,
        corpus: &str,
    ) -> Self {
        Self {
            concepts,
            tradeoff,
            views,
            datasets: Arc::new(datasets),
            corpus: Arc::from(corpus),
        }
    }
}
