// Application layer: assembles adapters into the server state at startup.

use crate::adapters::{
    storage::load_datasets, ConceptInsightsClient, LocalStorage, TemplateViews,
    TradeoffAnalyticsClient,
};
use crate::config::toml_config::TomlConfig;
use crate::server::AppState;
use crate::utils::error::Result;
use std::sync::Arc;

/// 依設定建立外部服務用戶端、載入資料集與模板
pub async fn build_state(settings: &TomlConfig) -> Result<AppState> {
    let concepts = ConceptInsightsClient::new(&settings.concept_insights.service)?;
    let tradeoff = TradeoffAnalyticsClient::new(&settings.tradeoff_analytics)?;

    let storage = LocalStorage::new(settings.data.dir.clone());
    let datasets = load_datasets(&storage, &settings.data.places, &settings.data.problem).await?;

    let views = TemplateViews::load(&settings.server.views_dir)?;

    Ok(AppState::new(
        Arc::new(concepts),
        Arc::new(tradeoff),
        Arc::new(views),
        datasets,
        settings.corpus(),
    ))
}
