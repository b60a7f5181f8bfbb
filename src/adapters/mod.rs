// Adapters layer: concrete implementations for external systems (analytics services, storage, views).

pub mod concept_insights;
pub mod http;
pub mod storage;
pub mod tradeoff;
pub mod views;

pub use concept_insights::ConceptInsightsClient;
pub use storage::LocalStorage;
pub use tradeoff::TradeoffAnalyticsClient;
pub use views::TemplateViews;
