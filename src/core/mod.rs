pub mod concepts;
pub mod destination;
pub mod dilemma;
pub mod params;
pub mod problem;

pub use crate::domain::model::{Datasets, Match, MatchKind, Place, Problem, QueryParams};
pub use crate::domain::ports::{ConceptSearch, Storage, TradeoffAnalytics, ViewRenderer};
pub use crate::utils::error::Result;
