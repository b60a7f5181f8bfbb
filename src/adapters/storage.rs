use crate::domain::model::{Datasets, Place, Problem};
use crate::domain::ports::Storage;
use crate::utils::error::{AdvisorError, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

async fn read_json<S: Storage, T: DeserializeOwned>(storage: &S, path: &str) -> Result<T> {
    let bytes = storage.read_file(path).await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AdvisorError::config(format!("Dataset '{}' is invalid: {}", path, e)))
}

/// 啟動時載入地點與問題資料集
pub async fn load_datasets<S: Storage>(
    storage: &S,
    places_path: &str,
    problem_path: &str,
) -> Result<Datasets> {
    let places: Vec<Place> = read_json(storage, places_path).await?;
    let problem: Problem = read_json(storage, problem_path).await?;

    let mut seen = HashSet::new();
    for place in &places {
        if !seen.insert(place.key.as_str()) {
            tracing::warn!("⚠️ Duplicate place key '{}' in {}", place.key, places_path);
        }
    }

    tracing::info!(
        "📂 Loaded {} places from {} and problem template from {}",
        places.len(),
        places_path,
        problem_path
    );

    Ok(Datasets { places, problem })
}
