use crate::domain::model::{Datasets, Place, Problem};
use std::collections::HashSet;

/// 依資料集原本的順序，保留 `key` 在清單中的地點
pub fn filter_places(places: &[Place], locations: &[String]) -> Vec<Place> {
    let wanted: HashSet<&str> = locations.iter().map(String::as_str).collect();
    places
        .iter()
        .filter(|place| wanted.contains(place.key.as_str()))
        .cloned()
        .collect()
}

/// 每次請求都建立新的 Problem，共用的模板保持不變
pub fn build_problem(datasets: &Datasets, locations: &[String]) -> Problem {
    let options = filter_places(&datasets.places, locations);
    tracing::debug!(
        "🗺️ Problem built with {} of {} places",
        options.len(),
        datasets.places.len()
    );
    datasets.problem.with_options(options)
}
