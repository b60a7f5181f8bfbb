use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 候選地點，`key` 以外的欄位原樣保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub key: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// 決策問題；`options` 每次請求重新計算，其餘欄位為靜態背景資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(flatten)]
    pub background: Map<String, Value>,
    #[serde(default)]
    pub options: Vec<Place>,
}

impl Problem {
    /// 以背景資料加上指定的 options 建立新的 Problem，不修改原本的模板
    pub fn with_options(&self, options: Vec<Place>) -> Problem {
        Problem {
            background: self.background.clone(),
            options,
        }
    }
}

/// 啟動時載入一次的靜態資料
#[derive(Debug, Clone)]
pub struct Datasets {
    pub places: Vec<Place>,
    pub problem: Problem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Concept,
    Document,
}

/// 標籤搜尋結果，`type` 已正規化為 concept / document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// 查詢參數。出現一次的 key 對應字串，重複出現的 key 對應字串陣列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(pub Map<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for QueryParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
