use crate::domain::model::QueryParams;
use crate::utils::error::Result;
use serde_json::Value;

/// 解析查詢字串。`k=a&k=b` 與 `k[]=a` 都會得到字串陣列
pub fn parse_query(raw: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    let Some(raw) = raw else {
        return params;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        let (key, bracketed) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key.into_owned(), false),
        };
        let value = Value::String(value.into_owned());

        match params.0.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if bracketed => {
                params.0.insert(key, Value::Array(vec![value]));
            }
            None => {
                params.0.insert(key, value);
            }
        }
    }

    params
}

/// 合併參數：以預設值為底，呼叫端提供的值優先
pub fn merge_params(defaults: &QueryParams, caller: &QueryParams) -> QueryParams {
    let mut effective = defaults.clone();
    for (key, value) in caller.iter() {
        effective.0.insert(key.clone(), value.clone());
    }
    effective
}

/// 把單一值或陣列統一成字串列表；缺少時回傳空列表
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(scalar_to_string).collect(),
        Some(other) => vec![scalar_to_string(other)],
    }
}

/// 外部 API 要求 `ids` 為 JSON 陣列字串，例如 `["a","b"]`。缺少時送出 `[]`
pub fn encode_ids(params: &mut QueryParams) -> Result<()> {
    let ids = string_list(params.get("ids"));
    let encoded = serde_json::to_string(&ids)?;
    params.insert("ids", Value::String(encoded));
    Ok(())
}

/// 轉成送往外部服務的查詢參數組。陣列展開為重複的 key，null 省略
pub fn to_query_pairs(params: &QueryParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
