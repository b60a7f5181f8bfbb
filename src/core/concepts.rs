use crate::core::params::{encode_ids, merge_params};
use crate::domain::model::{Match, MatchKind, QueryParams};
use crate::domain::ports::ConceptSearch;
use crate::utils::error::Result;
use serde_json::{json, Value};

/// 標籤搜尋要求的概念欄位
const CONCEPT_FIELDS: &str = r#"{"abstract":1,"type":1}"#;
const LABEL_SEARCH_LIMIT: u64 = 4;

pub fn label_search_defaults(corpus: &str) -> QueryParams {
    let mut defaults = QueryParams::new();
    defaults.insert("corpus", corpus);
    defaults.insert("concept_fields", CONCEPT_FIELDS);
    defaults.insert("prefix", true);
    defaults.insert("limit", LABEL_SEARCH_LIMIT);
    defaults.insert("concepts", true);
    defaults
}

pub fn conceptual_search_defaults(corpus: &str) -> QueryParams {
    let mut defaults = QueryParams::new();
    defaults.insert("corpus", corpus);
    defaults
}

/// 以 JavaScript 的 truthy 規則判斷 JSON 值
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 把原始 `type` 換成 concept / document，其餘欄位保持原樣
pub fn tag_match(raw: Value) -> Match {
    let mut fields = match raw {
        Value::Object(fields) => fields,
        other => {
            let mut fields = serde_json::Map::new();
            fields.insert("value".to_string(), other);
            fields
        }
    };

    let kind = match fields.shift_remove("type") {
        Some(t) if is_truthy(&t) => MatchKind::Concept,
        _ => MatchKind::Document,
    };

    Match { kind, fields }
}

/// 從標籤搜尋回應取出 `matches`；缺少時回傳空陣列
pub fn tag_matches(response: Value) -> Vec<Match> {
    match response {
        Value::Object(mut body) => match body.shift_remove("matches") {
            Some(Value::Array(matches)) => matches.into_iter().map(tag_match).collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// 從相關文件回應取出 `results`；回應為 null 或缺少欄位時回傳空陣列
pub fn related_results(response: Value) -> Value {
    match response {
        Value::Object(mut body) => match body.shift_remove("results") {
            Some(Value::Null) | None => json!([]),
            Some(results) => results,
        },
        _ => json!([]),
    }
}

pub async fn label_search(
    client: &dyn ConceptSearch,
    corpus: &str,
    caller: &QueryParams,
) -> Result<Vec<Match>> {
    let params = merge_params(&label_search_defaults(corpus), caller);
    tracing::debug!("🔎 Label search with {} parameters", params.len());

    let response = client.search_by_label(&params).await?;
    let matches = tag_matches(response);

    tracing::debug!("🔎 Label search returned {} matches", matches.len());
    Ok(matches)
}

pub async fn conceptual_search(
    client: &dyn ConceptSearch,
    corpus: &str,
    caller: &QueryParams,
) -> Result<Value> {
    let mut params = merge_params(&conceptual_search_defaults(corpus), caller);
    encode_ids(&mut params)?;
    tracing::debug!(ids = ?params.get("ids"), "📚 Related documents request");

    let response = client.related_documents(&params).await?;
    Ok(related_results(response))
}
