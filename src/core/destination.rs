use crate::domain::ports::ViewRenderer;
use crate::utils::error::{AdvisorError, Result};
use serde_json::{Map, Value};

/// 解析表單中的 `place` 欄位；缺少或空字串時視為空物件
pub fn parse_place(place: Option<&str>) -> Result<Value> {
    match place {
        None => Ok(Value::Object(Map::new())),
        Some(raw) if raw.is_empty() => Ok(Value::Object(Map::new())),
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            AdvisorError::malformed(format!("field 'place' is not valid JSON: {}", e))
        }),
    }
}

pub fn render_destination(views: &dyn ViewRenderer, place: Option<&str>) -> Result<String> {
    let context = parse_place(place)?;
    views.render("destination", &context)
}
