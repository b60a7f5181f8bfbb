use crate::domain::ports::ViewRenderer;
use crate::utils::error::{AdvisorError, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// 伺服器會用到的頁面
pub const VIEWS: [&str; 2] = ["index", "destination"];

fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// 以 `{{field}}` / `{{field.nested}}` 佔位符填入資料的 HTML 模板
#[derive(Debug, Clone, Default)]
pub struct TemplateViews {
    templates: HashMap<String, String>,
}

impl TemplateViews {
    /// 從目錄載入 `{name}.html`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut views = Self::default();
        for name in VIEWS {
            let path = dir.join(format!("{}.html", name));
            let template = std::fs::read_to_string(&path).map_err(|e| AdvisorError::ViewError {
                message: format!("cannot read template {}: {}", path.display(), e),
            })?;
            views.insert(name, template);
        }
        tracing::debug!("🖼️ Loaded {} view templates from {}", views.templates.len(), dir.display());
        Ok(views)
    }

    pub fn insert(&mut self, name: &str, template: impl Into<String>) {
        self.templates.insert(name.to_string(), template.into());
    }
}

impl ViewRenderer for TemplateViews {
    fn render(&self, view: &str, context: &Value) -> Result<String> {
        let template = self.templates.get(view).ok_or_else(|| AdvisorError::ViewError {
            message: format!("unknown view '{}'", view),
        })?;

        let rendered = placeholder_pattern().replace_all(template, |caps: &Captures| {
            lookup(context, &caps[1])
                .map(display_value)
                .map(|text| escape_html(&text))
                .unwrap_or_default()
        });
        Ok(rendered.into_owned())
    }
}

fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(context, |current, segment| current.get(segment))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn views() -> TemplateViews {
        let mut views = TemplateViews::default();
        views.insert(
            "destination",
            "<h1>{{ name }}</h1><p>{{details.country}}</p><span>{{price}}</span>{{missing}}",
        );
        views
    }

    #[test]
    fn test_render_substitutes_nested_fields() {
        let html = views()
            .render(
                "destination",
                &json!({"name": "Paris", "details": {"country": "France"}, "price": 1200}),
            )
            .unwrap();

        assert_eq!(html, "<h1>Paris</h1><p>France</p><span>1200</span>");
    }

    #[test]
    fn test_render_escapes_html() {
        let html = views()
            .render("destination", &json!({"name": "<script>alert('x')</script>"}))
            .unwrap();

        assert!(html.starts_with("<h1>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</h1>"));
    }

    #[test]
    fn test_render_empty_context() {
        let html = views().render("destination", &json!({})).unwrap();
        assert_eq!(html, "<h1></h1><p></p><span></span>");
    }

    #[test]
    fn test_unknown_view() {
        let err = views().render("nope", &json!({})).unwrap_err();
        assert!(matches!(err, AdvisorError::ViewError { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>Advisor</title>").unwrap();
        std::fs::write(dir.path().join("destination.html"), "<h1>{{name}}</h1>").unwrap();

        let views = TemplateViews::load(dir.path()).unwrap();

        assert_eq!(views.render("index", &json!({})).unwrap(), "<title>Advisor</title>");
        assert_eq!(
            views.render("destination", &json!({"name": "Lima"})).unwrap(),
            "<h1>Lima</h1>"
        );
    }

    #[test]
    fn test_load_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        assert!(TemplateViews::load(dir.path()).is_err());
    }
}
