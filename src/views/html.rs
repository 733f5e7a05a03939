//! Minimal HTML renderer.

use std::collections::HashSet;
use std::fmt::Write;

use serde_json::Value;

use crate::views::{RenderError, Renderer, ViewContext};

/// Renders a known set of views into a single shared layout.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    site_name: String,
    views: HashSet<&'static str>,
}

impl HtmlRenderer {
    pub fn new(site_name: impl Into<String>, views: &[&'static str]) -> Self {
        Self {
            site_name: site_name.into(),
            views: views.iter().copied().collect(),
        }
    }

    pub fn knows(&self, view: &str) -> bool {
        self.views.contains(view)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &str, context: &ViewContext) -> Result<String, RenderError> {
        if !self.knows(view) {
            return Err(RenderError::UnknownView(view.to_string()));
        }

        let title = context
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(self.site_name.as_str());

        let mut body = String::new();
        let fields = context.iter().filter(|(key, _)| key.as_str() != "title");
        write_entries(&mut body, fields);

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body>\n\
             <main class=\"view-{view}\">\n\
             <h1>{title}</h1>\n\
             {body}\
             </main>\n\
             <footer>{site}</footer>\n\
             </body>\n\
             </html>\n",
            title = escape(title),
            view = escape(view),
            body = body,
            site = escape(&self.site_name),
        ))
    }
}

fn write_entries<'a>(out: &mut String, entries: impl Iterator<Item = (&'a String, &'a Value)>) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }
    out.push_str("<dl>\n");
    for (key, value) in entries {
        let _ = write!(out, "<dt>{}</dt><dd>", escape(key));
        write_value(out, value);
        out.push_str("</dd>\n");
    }
    out.push_str("</dl>\n");
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push_str(&escape(s)),
        Value::Bool(_) | Value::Number(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_value(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Value::Object(map) => write_entries(out, map.iter()),
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: Value) -> ViewContext {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_renders_title_and_fields() {
        let renderer = HtmlRenderer::new("Site", &["about"]);
        let html = renderer
            .render(
                "about",
                &context(json!({
                    "title": "About",
                    "deploymentInfo": { "version": "2.0.0", "features": ["A", "B"] }
                })),
            )
            .unwrap();

        assert!(html.contains("<title>About</title>"));
        assert!(html.contains("<h1>About</h1>"));
        assert!(html.contains("<dt>version</dt><dd>2.0.0</dd>"));
        assert!(html.contains("<ul><li>A</li><li>B</li></ul>"));
        assert!(html.contains("class=\"view-about\""));
    }

    #[test]
    fn test_escapes_context() {
        let renderer = HtmlRenderer::new("Site", &["index"]);
        let html = renderer
            .render("index", &context(json!({ "title": "<b>x</b>", "q": "a&b" })))
            .unwrap();
        assert!(html.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
        assert!(html.contains("a&amp;b"));
    }

    #[test]
    fn test_unknown_view() {
        let renderer = HtmlRenderer::new("Site", &["index"]);
        assert_eq!(
            renderer.render("missing", &ViewContext::new()),
            Err(RenderError::UnknownView("missing".into()))
        );
    }

    #[test]
    fn test_falls_back_to_site_name() {
        let renderer = HtmlRenderer::new("Site", &["index"]);
        let html = renderer.render("index", &ViewContext::new()).unwrap();
        assert!(html.contains("<title>Site</title>"));
    }
}
