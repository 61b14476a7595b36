// file: src/server/templates.rs
// description: placeholder-substituted HTML rendering for the search page
// reference: internal template conventions

use crate::models::SearchResult;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    pub fn index() -> Self {
        Self {
            template: INDEX_TEMPLATE.to_string(),
        }
    }

    /// Render the search page. All user-controlled values are escaped;
    /// only the named placeholders are substituted, so literal braces in
    /// the page markup survive untouched.
    pub fn render(
        &self,
        q: &str,
        content_types: &[String],
        selected_type: &str,
        results: &[SearchResult],
    ) -> String {
        self.template
            .replace("{q}", &escape_html(q))
            .replace("{any_checked}", checked(selected_type.is_empty()))
            .replace("{type_filters}", &render_type_filters(content_types, selected_type))
            .replace("{results}", &render_results(results))
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::index()
    }
}

fn checked(selected: bool) -> &'static str {
    if selected { "checked" } else { "" }
}

fn render_type_filters(content_types: &[String], selected_type: &str) -> String {
    content_types
        .iter()
        .map(|content_type| {
            let escaped = escape_html(content_type);
            format!(
                "<label><input type=\"radio\" name=\"content_type\" value=\"{}\" {}> {}</label>",
                escaped,
                checked(content_type == selected_type),
                escaped
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "<li class=\"empty\">No results</li>".to_string();
    }

    results
        .iter()
        .map(|result| {
            format!(
                "<li><strong>{}</strong><div class=\"snippet\">{}</div></li>",
                escape_html(&result.title),
                escape_html(&result.snippet)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
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
