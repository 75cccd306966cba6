//! Detail view builder for key-value display of configuration sections.

use colored::Colorize;

/// A builder for detail views (key-value display).
pub struct DetailView {
    title: String,
    sections: Vec<DetailSection>,
}

struct DetailSection {
    header: Option<String>,
    fields: Vec<(String, String)>,
}

impl DetailView {
    /// Create a new detail view with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![DetailSection {
                header: None,
                fields: vec![],
            }],
        }
    }

    /// Add a key-value field to the current section.
    #[must_use]
    pub fn field(mut self, key: &str, value: &str) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.fields.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a field only if the value is Some.
    #[must_use]
    pub fn field_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self.field(key, "-"),
        }
    }

    /// Start a new named section with a header.
    #[must_use]
    pub fn section(mut self, header: &str) -> Self {
        self.sections.push(DetailSection {
            header: Some(header.to_string()),
            fields: vec![],
        });
        self
    }

    /// Render the detail view to a string.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("{}", self.title.bold())];
        let key_width = self
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|(k, _)| k.len() + 1)
            .max()
            .unwrap_or(12);

        for section in &self.sections {
            if let Some(header) = &section.header {
                lines.push(String::new());
                lines.push(format!("{}", header.bold().underline()));
            }
            for (key, value) in &section.fields {
                // Pad before styling so ANSI codes don't skew alignment
                let label = format!("{:<width$}", format!("{key}:"), width = key_width);
                lines.push(format!("  {}  {}", label.bold(), value));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_sections_and_fields() {
        colored::control::set_override(false);
        let rendered = DetailView::new("development")
            .field("Port", "3000")
            .section("Database")
            .field("Host", "localhost")
            .field_opt("Origin", None)
            .render();

        assert!(rendered.starts_with("development"));
        assert!(rendered.contains("Database"));
        assert!(rendered.contains("  Port:    3000"));
        assert!(rendered.contains("  Origin:  -"));
    }
}
