//! Status blocks written to output surfaces.

use serde::{Deserialize, Serialize};

/// Text shown while a load is in progress.
pub const LOADING_TEXT: &str = "Loading data...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Loading,
    Error,
}

impl StatusKind {
    /// CSS class of the rendered block.
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Loading => "loading",
            StatusKind::Error => "error",
        }
    }
}

/// One line of status content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBlock {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusBlock {
    pub fn loading() -> Self {
        Self {
            kind: StatusKind::Loading,
            text: LOADING_TEXT.to_string(),
        }
    }

    /// Error block for a failure description.
    pub fn error(description: impl std::fmt::Display) -> Self {
        Self {
            kind: StatusKind::Error,
            text: format!("Error loading data: {}", description),
        }
    }

    /// Render as a `div` element with escaped text.
    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="{}">{}</div>"#,
            self.kind.class(),
            escape_html(&self.text)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

    #[test]
    fn test_loading_markup() {
        assert_eq!(
            StatusBlock::loading().to_markup(),
            r#"<div class="loading">Loading data...</div>"#
        );
    }

    #[test]
    fn test_error_markup_is_escaped() {
        let block = StatusBlock::error("unexpected <html> & friends");
        assert_eq!(block.kind, StatusKind::Error);
        assert_eq!(
            block.to_markup(),
            r#"<div class="error">Error loading data: unexpected &lt;html&gt; &amp; friends</div>"#
        );
    }
}
