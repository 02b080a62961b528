//! Document shell around the page sections.

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", crate::html::escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                crate::html::escape(name),
                crate::html::escape(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Document frame: doctype, `<html>` element, head, and body wrappers.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Include doctype declaration.
    pub doctype: bool,
    /// Class on the `<html>` element (carries the theme).
    pub html_class: Option<String>,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections.
    pub body_start: String,
    /// HTML after sections.
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            html_class: None,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_html_class(mut self, class: impl Into<String>) -> Self {
        self.html_class = Some(class.into());
        self
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        match &self.html_class {
            Some(class) => html.push_str(&format!(
                "<html lang=\"en\" class=\"{}\">\n<head>\n",
                crate::html::escape(class)
            )),
            None => html.push_str("<html lang=\"en\">\n<head>\n"),
        }
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// Render a whole document around `sections`.
    pub fn render(&self, sections: &[String]) -> String {
        let mut html = self.render_opening();
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str(&self.render_closing());
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("Shop & Co").with_meta("viewport", "width=device-width");
        let html = head.render();
        assert!(html.contains("<title>Shop &amp; Co</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width">"#));
    }

    #[test]
    fn test_shell_render() {
        let shell = Shell::new(HeadContent::new("T")).with_html_class("dark");
        let html = shell.render(&["<p>one</p>".to_string(), "<p>two</p>".to_string()]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.find("one").unwrap() < html.find("two").unwrap());
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_shell_without_class() {
        let html = Shell::new(HeadContent::default()).render_opening();
        assert!(html.contains("<html lang=\"en\">"));
    }
}
