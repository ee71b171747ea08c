//! Standalone HTML page used to show an export in a browser tab.

use crate::notation::escape_html;

pub fn view_page(title: &str, text: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>{}</title>
  <style>
    body {{ font-family: monospace; margin: 1rem; }}
    pre {{ white-space: pre; overflow: auto; padding: 1rem; border: 1px solid #ccc; }}
  </style>
</head>
<body>
  <pre>{}</pre>
</body>
</html>"#,
        escape_html(title),
        escape_html(text)
    )
}
