//! Plain-text handling of the TeX-flavoured names used in the data files.
//!
//! Group names arrive with inline math such as `$2^4:A_8$` or
//! `$L_2(11)\times 2$`. Text exports cannot typeset that, so the helpers here
//! reduce it to something readable in a terminal or a source file.

/// Drop `$` delimiters and replace the few TeX operators that appear in
/// group names with their Unicode symbols. Whitespace runs collapse to a
/// single space and the result is trimmed.
pub fn strip_math_delimiters(s: &str) -> String {
    let replaced = s
        .replace('$', "")
        .replace("\\times", "×")
        .replace("\\circ", "∘")
        .replace("\\wr", "≀");

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Contents of the first non-empty `$...$` fragment on a single line, or an
/// empty string when there is none.
pub fn extract_first_math_fragment(s: &str) -> String {
    for (start, _) in s.match_indices('$') {
        let rest = &s[start + 1..];
        let Some(first) = rest.chars().next() else {
            break;
        };
        if first == '\n' {
            continue;
        }
        let after_first = &rest[first.len_utf8()..];
        let line_end = after_first.find('\n').unwrap_or(after_first.len());
        if let Some(close) = after_first[..line_end].find('$') {
            return rest[..first.len_utf8() + close].to_string();
        }
    }
    String::new()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
