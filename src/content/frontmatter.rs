//! Front-matter documents: a metadata header followed by free-form text.
//!
//! Two header styles are recognised:
//!
//! ```text
//! ---                          +++
//! title: 가격 | HEIMDEX          title = "Pricing | HEIMDEX"
//! features:                    features = ["a", "b"]
//!   - a                        +++
//!   - b
//! ---
//! ```
//!
//! The `---` style is a small YAML subset: `key: value` lines, `- item`
//! lists or indented `key: value` mappings under an empty key, `#` comments.
//! Anything deeper is a syntax error. The `+++` style is TOML.

use super::JsonMap;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("front matter opened with `{0}` is never closed")]
    Unterminated(&'static str),

    #[error("invalid TOML front matter")]
    Toml(#[from] toml::de::Error),

    #[error("invalid front matter on line {line}: `{text}`")]
    Syntax { line: usize, text: String },

    #[error("front matter is not a mapping")]
    NotMapping,
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Header fields, empty when the document has no header.
    pub fields: JsonMap,
    /// Text after the header.
    pub body: &'a str,
}

/// Split and parse a document.
pub fn parse(content: &str) -> Result<Document<'_>, FrontmatterError> {
    match detect(content)? {
        Some((header, body, Style::Toml)) => Ok(Document {
            fields: parse_toml(header)?,
            body,
        }),
        Some((header, body, Style::Yaml)) => Ok(Document {
            fields: parse_yaml_like(header)?,
            body,
        }),
        None => Ok(Document {
            fields: JsonMap::new(),
            body: content,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Yaml,
    Toml,
}

/// Locate the header. Returns `(header, body, style)` if the document has one.
fn detect(content: &str) -> Result<Option<(&str, &str, Style)>, FrontmatterError> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, style) in [("---", Style::Yaml), ("+++", Style::Toml)] {
        let Some(rest) = trimmed.strip_prefix(fence) else {
            continue;
        };
        let closing = format!("\n{fence}");
        let Some(end) = rest.find(&closing) else {
            return Err(FrontmatterError::Unterminated(fence));
        };
        let header = rest[..end].trim();
        let after = &rest[end + closing.len()..];
        // Rest of the closing fence line, then the body.
        let body = after
            .split_once('\n')
            .map_or("", |(_, body)| body)
            .trim_start_matches(['\r', '\n']);
        return Ok(Some((header, body, style)));
    }

    Ok(None)
}

fn parse_toml(header: &str) -> Result<JsonMap, FrontmatterError> {
    let table: toml::Table = toml::from_str(header)?;
    match serde_json::to_value(table) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(FrontmatterError::NotMapping),
    }
}

/// Parse `key: value` lines. A `key:` with no value opens a block that is
/// filled by `- item` lines (a list) or indented `key: value` lines (a
/// mapping). Blocks nest one level deep.
fn parse_yaml_like(header: &str) -> Result<JsonMap, FrontmatterError> {
    let mut fields = JsonMap::new();
    // Key declared as `key:` with no value, awaiting its block.
    let mut open: Option<String> = None;

    for (idx, raw) in header.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut block = open.as_ref().and_then(|key| fields.get_mut(key));

        let item = if line == "-" { Some("") } else { line.strip_prefix("- ") };
        if let Some(item) = item {
            let Some(Value::Array(items)) = block else {
                return Err(syntax_error(idx, raw));
            };
            items.push(parse_yaml_value(item.trim()));
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(syntax_error(idx, raw));
        };
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(syntax_error(idx, raw));
        }
        let value = value.trim();

        if raw.starts_with([' ', '\t']) {
            if value.is_empty() {
                return Err(syntax_error(idx, raw));
            }
            if let Some(parent) = block.as_deref_mut()
                && matches!(parent, Value::Array(items) if items.is_empty())
            {
                *parent = Value::Object(JsonMap::new());
            }
            let Some(Value::Object(map)) = block else {
                return Err(syntax_error(idx, raw));
            };
            map.insert(key, parse_yaml_value(value));
            continue;
        }

        if value.is_empty() {
            fields.insert(key.clone(), Value::Array(Vec::new()));
            open = Some(key);
        } else {
            fields.insert(key, parse_yaml_value(value));
            open = None;
        }
    }

    Ok(fields)
}

fn syntax_error(idx: usize, text: &str) -> FrontmatterError {
    FrontmatterError::Syntax {
        line: idx + 1,
        text: text.trim().to_string(),
    }
}

/// Parse a YAML-like scalar.
///
/// - Quoted: `"a, b"` / `'x'` -> string without quotes
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`
/// - Numbers: `123`, `3.14`
/// - Strings: everything else (commas are kept, copy often contains them)
fn parse_yaml_value(s: &str) -> Value {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        return Value::String(s[1..s.len() - 1].to_string());
    }

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }

    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\ndescription: A page\n---\n\n# Body";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("title"), Some(&json!("Hello")));
        assert_eq!(doc.fields.get("description"), Some(&json!("A page")));
        assert_eq!(doc.body, "# Body");
    }

    #[test]
    fn test_yaml_lists_and_scalars() {
        let content = "---\nfeatures:\n  - one\n  - \"two, three\"\ncount: 42\nflag: true\nnothing: ~\n---\n";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("features"), Some(&json!(["one", "two, three"])));
        assert_eq!(doc.fields.get("count"), Some(&json!(42)));
        assert_eq!(doc.fields.get("flag"), Some(&json!(true)));
        assert_eq!(doc.fields.get("nothing"), Some(&json!(null)));
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_yaml_value_keeps_colons_and_commas() {
        let content = "---\ntitle: 가격 | HEIMDEX\nsubhead: From Storage to Meaning: HEIMDEX, now\n---\nbody";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("title"), Some(&json!("가격 | HEIMDEX")));
        assert_eq!(
            doc.fields.get("subhead"),
            Some(&json!("From Storage to Meaning: HEIMDEX, now"))
        );
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ntags = [\"a\", \"b\"]\n\n[hero]\ncta = \"Go\"\n+++\n\n# Body";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("title"), Some(&json!("Hello")));
        assert_eq!(doc.fields.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(doc.fields.get("hero"), Some(&json!({"cta": "Go"})));
        assert_eq!(doc.body, "# Body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content";
        let doc = parse(content).unwrap();

        assert!(doc.fields.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let err = parse("---\ntitle: Hello\n\n# Body").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated("---")));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("+++\ntitle = \n+++\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Toml(_)));
    }

    #[test]
    fn test_yaml_syntax_error() {
        let err = parse("---\ntitle: ok\njust words\n---\n").unwrap_err();
        match err {
            FrontmatterError::Syntax { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "just words");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_yaml_nested_mapping() {
        let content = "---\ntitle: Home\nog:\n  title: Share card\n  image: /og.png\ndescription: D\n---\nbody";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("title"), Some(&json!("Home")));
        assert_eq!(
            doc.fields.get("og"),
            Some(&json!({"title": "Share card", "image": "/og.png"}))
        );
        assert_eq!(doc.fields.get("description"), Some(&json!("D")));
        assert_eq!(doc.fields.len(), 3);
    }

    #[test]
    fn test_yaml_deep_nesting_rejected() {
        let err = parse("---\nog:\n  card:\n    title: x\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_yaml_indented_key_without_block() {
        let err = parse("---\ntitle: Home\n  image: /og.png\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Syntax { line: 2, .. }));
    }

    #[test]
    fn test_yaml_list_and_mapping_mixed() {
        let err = parse("---\nfeatures:\n  - one\n  key: value\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Syntax { line: 3, .. }));

        let err = parse("---\nog:\n  key: value\n  - one\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Syntax { line: 3, .. }));
    }

    #[test]
    fn test_list_item_without_key() {
        let err = parse("---\n- orphan\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Hello\r\n---\r\nBody";
        let doc = parse(content).unwrap();

        assert_eq!(doc.fields.get("title"), Some(&json!("Hello")));
        assert_eq!(doc.body, "Body");
    }
}
