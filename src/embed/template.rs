//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__KEY__` placeholders in one pass over the template.
///
/// Values are inserted verbatim and never rescanned, so a value that happens
/// to contain a placeholder name is left alone.
pub fn fill(content: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len() + pairs.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = content;

    'scan: while let Some(start) = rest.find("__") {
        for (key, value) in pairs {
            if let Some(after) = rest[start..].strip_prefix(key) {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push_str(&rest[..start + 2]);
        rest = &rest[start + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a> {
        name: &'a str,
    }

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("__NAME__", self.name)])
        }
    }

    #[test]
    fn test_render() {
        const HELLO: Template<Greeting<'static>> = Template::new("<p>Hello, __NAME__!</p>");
        assert_eq!(HELLO.render(&Greeting { name: "HEIMDEX" }), "<p>Hello, HEIMDEX!</p>");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill("__A__ and __B__", &[("__A__", "__B__"), ("__B__", "b")]);
        assert_eq!(out, "__B__ and b");
    }

    #[test]
    fn test_fill_keeps_unknown_markers() {
        assert_eq!(fill("a__b __X__ __", &[("__Y__", "y")]), "a__b __X__ __");
    }
}
