//! Key/value selectors.
//!
//! A selector written as `/pattern/` is a case-insensitive regex searched
//! anywhere in the text; anything else is an exact key.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

#[derive(Debug, Clone)]
pub enum Selector {
    Exact(String),
    Pattern { source: String, regex: Regex },
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self> {
        match regex_body(selector) {
            Some(pattern) => {
                let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok(Selector::Pattern {
                    source: selector.to_string(),
                    regex,
                })
            }
            None => Ok(Selector::Exact(selector.to_string())),
        }
    }

    /// The selector as the user wrote it.
    pub fn as_str(&self) -> &str {
        match self {
            Selector::Exact(key) => key,
            Selector::Pattern { source, .. } => source,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Selector::Exact(key) => key == text,
            Selector::Pattern { regex, .. } => regex.is_match(text),
        }
    }
}

fn regex_body(selector: &str) -> Option<&str> {
    if selector.len() >= 2 && selector.starts_with('/') && selector.ends_with('/') {
        Some(&selector[1..selector.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashes_make_a_pattern() {
        let sel = Selector::parse("/^stat/").unwrap();
        assert!(matches!(sel, Selector::Pattern { .. }));
        assert!(sel.matches("Status"));
        assert!(!sel.matches("Restatement"));
        assert_eq!(sel.as_str(), "/^stat/");
    }

    #[test]
    fn lone_slash_is_exact() {
        assert!(matches!(Selector::parse("/").unwrap(), Selector::Exact(_)));
        let empty = Selector::parse("//").unwrap();
        assert!(empty.matches("anything"));
    }

    #[test]
    fn exact_is_case_sensitive() {
        let sel = Selector::parse("Status").unwrap();
        assert!(sel.matches("Status"));
        assert!(!sel.matches("status"));
    }

    #[test]
    fn bad_regex_is_an_error() {
        assert!(Selector::parse("/(unclosed/").is_err());
    }
}
