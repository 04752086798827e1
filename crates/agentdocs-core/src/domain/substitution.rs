//! Literal placeholder substitution.
//!
//! Placeholders are bracketed tokens such as `[PROJECT_NAME]`, matched as exact
//! substrings. There is no grammar: no wildcards, no nesting, no escaping.
//!
//! # Known limitation
//!
//! Each token is replaced in a single pass over the body, and tokens are
//! applied in key order. If a replacement value itself contains the literal
//! text of another token, whether that inner token gets replaced depends on
//! the order the two tokens are applied in. Rendering is never repeated to a
//! fixed point. Keep replacement values free of token text.

use std::collections::BTreeMap;

/// Wrap a bare name in the placeholder brackets: `PROJECT_NAME` -> `[PROJECT_NAME]`.
pub fn placeholder(name: &str) -> String {
    format!("[{name}]")
}

/// Mapping from placeholder token to replacement value.
///
/// Keys are the full token text including brackets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: BTreeMap<String, String>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `token`.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render `body` against this map. See [`render`].
    pub fn render(&self, body: &str) -> String {
        render(body, self)
    }
}

impl<K, V> FromIterator<(K, V)> for SubstitutionMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Replace every literal occurrence of each token in `substitutions`.
///
/// Total and pure: tokens in `body` with no entry are left as written, and
/// entries whose token never occurs are ignored. An empty token is skipped
/// because it would match between every character.
pub fn render(body: &str, substitutions: &SubstitutionMap) -> String {
    let mut rendered = body.to_owned();

    for (token, value) in substitutions.iter() {
        if token.is_empty() || !rendered.contains(token) {
            continue;
        }
        rendered = rendered.replace(token, value);
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> SubstitutionMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn replaces_known_token() {
        let m = map(&[("[NAME]", "World")]);
        assert_eq!(render("Hello [NAME]", &m), "Hello World");
    }

    #[test]
    fn re_rendering_token_free_output_is_a_no_op() {
        let m = map(&[("[NAME]", "World")]);
        let once = render("Hello [NAME]", &m);
        assert_eq!(render(&once, &m), once);
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let m = map(&[("[NAME]", "World")]);
        assert_eq!(
            render("Hello [NAME] and [OTHER]", &m),
            "Hello World and [OTHER]"
        );
    }

    #[test]
    fn unused_entries_are_harmless() {
        let m = map(&[("[UNUSED]", "X")]);
        assert_eq!(render("Hello", &m), "Hello");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let m = map(&[("[A]", "1")]);
        assert_eq!(render("[A][A] [A]", &m), "11 1");
    }

    #[test]
    fn empty_map_returns_body_unchanged() {
        let body = "# [PROJECT_NAME]\n- [ ] checkbox\n";
        assert_eq!(render(body, &SubstitutionMap::new()), body);
    }

    #[test]
    fn empty_token_is_ignored() {
        let m = map(&[("", "X"), ("[A]", "a")]);
        assert_eq!(render("[A]b", &m), "ab");
    }

    #[test]
    fn value_may_be_empty() {
        let m = map(&[("[TIMELINE]", "")]);
        assert_eq!(render("Due: [TIMELINE].", &m), "Due: .");
    }

    #[test]
    fn placeholder_wraps_in_brackets() {
        assert_eq!(placeholder("DATE"), "[DATE]");
    }

    #[test]
    fn later_insert_overrides_earlier() {
        let m = SubstitutionMap::new().with("[X]", "1").with("[X]", "2");
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("[X]"), Some("2"));
    }
}
