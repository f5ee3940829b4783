use std::fmt;

/// Build-type tokens that never take part in qualifier matching.
pub const BUILD_TYPE_TOKENS: [&str; 2] = ["prof", "debug"];

/// A normalized, order-independent set of colon-delimited qualifiers.
///
/// Normalization drops the build-type tokens, sorts what remains and joins
/// it back with `:`. Two sets are equal iff their normalized strings are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifierSet(String);

impl QualifierSet {
    /// Normalize a raw colon-delimited qualifier string such as `e15:prof:s21`.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<&str> = raw
            .split(':')
            .filter(|tok| !BUILD_TYPE_TOKENS.contains(tok))
            .collect();
        tokens.sort_unstable();
        Self(tokens.join(":"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `token` occurs anywhere inside the normalized string.
    ///
    /// This is plain substring containment, not token membership: `e1`
    /// matches a set containing `e15`. Product list filters rely on it.
    pub fn contains_token(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
