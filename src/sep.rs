use std::path::MAIN_SEPARATOR;

/// An ordered list of separator levels, outermost first.
///
/// Each level is the literal separator string used to split inputs at that
/// nesting depth; the empty string means "split into individual characters".
/// A single separator is simply a one-element list, so callers never need to
/// distinguish the two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SepSpec {
    levels: Vec<String>,
}

impl SepSpec {
    /// Character-level splitting, no structural separator.
    pub fn chars() -> Self {
        Self {
            levels: vec![String::new()],
        }
    }

    /// A single separator level. An empty separator behaves like [`chars`].
    ///
    /// [`chars`]: SepSpec::chars
    pub fn single(sep: impl Into<String>) -> Self {
        Self {
            levels: vec![sep.into()],
        }
    }

    /// Multiple nested separator levels, outermost first.
    ///
    /// An empty list falls back to character-level splitting.
    pub fn levels<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        if levels.is_empty() {
            Self::chars()
        } else {
            Self { levels }
        }
    }

    /// The platform path separator as a single level.
    pub fn path() -> Self {
        Self::single(MAIN_SEPARATOR.to_string())
    }

    /// Outermost separator level.
    pub(crate) fn outer(&self) -> &str {
        &self.levels[0]
    }

    pub(crate) fn as_levels(&self) -> &[String] {
        &self.levels
    }
}

impl Default for SepSpec {
    fn default() -> Self {
        Self::chars()
    }
}

/// Splits a name into tokens on one separator level.
///
/// The empty separator splits into one token per character; otherwise tokens
/// are the delimiter-separated substrings. Joining the tokens back with the
/// same separator reproduces the input exactly.
pub(crate) fn split_on(name: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        name.chars().map(String::from).collect()
    } else {
        name.split(sep).map(str::to_owned).collect()
    }
}

/// Rendered character width of tokens joined with `sep`, without building
/// the joined string.
pub(crate) fn joined_width(tokens: &[&str], sep: &str) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
    chars + sep.chars().count() * (tokens.len() - 1)
}
