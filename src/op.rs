use crate::error::UniquifyError;
use crate::shorten::{shortname, shortpath, ShortenOptions};
use crate::skip::{skipcommonname, skipcommonpath, SkipOptions};
use std::fmt;
use std::str::FromStr;

/// The closed set of operations selectable by name at the boundary.
///
/// Replaces the original's string-keyed function table: callers parse a name
/// once and dispatch through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ShortName,
    ShortPath,
    SkipCommonName,
    SkipCommonPath,
}

impl Operation {
    /// All operations, in documentation order.
    pub const ALL: [Operation; 4] = [
        Operation::ShortName,
        Operation::ShortPath,
        Operation::SkipCommonName,
        Operation::SkipCommonPath,
    ];

    /// The name this operation is selected by.
    pub fn name(self) -> &'static str {
        match self {
            Operation::ShortName => "shortname",
            Operation::ShortPath => "shortpath",
            Operation::SkipCommonName => "skipcommonname",
            Operation::SkipCommonPath => "skipcommonpath",
        }
    }

    /// Runs the operation over one batch of names.
    ///
    /// The path operations override the separator with the platform path
    /// separator, and the marker-mode operations ignore `direction` and
    /// `minlen`.
    pub fn apply<S: AsRef<str>>(self, names: &[S], opts: &ShortenOptions) -> Vec<String> {
        match self {
            Operation::ShortName => shortname(names, opts),
            Operation::ShortPath => shortpath(names, opts),
            Operation::SkipCommonName => skipcommonname(
                names,
                &SkipOptions {
                    sep: opts.sep.clone(),
                    marker: opts.marker.clone(),
                },
            ),
            Operation::SkipCommonPath => skipcommonpath(names, &opts.marker),
        }
    }
}

impl FromStr for Operation {
    type Err = UniquifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UniquifyError::UnknownOperation(s.to_owned()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
