use crate::chunk::{chunks_from_mask, Chunk};
use crate::error::UniquifyError;
use crate::mask::diff_mask;
use crate::sep::{joined_width, split_on, SepSpec};
use crate::skip::skip_batch;
use ahash::AHashSet as HashSet;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which end of the token sequence the shortening search anchors nearest to
/// the first difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Anchor at the front and extend toward the end: unique prefixes.
    Head,
    /// Anchor at the back and extend toward the front: unique suffixes.
    #[default]
    Tail,
}

impl FromStr for Direction {
    type Err = UniquifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Direction::Head),
            "tail" => Ok(Direction::Tail),
            other => Err(UniquifyError::UnknownDirection(other.to_owned())),
        }
    }
}

/// Options for the shortening operations.
#[derive(Debug, Clone)]
pub struct ShortenOptions {
    /// Separator levels; shortening splits on the outermost level.
    pub sep: SepSpec,
    /// Placeholder substituted for common runs wide enough to cover it.
    pub marker: String,
    /// Search direction, `Tail` by default.
    pub direction: Direction,
    /// Minimum character width every output must reach.
    pub minlen: usize,
}

impl Default for ShortenOptions {
    fn default() -> Self {
        Self {
            sep: SepSpec::chars(),
            marker: "...".to_owned(),
            direction: Direction::Tail,
            minlen: 1,
        }
    }
}

/// Shortens every name to the narrowest window of columns that still keeps
/// all inputs distinguishable.
///
/// The window is anchored at the first differing column (scanning from the
/// end in `Tail` mode) and widens one column at a time, testing every window
/// that ends on a differing column, until the rendered names are as distinct
/// as the inputs and each is at least `minlen` wide. Common runs falling
/// inside the window are collapsed to the marker when that does not widen
/// the rendering.
///
/// When every input is token-identical, or no window satisfies the
/// constraints, the full maximal-skip rendering of each name is returned
/// instead.
///
/// ```
/// use uniquify_rs::{shortname, Direction, ShortenOptions};
///
/// let names = ["_____abc___def", "_____xyz___uvw"];
/// assert_eq!(
///     shortname(&names, &ShortenOptions::default()),
///     vec!["f", "w"]
/// );
///
/// let head = ShortenOptions {
///     direction: Direction::Head,
///     ..ShortenOptions::default()
/// };
/// assert_eq!(shortname(&names, &head), vec!["a", "x"]);
/// ```
pub fn shortname<S: AsRef<str>>(names: &[S], opts: &ShortenOptions) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    let distinct = names.iter().copied().collect::<HashSet<_>>().len();
    let sep = opts.sep.outer();

    // Pad to a rectangular batch before any reversal, so short inputs stay
    // aligned with the rest and tail mode sees their padding as differing
    // columns at the reversed front; placeholders are dropped again when
    // joining.
    let mut rows: Vec<Vec<Option<String>>> = names
        .iter()
        .map(|n| split_on(n, sep).into_iter().map(Some).collect())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, None);
        if opts.direction == Direction::Tail {
            row.reverse();
        }
    }

    let mask = diff_mask(&rows);
    let chunks = chunks_from_mask(&mask);
    trace!(
        inputs = names.len(),
        columns = width,
        chunks = chunks.len(),
        "segmented batch"
    );

    let Some(anchor) = mask.iter().position(|d| *d) else {
        // Token-identical batch: nothing distinguishes the inputs, so the
        // maximal-skip rendering of the whole name stands in.
        return full_rendering(&names, sep, &opts.marker);
    };

    for end in anchor..width {
        // Candidate windows end on a differing column; widening over common
        // columns adds no distinguishing power on its own.
        if !mask[end] {
            continue;
        }
        let out: Vec<String> = rows
            .iter()
            .map(|row| render_window(row, &chunks, anchor, end, sep, opts))
            .collect();
        let out_distinct = out.iter().collect::<HashSet<_>>().len();
        if out_distinct == distinct && out.iter().all(|s| s.chars().count() >= opts.minlen) {
            debug!(anchor, end, "accepted window");
            return out;
        }
    }

    // No window satisfied both constraints; fall through to the full,
    // un-windowed rendering.
    debug!(anchor, "no satisfying window, using full rendering");
    full_rendering(&names, sep, &opts.marker)
}

/// [`shortname`] with the separator fixed to the platform path separator.
pub fn shortpath<S: AsRef<str>>(names: &[S], opts: &ShortenOptions) -> Vec<String> {
    let opts = ShortenOptions {
        sep: SepSpec::path(),
        ..opts.clone()
    };
    shortname(names, &opts)
}

/// Renders one row for the window `[anchor, end]`, applying the replace
/// policy to the covered portion of each chunk.
fn render_window(
    row: &[Option<String>],
    chunks: &[Chunk],
    anchor: usize,
    end: usize,
    sep: &str,
    opts: &ShortenOptions,
) -> String {
    let marker_width = opts.marker.chars().count();
    let mut parts: Vec<&str> = Vec::new();
    for chunk in chunks {
        let lo = chunk.start.max(anchor);
        let hi = chunk.stop.min(end + 1);
        if lo >= hi {
            continue;
        }
        let tokens: Vec<&str> = row[lo..hi].iter().flatten().map(String::as_str).collect();
        if chunk.differs || joined_width(&tokens, sep) < marker_width {
            parts.extend(tokens);
        } else {
            parts.push(&opts.marker);
        }
    }
    if opts.direction == Direction::Tail {
        parts.reverse();
    }
    parts.join(sep)
}

/// Replace-policy rendering of the whole name, used when no window search is
/// possible or successful.
fn full_rendering(names: &[&str], sep: &str, marker: &str) -> Vec<String> {
    let level = [sep.to_owned()];
    skip_batch(names, &level, marker)
}
