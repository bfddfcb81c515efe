use crate::chunk::{chunks_from_mask, Chunk};
use crate::mask::diff_mask;
use crate::sep::{joined_width, split_on, SepSpec};
use tracing::trace;

/// Options for the marker-mode operations.
#[derive(Debug, Clone)]
pub struct SkipOptions {
    /// Separator levels, outermost first.
    pub sep: SepSpec,
    /// Placeholder substituted for an eligible common run.
    pub marker: String,
}

impl Default for SkipOptions {
    fn default() -> Self {
        Self {
            sep: SepSpec::chars(),
            marker: "...".to_owned(),
        }
    }
}

/// Replaces runs common to all `names` with the marker.
///
/// A common run is collapsed only when the marker is no wider than the run it
/// replaces, so no output is ever longer than its input. Differing runs are
/// kept verbatim at the outermost level and re-analyzed recursively at each
/// deeper separator level.
///
/// ```
/// use uniquify_rs::{skipcommonname, SkipOptions};
///
/// let out = skipcommonname(
///     &["aaxxxxc", "abxxxxb", "abxxxxc"],
///     &SkipOptions::default(),
/// );
/// assert_eq!(out, vec!["aa...c", "ab...b", "ab...c"]);
/// ```
pub fn skipcommonname<S: AsRef<str>>(names: &[S], opts: &SkipOptions) -> Vec<String> {
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    skip_batch(&names, opts.sep.as_levels(), &opts.marker)
}

/// [`skipcommonname`] with the separator fixed to the platform path separator.
pub fn skipcommonpath<S: AsRef<str>>(paths: &[S], marker: &str) -> Vec<String> {
    let opts = SkipOptions {
        sep: SepSpec::path(),
        marker: marker.to_owned(),
    };
    skipcommonname(paths, &opts)
}

/// One aligned output position shared by every input.
enum Slot {
    /// A common run collapsed to the marker.
    Marker,
    /// A single column of the split batch; inputs shorter than the column
    /// are simply absent from it.
    Column(usize),
}

/// Recursive core of marker mode: one separator level per call.
pub(crate) fn skip_batch(names: &[&str], levels: &[String], marker: &str) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }
    let Some((sep, rest)) = levels.split_first() else {
        // No structural split left at this depth.
        return names.iter().map(|n| (*n).to_owned()).collect();
    };

    let rows: Vec<Vec<String>> = names.iter().map(|n| split_on(n, sep)).collect();
    let mask = diff_mask(&rows);
    let chunks = chunks_from_mask(&mask);
    trace!(
        inputs = names.len(),
        columns = mask.len(),
        chunks = chunks.len(),
        "segmented batch"
    );

    let marker_width = marker.chars().count();
    let mut slots = Vec::new();
    for chunk in &chunks {
        if collapses(chunk, &rows, sep, marker_width) {
            slots.push(Slot::Marker);
        } else {
            slots.extend((chunk.start..chunk.stop).map(Slot::Column));
        }
    }

    // Per-input cell per slot; `None` marks an input absent from a column.
    let mut cells: Vec<Vec<Option<String>>> = rows
        .iter()
        .map(|row| {
            slots
                .iter()
                .map(|slot| match slot {
                    Slot::Marker => Some(marker.to_owned()),
                    Slot::Column(col) => row.get(*col).cloned(),
                })
                .collect()
        })
        .collect();

    if !rest.is_empty() {
        for (si, slot) in slots.iter().enumerate() {
            if matches!(slot, Slot::Marker) {
                continue;
            }
            recurse_into_column(&mut cells, si, rest, marker);
        }
    }

    cells
        .into_iter()
        .map(|row| {
            let kept: Vec<String> = row.into_iter().flatten().collect();
            kept.join(sep)
        })
        .collect()
}

/// True when a chunk is common and substituting the marker would not make
/// the rendering wider.
fn collapses(chunk: &Chunk, rows: &[Vec<String>], sep: &str, marker_width: usize) -> bool {
    if chunk.differs {
        return false;
    }
    // Common columns are present in every row, so the first row is
    // representative.
    let tokens: Vec<&str> = rows[0][chunk.start..chunk.stop]
        .iter()
        .map(String::as_str)
        .collect();
    joined_width(&tokens, sep) >= marker_width
}

/// Re-applies the whole pipeline to the values one column holds, using the
/// remaining separator levels, and splices the results back in place.
fn recurse_into_column(
    cells: &mut [Vec<Option<String>>],
    slot: usize,
    levels: &[String],
    marker: &str,
) {
    let present: Vec<usize> = (0..cells.len())
        .filter(|&j| cells[j][slot].is_some())
        .collect();
    if present.is_empty() {
        return;
    }
    let sub: Vec<&str> = present
        .iter()
        .map(|&j| cells[j][slot].as_deref().unwrap_or_default())
        .collect();
    let replaced = skip_batch(&sub, levels, marker);
    for (&j, value) in present.iter().zip(replaced) {
        cells[j][slot] = Some(value);
    }
}
