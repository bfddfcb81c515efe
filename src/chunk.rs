/// A maximal run of columns sharing one common/different classification.
///
/// An ordered list of chunks fully partitions `[0, width)`; boundaries fall
/// exactly where the diff mask changes value between consecutive columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chunk {
    /// First column of the run.
    pub start: usize,
    /// One past the last column of the run.
    pub stop: usize,
    /// True when at least one sequence disagrees somewhere in the run.
    pub differs: bool,
}

/// Run-length encodes a diff mask into maximal constant-value chunks,
/// left to right. An empty mask produces no chunks.
pub(crate) fn chunks_from_mask(mask: &[bool]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for i in 1..=mask.len() {
        if i == mask.len() || mask[i] != mask[start] {
            chunks.push(Chunk {
                start,
                stop: i,
                differs: mask[start],
            });
            start = i;
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::diff_mask;

    #[test]
    fn test_two_chunks() {
        let mask = diff_mask(&[vec![1, 2, 3], vec![1, 2, 2]]);
        assert_eq!(
            chunks_from_mask(&mask),
            vec![
                Chunk { start: 0, stop: 2, differs: false },
                Chunk { start: 2, stop: 3, differs: true },
            ]
        );
    }

    #[test]
    fn test_alternating_runs() {
        let mask = diff_mask(&[
            vec![1, 2, 1, 2, 3, 3, 1, 2],
            vec![1, 2, 1, 2, 4, 4, 1, 2],
        ]);
        assert_eq!(
            chunks_from_mask(&mask),
            vec![
                Chunk { start: 0, stop: 4, differs: false },
                Chunk { start: 4, stop: 6, differs: true },
                Chunk { start: 6, stop: 8, differs: false },
            ]
        );
    }

    #[test]
    fn test_chunks_partition_the_mask() {
        let mask = [true, true, false, true, false, false];
        let chunks = chunks_from_mask(&mask);
        assert_eq!(chunks.first().map(|c| c.start), Some(0));
        assert_eq!(chunks.last().map(|c| c.stop), Some(mask.len()));
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].stop, pair[1].start);
            assert_ne!(pair[0].differs, pair[1].differs);
        }
        let covered: usize = chunks.iter().map(|c| c.stop - c.start).sum();
        assert_eq!(covered, mask.len());
    }

    #[test]
    fn test_empty_mask() {
        assert!(chunks_from_mask(&[]).is_empty());
    }

    #[test]
    fn test_single_run() {
        let chunks = chunks_from_mask(&[false, false, false]);
        assert_eq!(
            chunks,
            vec![Chunk { start: 0, stop: 3, differs: false }]
        );
    }
}
