/// Computes the per-column diff mask for a batch of token sequences.
///
/// The mask has one entry per column, where the number of columns is the
/// length of the longest sequence. Column `i` is `false` (common) only when
/// every sequence has a token at `i` and all of those tokens are equal; a
/// missing token counts as disagreement. A batch of one sequence has nothing
/// to distinguish and yields an all-`false` mask; an empty batch yields an
/// empty mask.
pub(crate) fn diff_mask<T: PartialEq>(rows: &[Vec<T>]) -> Vec<bool> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let Some((head, rest)) = rows.split_first() else {
        return Vec::new();
    };

    let mut mask = Vec::with_capacity(width);
    for i in 0..width {
        let differs = match head.get(i) {
            Some(lead) => rest.iter().any(|row| row.get(i) != Some(lead)),
            // The leading sequence ended before the widest one did.
            None => true,
        };
        mask.push(differs);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[u8]]) -> Vec<Vec<u8>> {
        data.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_two_rows() {
        let mask = diff_mask(&rows(&[&[1, 2, 3], &[1, 2, 2]]));
        assert_eq!(mask, vec![false, false, true]);
    }

    #[test]
    fn test_three_rows() {
        let mask = diff_mask(&rows(&[&[1, 2, 3], &[1, 2, 2], &[1, 1, 2]]));
        assert_eq!(mask, vec![false, true, true]);
    }

    #[test]
    fn test_ragged_rows() {
        // A missing token disagrees with any present token.
        let mask = diff_mask(&rows(&[&[1, 2, 3], &[1, 2]]));
        assert_eq!(mask, vec![false, false, true]);
    }

    #[test]
    fn test_short_leading_row() {
        let mask = diff_mask(&rows(&[&[1, 2], &[1, 2, 3]]));
        assert_eq!(mask, vec![false, false, true]);
    }

    #[test]
    fn test_single_row_is_all_common() {
        let mask = diff_mask(&rows(&[&[7, 8, 9]]));
        assert_eq!(mask, vec![false, false, false]);
    }

    #[test]
    fn test_empty_batch() {
        let mask = diff_mask::<u8>(&[]);
        assert!(mask.is_empty());
    }

    #[test]
    fn test_identical_rows() {
        let mask = diff_mask(&rows(&[&[4, 4], &[4, 4], &[4, 4]]));
        assert_eq!(mask, vec![false, false]);
    }
}
