//! Contiguous ordinal-day ranges.

/// Generates the inclusive run of ordinal days `start..=end`.
///
/// Returns an empty vector when `end < start`. The result is strictly
/// increasing with step 1.
///
/// # Example
///
/// ```ignore
/// let days = ordinal_range(737_425, 737_429);
/// assert_eq!(days, vec![737_425, 737_426, 737_427, 737_428, 737_429]);
/// ```
pub fn ordinal_range(start: i64, end: i64) -> Vec<i64> {
    if end < start {
        return Vec::new();
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_reversed() {
        assert!(ordinal_range(10, 9).is_empty());
    }

    #[test]
    fn single() {
        assert_eq!(ordinal_range(5, 5), vec![5]);
    }

    #[test]
    fn inclusive_bounds() {
        let days = ordinal_range(737_425, 737_429);
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], 737_425);
        assert_eq!(*days.last().unwrap(), 737_429);
    }

    #[test]
    fn unit_step() {
        let days = ordinal_range(1, 1000);
        assert!(days.windows(2).all(|w| w[1] - w[0] == 1));
    }
}
