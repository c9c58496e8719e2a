//! 出题 check 列表构建

use std::collections::HashSet;

use crate::models::Day;

/// 构建长度为 `list_length` 的布尔列表，所选 Day 的考试索引处为 `true`
///
/// 重复的 Day 只计一次，超出列表长度的索引被忽略
pub fn build_check_list(list_length: usize, days: &[Day]) -> Vec<bool> {
    let exam_ids: HashSet<usize> = days.iter().map(Day::exam_id).collect();
    (0..list_length).map(|i| exam_ids.contains(&i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(token: &str) -> Day {
        token.parse().unwrap()
    }

    #[test]
    fn test_single_total_day() {
        let list = build_check_list(116, &[day("1a")]);
        assert_eq!(list.len(), 116);
        assert!(list[0]);
        assert_eq!(list.iter().filter(|b| **b).count(), 1);
    }

    #[test]
    fn test_multiple_days_with_duplicates() {
        let list = build_check_list(116, &[day("3a"), day("3w"), day("3a"), day("10w")]);
        let marked: Vec<usize> = list
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
            .collect();
        assert_eq!(marked, vec![4, 5, 19]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let list = build_check_list(4, &[day("2w"), day("9a")]);
        assert_eq!(list, vec![false, false, false, true]);
    }

    #[test]
    fn test_empty_selection() {
        let list = build_check_list(10, &[]);
        assert!(list.iter().all(|b| !b));
        assert_eq!(list.len(), 10);
    }
}
