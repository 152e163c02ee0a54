//! 报表聚合
//!
//! 统计视图都是请求时现算的纯读操作：对从存储层取回的行做显式的
//! 分组/排序/截断，不维护物化结果。

use std::collections::HashMap;

use crate::models::quizzes::entities::QuizResult;

/// 按用户分组取单次最高分，降序取前 limit 名。
/// 同分时按 userId 升序，保证输出顺序确定。
pub fn top_scores_by_user(results: &[QuizResult], limit: usize) -> Vec<(i64, i32)> {
    let mut best: HashMap<i64, i32> = HashMap::new();
    for result in results {
        best.entry(result.user_id)
            .and_modify(|score| *score = (*score).max(result.score))
            .or_insert(result.score);
    }

    let mut ranked: Vec<(i64, i32)> = best.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// 平均分；空集合返回 0.0 而不是 NaN
pub fn average_score(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
    sum as f64 / scores.len() as f64
}

/// 平均分的展示格式：两位小数的字符串
pub fn format_average(average: f64) -> String {
    format!("{average:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(user_id: i64, score: i32) -> QuizResult {
        QuizResult {
            id: 0,
            user_id,
            course_id: 1,
            score,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_groups_by_max_not_average() {
        // 同一用户两次作答，榜单取最高分 95 而不是平均
        let results = vec![quiz(1, 80), quiz(1, 95)];
        let ranked = top_scores_by_user(&results, 5);
        assert_eq!(ranked, vec![(1, 95)]);
    }

    #[test]
    fn test_sorted_descending_with_limit() {
        let results = vec![
            quiz(1, 70),
            quiz(2, 90),
            quiz(3, 80),
            quiz(4, 60),
            quiz(5, 85),
            quiz(6, 75),
        ];
        let ranked = top_scores_by_user(&results, 5);
        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(ranked[0], (2, 90));
        // 最低分的用户 4 被截断掉
        assert!(ranked.iter().all(|(id, _)| *id != 4));
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let results = vec![quiz(7, 90), quiz(3, 90), quiz(5, 90)];
        let ranked = top_scores_by_user(&results, 5);
        assert_eq!(ranked, vec![(3, 90), (5, 90), (7, 90)]);
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        // 无成绩时平均分取 0，不能出现除零/NaN
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_average_score() {
        assert_eq!(average_score(&[80, 90]), 85.0);
        assert_eq!(average_score(&[100]), 100.0);
    }

    #[test]
    fn test_format_average() {
        assert_eq!(format_average(0.0), "0.00");
        assert_eq!(format_average(87.5), "87.50");
        assert_eq!(format_average(66.666_666), "66.67");
    }
}
