//! 积分引擎
//!
//! 把学生的自由作答翻译成结构化信号：技能计数、角色/动机排名、
//! 创业精神标量。纯函数，不触数据库；结论由存储层原子落库。
//!
//! 分类规则（对一次保存的全部标签求值一次）：
//! - 标签命中角色词表 -> 角色排名任务
//! - 否则命中动机词表 -> 动机排名任务
//! - 否则 -> 普通任务：按频次覆盖写技能分值，entrepreneurship 前缀
//!   标签映射为创业精神标量

use crate::errors::{CareerQuestError, Result};
use crate::models::missions::entities::MissionQuestion;
use crate::models::progress::entities::{AnswerMap, MissionScoring};
use crate::models::skills::entities::SkillObject;
use std::collections::{BTreeMap, HashMap};

/// 角色词表（固定自然顺序）
pub const ROLE_VOCAB: [&str; 5] = ["leader", "specialist", "idea", "party", "expert"];

/// 动机词表（固定自然顺序）
pub const MOTIVATION_VOCAB: [&str; 5] = ["achievement", "process", "material", "ideological", "team"];

/// 排名分值表：第 i 名（1 起）得 RANK_SCHEDULE[i-1] 分
pub const RANK_SCHEDULE: [u32; 5] = [52, 30, 7, 6, 5];

const ENTREPRENEURSHIP_PREFIX: &str = "entrepreneurship";

/// 对一次保存的完整答卷求积分结论
///
/// - 题号必须都能在任务题目表中解析，缺失视为引用数据损坏（fatal）
/// - 答案令牌查不到时静默跳过（容忍部分作答）
/// - 答卷为空或没有产出任何标签时返回 None（无事可写）
pub fn score_answers(
    answers: &AnswerMap,
    questions: &[MissionQuestion],
) -> Result<Option<MissionScoring>> {
    if answers.is_empty() {
        return Ok(None);
    }

    let by_key: HashMap<String, &MissionQuestion> = questions
        .iter()
        .map(|q| (q.order.to_string(), q))
        .collect();

    // 按题号数值序展开，保证排名的"首次观察"对应顺序作答的题目顺序
    let mut entries: Vec<(&String, _)> = answers.iter().collect();
    entries.sort_by_key(|(key, _)| key.parse::<i64>().unwrap_or(i64::MAX));

    let mut tags: Vec<String> = Vec::new();
    for (key, value) in entries {
        let question = by_key.get(key).ok_or_else(|| {
            CareerQuestError::reference_data(format!("答卷引用了不存在的题号 {key}"))
        })?;

        for token in value.tokens() {
            if let Some(token_tags) = question.answers.get(token) {
                tags.extend(token_tags.iter().cloned());
            }
        }
    }

    if tags.is_empty() {
        return Ok(None);
    }

    if tags.iter().any(|t| ROLE_VOCAB.contains(&t.as_str())) {
        return Ok(Some(MissionScoring::RoleRanking(rank_labels(
            &tags,
            &ROLE_VOCAB,
        ))));
    }

    if tags.iter().any(|t| MOTIVATION_VOCAB.contains(&t.as_str())) {
        return Ok(Some(MissionScoring::MotivationRanking(rank_labels(
            &tags,
            &MOTIVATION_VOCAB,
        ))));
    }

    score_generic(&tags)
}

/// 强制排名：先按首次观察顺序排已出现的词表标签，再按自然顺序补齐
/// 未出现的标签，最后按分值表逐名赋分。五个标签全部得到分值。
fn rank_labels(tags: &[String], vocab: &[&str; 5]) -> BTreeMap<String, u32> {
    let mut ordered: Vec<&str> = Vec::new();

    for tag in tags {
        if vocab.contains(&tag.as_str()) && !ordered.contains(&tag.as_str()) {
            ordered.push(tag.as_str());
        }
    }

    for label in vocab {
        if !ordered.contains(label) {
            ordered.push(label);
        }
    }

    ordered
        .into_iter()
        .zip(RANK_SCHEDULE)
        .map(|(label, points)| (label.to_string(), points))
        .collect()
}

/// 普通任务：多重集计数，频次覆盖写；entrepreneurship 标签后缀
/// 映射为标量（多个时按首次观察顺序处理，最后一个生效）
fn score_generic(tags: &[String]) -> Result<Option<MissionScoring>> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, i64> = HashMap::new();

    for tag in tags {
        if !counts.contains_key(tag.as_str()) {
            order.push(tag.as_str());
        }
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut entrepreneurship = None;
    let mut skill_points = Vec::new();

    for tag in order {
        if tag.starts_with(ENTREPRENEURSHIP_PREFIX) {
            entrepreneurship = Some(if tag.ends_with('1') {
                16
            } else if tag.ends_with('2') {
                57
            } else {
                87
            });
            continue;
        }

        let object = tag.to_uppercase().parse::<SkillObject>().map_err(|_| {
            CareerQuestError::reference_data(format!("未知的技能标签 {tag}"))
        })?;
        skill_points.push((object, counts[tag]));
    }

    Ok(Some(MissionScoring::Generic {
        entrepreneurship,
        skill_points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::progress::entities::AnswerValue;

    fn question(order: i64, answers: &[(&str, &[&str])]) -> MissionQuestion {
        MissionQuestion {
            id: order,
            mission_id: 1,
            question: format!("Q{order}"),
            order,
            answers: answers
                .iter()
                .map(|(token, tags)| {
                    (
                        token.to_string(),
                        tags.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
            hint: None,
        }
    }

    fn one(token: &str) -> AnswerValue {
        AnswerValue::One(token.to_string())
    }

    #[test]
    fn test_empty_answers_yield_nothing() {
        let questions = vec![question(1, &[("a", &["social"])])];
        assert_eq!(score_answers(&AnswerMap::new(), &questions).unwrap(), None);
    }

    #[test]
    fn test_unknown_token_is_skipped() {
        let questions = vec![question(1, &[("a", &["social"])])];
        let answers = AnswerMap::from([("1".to_string(), one("mystery"))]);
        assert_eq!(score_answers(&answers, &questions).unwrap(), None);
    }

    #[test]
    fn test_unknown_question_key_is_fatal() {
        let questions = vec![question(1, &[("a", &["social"])])];
        let answers = AnswerMap::from([("9".to_string(), one("a"))]);
        assert!(score_answers(&answers, &questions).is_err());
    }

    #[test]
    fn test_skill_counts_are_multiset_frequencies() {
        let questions = vec![
            question(1, &[("a", &["social", "social"])]),
            question(2, &[("b", &["social", "research"])]),
        ];
        let answers = AnswerMap::from([
            ("1".to_string(), one("a")),
            ("2".to_string(), one("b")),
        ]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        match scoring {
            MissionScoring::Generic {
                entrepreneurship,
                skill_points,
            } => {
                assert_eq!(entrepreneurship, None);
                assert!(skill_points.contains(&(SkillObject::Social, 3)));
                assert!(skill_points.contains(&(SkillObject::Research, 1)));
            }
            other => panic!("expected generic scoring, got {other:?}"),
        }
    }

    #[test]
    fn test_entrepreneurship_suffix_mapping() {
        for (tag, expected) in [
            ("entrepreneurship_1", 16),
            ("entrepreneurship_2", 57),
            ("entrepreneurship_3", 87),
        ] {
            let questions = vec![question(1, &[("a", &[tag])])];
            let answers = AnswerMap::from([("1".to_string(), one("a"))]);

            let scoring = score_answers(&answers, &questions).unwrap().unwrap();
            match scoring {
                MissionScoring::Generic {
                    entrepreneurship, ..
                } => assert_eq!(entrepreneurship, Some(expected)),
                other => panic!("expected generic scoring, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_role_ranking_observed_then_natural_order() {
        // 观察到 party、specialist；其余按词表自然顺序补齐
        let questions = vec![
            question(1, &[("a", &["party"])]),
            question(2, &[("b", &["specialist"])]),
        ];
        let answers = AnswerMap::from([
            ("1".to_string(), one("a")),
            ("2".to_string(), one("b")),
        ]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        match scoring {
            MissionScoring::RoleRanking(points) => {
                assert_eq!(points["party"], 52);
                assert_eq!(points["specialist"], 30);
                assert_eq!(points["leader"], 7);
                assert_eq!(points["idea"], 6);
                assert_eq!(points["expert"], 5);
            }
            other => panic!("expected role ranking, got {other:?}"),
        }
    }

    #[test]
    fn test_ranking_follows_numeric_question_order() {
        // 两位数题号不得按字典序（"10" < "2"）抢先观察
        let questions = vec![
            question(2, &[("a", &["specialist"])]),
            question(10, &[("b", &["leader"])]),
        ];
        let answers = AnswerMap::from([
            ("2".to_string(), one("a")),
            ("10".to_string(), one("b")),
        ]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        match scoring {
            MissionScoring::RoleRanking(points) => {
                assert_eq!(points["specialist"], 52);
                assert_eq!(points["leader"], 30);
            }
            other => panic!("expected role ranking, got {other:?}"),
        }
    }

    #[test]
    fn test_motivation_ranking_uses_same_schedule() {
        let questions = vec![question(1, &[("a", &["team", "process"])])];
        let answers = AnswerMap::from([("1".to_string(), one("a"))]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        match scoring {
            MissionScoring::MotivationRanking(points) => {
                assert_eq!(points.len(), 5);
                assert_eq!(points["team"], 52);
                assert_eq!(points["process"], 30);
                assert_eq!(points["achievement"], 7);
                assert_eq!(points["material"], 6);
                assert_eq!(points["ideological"], 5);
            }
            other => panic!("expected motivation ranking, got {other:?}"),
        }
    }

    #[test]
    fn test_role_vocab_takes_precedence_over_generic() {
        // 混合标签里只要出现角色词表成员，整次保存按角色排名处理
        let questions = vec![question(1, &[("a", &["leader", "social"])])];
        let answers = AnswerMap::from([("1".to_string(), one("a"))]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        assert!(matches!(scoring, MissionScoring::RoleRanking(_)));
    }

    #[test]
    fn test_list_answer_contributes_all_tokens() {
        let questions = vec![question(
            1,
            &[("a", &["social"]), ("b", &["research"])],
        )];
        let answers = AnswerMap::from([(
            "1".to_string(),
            AnswerValue::Many(vec!["a".to_string(), "b".to_string()]),
        )]);

        let scoring = score_answers(&answers, &questions).unwrap().unwrap();
        match scoring {
            MissionScoring::Generic { skill_points, .. } => {
                assert_eq!(skill_points.len(), 2);
            }
            other => panic!("expected generic scoring, got {other:?}"),
        }
    }
}
