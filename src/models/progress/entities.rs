use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// 一道题的作答：单个令牌或令牌列表（不同任务设计下两种形态都存在）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// 展平为令牌序列
    pub fn tokens(&self) -> &[String] {
        match self {
            AnswerValue::One(token) => std::slice::from_ref(token),
            AnswerValue::Many(tokens) => tokens.as_slice(),
        }
    }
}

/// 答卷：题号（字符串形式的题目 order）-> 作答
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// 把增量答卷合并进已有答卷：键级并集，已有键被覆盖
pub fn merge_answers(existing: &mut AnswerMap, patch: AnswerMap) {
    for (key, value) in patch {
        existing.insert(key, value);
    }
}

// 任务完成后的表态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub enum Reaction {
    Fire,  // 🔥
    Heart, // ❤️
    Five,  // 🖐
    Sad,   // 🙁
}

impl<'de> Deserialize<'de> for Reaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Reaction>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的表态: '{s}'. 支持: FIRE, HEART, FIVE, SAD"
            ))
        })
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reaction::Fire => write!(f, "FIRE"),
            Reaction::Heart => write!(f, "HEART"),
            Reaction::Five => write!(f, "FIVE"),
            Reaction::Sad => write!(f, "SAD"),
        }
    }
}

impl std::str::FromStr for Reaction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIRE" => Ok(Reaction::Fire),
            "HEART" => Ok(Reaction::Heart),
            "FIVE" => Ok(Reaction::Five),
            "SAD" => Ok(Reaction::Sad),
            _ => Err(format!("Invalid reaction: {s}")),
        }
    }
}

// 学生任务进度
//
// 状态机：LOCKED -> IN_PROGRESS -> COMPLETE。COMPLETE 是终态。
// is_unlocked 只由解锁链控制器翻转；is_complete 由调用方显式提交。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct StudentMission {
    pub id: i64,
    pub mission_id: i64,
    pub user_id: i64,
    /// 派生字段 = len(answers)，每次保存后重算
    pub stage: i64,
    pub answers: AnswerMap,
    pub reaction: Option<Reaction>,
    pub is_complete: bool,
    pub is_unlocked: bool,
}

/// 一次保存的积分结论（由积分引擎纯函数计算，存储层原子落库）
///
/// 显式的标签分类变体，取代散落的字符串匹配：一个任务的标签集要么是
/// 角色排名、要么是动机排名、要么是普通技能计数（可附带创业精神标量）。
#[derive(Debug, Clone, PartialEq)]
pub enum MissionScoring {
    /// 角色排名：全部五个标签 -> 排名分值
    RoleRanking(BTreeMap<String, u32>),
    /// 动机排名：全部五个标签 -> 排名分值
    MotivationRanking(BTreeMap<String, u32>),
    /// 普通任务：技能计数覆盖写 + 可选的创业精神标量
    Generic {
        entrepreneurship: Option<i32>,
        /// (技能类别, 出现次数)，points 以覆盖写入
        skill_points: Vec<(crate::models::skills::entities::SkillObject, i64)>,
    },
}

/// 完成边沿（false -> true）触发的副作用
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEffects {
    /// 一次性发放的金币（任务面值）
    pub coins_delta: i64,
    /// 待解锁的后继任务 order（order + 1；不存在时静默跳过）
    pub next_mission_order: i64,
}

/// apply_update 的事务写集：进度行 + 学生行 + 后继行 + 技能行，
/// 存储层在单个事务内全部落库或全部回滚。
#[derive(Debug, Clone)]
pub struct ProgressWriteSet {
    pub record_id: i64,
    pub user_id: i64,
    pub mission_id: i64,
    pub answers: AnswerMap,
    /// 派生 stage = len(answers)
    pub stage: i64,
    pub reaction: Option<Reaction>,
    pub is_complete: bool,
    /// answers 非空时每次保存都重新聚合（幂等覆盖写）
    pub scoring: Option<MissionScoring>,
    /// 仅在完成边沿出现（防止重复发币/重复解锁）
    pub completion: Option<CompletionEffects>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(token: &str) -> AnswerValue {
        AnswerValue::One(token.to_string())
    }

    #[test]
    fn test_answer_value_json_shapes() {
        let single: AnswerValue = serde_json::from_str(r#""a1""#).unwrap();
        assert_eq!(single, one("a1"));

        let many: AnswerValue = serde_json::from_str(r#"["a1", "a2"]"#).unwrap();
        assert_eq!(many.tokens(), ["a1".to_string(), "a2".to_string()]);
    }

    #[test]
    fn test_merge_answers_union_and_overwrite() {
        let mut existing: AnswerMap = BTreeMap::from([
            ("1".to_string(), one("a1")),
            ("2".to_string(), one("b1")),
        ]);
        let patch: AnswerMap = BTreeMap::from([
            ("2".to_string(), one("b2")),
            ("3".to_string(), AnswerValue::Many(vec!["c1".into(), "c2".into()])),
        ]);

        merge_answers(&mut existing, patch);

        assert_eq!(existing.len(), 3);
        assert_eq!(existing["1"], one("a1"));
        assert_eq!(existing["2"], one("b2"));
        assert_eq!(existing["3"].tokens().len(), 2);
    }

    #[test]
    fn test_reaction_round_trip() {
        for raw in ["FIRE", "HEART", "FIVE", "SAD"] {
            let r: Reaction = raw.parse().unwrap();
            assert_eq!(r.to_string(), raw);
        }
        assert!("MEH".parse::<Reaction>().is_err());
    }
}
