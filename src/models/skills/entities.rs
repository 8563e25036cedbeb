use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 六个固定的技能类别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub enum SkillObject {
    Social,      // 与人协作
    Research,    // 研究探索
    Practic,     // 动手实践
    Creative,    // 创意创作
    Extremal,    // 挑战极限
    Information, // 信息处理
}

impl SkillObject {
    /// 固定的自然顺序（积分引擎与种子流程共用）
    pub const ALL: [SkillObject; 6] = [
        SkillObject::Social,
        SkillObject::Research,
        SkillObject::Practic,
        SkillObject::Creative,
        SkillObject::Extremal,
        SkillObject::Information,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillObject::Social => "与人协作",
            SkillObject::Research => "研究探索",
            SkillObject::Practic => "动手实践",
            SkillObject::Creative => "创意创作",
            SkillObject::Extremal => "挑战极限",
            SkillObject::Information => "信息处理",
        }
    }
}

impl<'de> Deserialize<'de> for SkillObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SkillObject>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的技能类别: '{s}'. 支持: SOCIAL, RESEARCH, PRACTIC, CREATIVE, EXTREMAL, INFORMATION"
            ))
        })
    }
}

impl std::fmt::Display for SkillObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkillObject::Social => "SOCIAL",
            SkillObject::Research => "RESEARCH",
            SkillObject::Practic => "PRACTIC",
            SkillObject::Creative => "CREATIVE",
            SkillObject::Extremal => "EXTREMAL",
            SkillObject::Information => "INFORMATION",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SkillObject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOCIAL" => Ok(SkillObject::Social),
            "RESEARCH" => Ok(SkillObject::Research),
            "PRACTIC" => Ok(SkillObject::Practic),
            "CREATIVE" => Ok(SkillObject::Creative),
            "EXTREMAL" => Ok(SkillObject::Extremal),
            "INFORMATION" => Ok(SkillObject::Information),
            _ => Err(format!("Invalid skill object: {s}")),
        }
    }
}

// 学生技能：每个 (user, object) 一行，points 只由积分引擎写入
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct StudentSkill {
    pub id: i64,
    pub user_id: i64,
    pub object: SkillObject,
    pub points: i64,
}

// 技能类别 -> 职业领域标签（推荐查询用的引用数据）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct SkillScope {
    pub id: i64,
    pub object: SkillObject,
    pub scope: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_object_round_trip() {
        for object in SkillObject::ALL {
            let parsed: SkillObject = object.to_string().parse().unwrap();
            assert_eq!(parsed, object);
        }
        assert!("MAGIC".parse::<SkillObject>().is_err());
    }

    #[test]
    fn test_natural_order_is_stable() {
        assert_eq!(SkillObject::ALL[0], SkillObject::Social);
        assert_eq!(SkillObject::ALL[5], SkillObject::Information);
    }
}
