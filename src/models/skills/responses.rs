use super::entities::{SkillScope, StudentSkill};
use serde::Serialize;
use ts_rs::TS;

/// 满分基准：points / 12 给出百分比
const MAX_SKILL_POINTS: f64 = 12.0;

// 学生视角的技能（带百分比与展示名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct SkillResponse {
    pub object: String,
    pub points: i64,
    pub percent: f64,
}

impl From<StudentSkill> for SkillResponse {
    fn from(skill: StudentSkill) -> Self {
        Self {
            object: skill.object.display_name().to_string(),
            points: skill.points,
            percent: 100.0 * (skill.points as f64 / MAX_SKILL_POINTS),
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct SkillListResponse {
    pub items: Vec<SkillResponse>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct SkillScopeListResponse {
    pub items: Vec<SkillScope>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::entities::SkillObject;

    #[test]
    fn test_percent_derivation() {
        let skill = StudentSkill {
            id: 1,
            user_id: 1,
            object: SkillObject::Social,
            points: 3,
        };
        let resp = SkillResponse::from(skill);
        assert_eq!(resp.percent, 25.0);
    }
}
