use super::entities::SkillObject;
use serde::Deserialize;
use ts_rs::TS;

// 技能-职业领域映射的创建/替换请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/skill.ts")]
pub struct UpsertSkillScopeRequest {
    pub object: SkillObject,
    pub scope: Vec<String>,
}
