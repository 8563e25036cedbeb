use serde::Deserialize;
use std::collections::BTreeMap;
use ts_rs::TS;

// 创建任务请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct CreateMissionRequest {
    pub coins: i64,
    pub order: i64,
    #[serde(default)]
    pub questions: Vec<CreateQuestionRequest>,
}

// 更新任务请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct UpdateMissionRequest {
    pub coins: Option<i64>,
    pub order: Option<i64>,
}

// 创建/替换题目请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct CreateQuestionRequest {
    pub question: String,
    pub order: i64,
    /// 答案令牌 -> 积分标签列表
    pub answers: BTreeMap<String, Vec<String>>,
    pub hint: Option<String>,
}
