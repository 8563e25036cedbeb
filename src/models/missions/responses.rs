use super::entities::Mission;
use serde::Serialize;
use ts_rs::TS;

// 任务列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct MissionListResponse {
    pub items: Vec<Mission>,
}

// 客户端可见的题目（答案只暴露令牌，不暴露积分标签）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub order: i64,
    pub answer_tokens: Vec<String>,
    pub hint: Option<String>,
}

impl From<super::entities::MissionQuestion> for QuestionResponse {
    fn from(q: super::entities::MissionQuestion) -> Self {
        let answer_tokens = q.answer_tokens();
        Self {
            id: q.id,
            question: q.question,
            order: q.order,
            answer_tokens,
            hint: q.hint,
        }
    }
}

// 题目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct QuestionListResponse {
    pub items: Vec<QuestionResponse>,
}
