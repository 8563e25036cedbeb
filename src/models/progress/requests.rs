use super::entities::{AnswerMap, Reaction};
use serde::Deserialize;
use ts_rs::TS;

// 进度增量更新请求（PATCH 语义）
//
// answers 为键级合并而非整体替换；is_complete 只允许 false -> true。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressUpdateRequest {
    pub answers: Option<AnswerMap>,
    pub reaction: Option<Reaction>,
    pub is_complete: Option<bool>,
}
