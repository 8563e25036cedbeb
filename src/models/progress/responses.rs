use super::entities::StudentMission;
use serde::Serialize;
use ts_rs::TS;

// 学生视角的单条任务进度（附题目总数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub progress: StudentMission,
    /// 所属任务的 order（列表按它排序）
    pub mission_order: i64,
    pub questions_count: i64,
}

// 学生任务列表（按任务 order 排序）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressListResponse {
    pub items: Vec<ProgressResponse>,
}
