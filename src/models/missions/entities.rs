use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

// 任务（引用数据）
//
// order 是唯一的总排序键：order == 1 为入口任务，完成 order == n 的任务解锁
// order == n + 1。排序永远不依赖自增 ID。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct Mission {
    pub id: i64,
    pub coins: i64,
    pub order: i64,
}

// 任务题目（引用数据）
//
// answers 把答案令牌映射到积分标签列表；标签永远不下发给客户端。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mission.ts")]
pub struct MissionQuestion {
    pub id: i64,
    pub mission_id: i64,
    pub question: String,
    /// 任务内唯一题号，同时是学生答卷 JSON 的键
    pub order: i64,
    pub answers: BTreeMap<String, Vec<String>>,
    pub hint: Option<String>,
}

impl MissionQuestion {
    /// 客户端可见的答案令牌（不含积分标签）
    pub fn answer_tokens(&self) -> Vec<String> {
        self.answers.keys().cloned().collect()
    }
}
