//! 数据模型定义
//!
//! 业务实体、请求/响应类型与统一的 API 错误码。

pub mod auth;
pub mod common;
pub mod missions;
pub mod progress;
pub mod skills;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码（随 ApiResponse.code 返回）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,

    // 认证 / 用户
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserEmailInvalid = 2002,
    UserEmailAlreadyExists = 2003,
    UserPasswordInvalid = 2004,
    UserNotFound = 2005,
    UserRoleInvalid = 2006,

    // 任务引用数据
    MissionNotFound = 3000,
    MissionOrderConflict = 3001,
    QuestionNotFound = 3002,

    // 学生进度
    ProgressNotFound = 4000,
    MissionLocked = 4001,
    MissionAlreadyComplete = 4002,
    AnswerInvalid = 4003,

    // 技能
    SkillNotFound = 5000,
    SkillScopeNotFound = 5001,
}

/// 程序启动时间（用于 system status 上报）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
