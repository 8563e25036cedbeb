use std::sync::Arc;

use crate::models::{
    missions::{
        entities::{Mission, MissionQuestion},
        requests::{CreateMissionRequest, CreateQuestionRequest, UpdateMissionRequest},
        responses::MissionListResponse,
    },
    progress::{
        entities::{ProgressWriteSet, StudentMission},
        responses::ProgressListResponse,
    },
    skills::{
        entities::{SkillScope, StudentSkill},
        requests::UpsertSkillScopeRequest,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须已完成哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 任务引用数据管理方法（管理员）
    // 创建任务（可附带题目）
    async fn create_mission(&self, mission: CreateMissionRequest) -> Result<Mission>;
    // 通过ID获取任务
    async fn get_mission_by_id(&self, id: i64) -> Result<Option<Mission>>;
    // 通过排序键获取任务
    async fn get_mission_by_order(&self, order: i64) -> Result<Option<Mission>>;
    // 按 order 升序列出全部任务
    async fn list_missions(&self) -> Result<MissionListResponse>;
    // 更新任务
    async fn update_mission(&self, id: i64, update: UpdateMissionRequest)
    -> Result<Option<Mission>>;
    // 删除任务（级联删除题目与进度行）
    async fn delete_mission(&self, id: i64) -> Result<bool>;
    // 按题号升序列出任务题目
    async fn list_mission_questions(&self, mission_id: i64) -> Result<Vec<MissionQuestion>>;
    // 整体替换任务题目
    async fn replace_mission_questions(
        &self,
        mission_id: i64,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<MissionQuestion>>;

    /// 学生进度方法
    // 注册播种：六个技能行 + 每个任务一条进度行（入口任务解锁）
    async fn seed_student_progress(&self, user_id: i64) -> Result<()>;
    // 新任务上线后为已有学生补齐进度行，返回补齐数量
    async fn backfill_mission_progress(&self, mission_id: i64) -> Result<u64>;
    // 学生任务列表（按任务 order 排序，附题目总数）
    async fn list_student_missions(&self, user_id: i64) -> Result<ProgressListResponse>;
    // 获取单条进度
    async fn get_student_mission(
        &self,
        user_id: i64,
        mission_id: i64,
    ) -> Result<Option<StudentMission>>;
    // 原子落库一次进度保存：进度行 + 积分 + 发币/解锁/毕业戳
    async fn apply_progress_update(&self, write: ProgressWriteSet) -> Result<StudentMission>;

    /// 技能方法
    // 学生技能列表（固定自然顺序）
    async fn list_student_skills(&self, user_id: i64) -> Result<Vec<StudentSkill>>;
    // 技能-职业领域映射列表
    async fn list_skill_scopes(&self) -> Result<Vec<SkillScope>>;
    // 创建或整体替换一条技能-职业领域映射
    async fn upsert_skill_scope(&self, upsert: UpsertSkillScopeRequest) -> Result<SkillScope>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
