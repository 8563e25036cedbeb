//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod missions;
mod skill_scopes;
mod student_missions;
mod student_skills;
mod users;

use crate::config::AppConfig;
use crate::errors::{CareerQuestError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CareerQuestError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CareerQuestError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CareerQuestError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CareerQuestError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 任务模块
    async fn create_mission(&self, mission: CreateMissionRequest) -> Result<Mission> {
        self.create_mission_impl(mission).await
    }

    async fn get_mission_by_id(&self, id: i64) -> Result<Option<Mission>> {
        self.get_mission_by_id_impl(id).await
    }

    async fn get_mission_by_order(&self, order: i64) -> Result<Option<Mission>> {
        self.get_mission_by_order_impl(order).await
    }

    async fn list_missions(&self) -> Result<MissionListResponse> {
        self.list_missions_impl().await
    }

    async fn update_mission(
        &self,
        id: i64,
        update: UpdateMissionRequest,
    ) -> Result<Option<Mission>> {
        self.update_mission_impl(id, update).await
    }

    async fn delete_mission(&self, id: i64) -> Result<bool> {
        self.delete_mission_impl(id).await
    }

    async fn list_mission_questions(&self, mission_id: i64) -> Result<Vec<MissionQuestion>> {
        self.list_mission_questions_impl(mission_id).await
    }

    async fn replace_mission_questions(
        &self,
        mission_id: i64,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<MissionQuestion>> {
        self.replace_mission_questions_impl(mission_id, questions)
            .await
    }

    // 学生进度模块
    async fn seed_student_progress(&self, user_id: i64) -> Result<()> {
        self.seed_student_progress_impl(user_id).await
    }

    async fn backfill_mission_progress(&self, mission_id: i64) -> Result<u64> {
        self.backfill_mission_progress_impl(mission_id).await
    }

    async fn list_student_missions(&self, user_id: i64) -> Result<ProgressListResponse> {
        self.list_student_missions_impl(user_id).await
    }

    async fn get_student_mission(
        &self,
        user_id: i64,
        mission_id: i64,
    ) -> Result<Option<StudentMission>> {
        self.get_student_mission_impl(user_id, mission_id).await
    }

    async fn apply_progress_update(&self, write: ProgressWriteSet) -> Result<StudentMission> {
        self.apply_progress_update_impl(write).await
    }

    // 技能模块
    async fn list_student_skills(&self, user_id: i64) -> Result<Vec<StudentSkill>> {
        self.list_student_skills_impl(user_id).await
    }

    async fn list_skill_scopes(&self) -> Result<Vec<SkillScope>> {
        self.list_skill_scopes_impl().await
    }

    async fn upsert_skill_scope(&self, upsert: UpsertSkillScopeRequest) -> Result<SkillScope> {
        self.upsert_skill_scope_impl(upsert).await
    }
}
