//! 学生任务进度实体
//!
//! 每个 (user_id, mission_id) 一行。`stage` 为派生字段（已答题数），
//! 只由积分引擎重算，客户端不可直接写入。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mission_id: i64,
    pub user_id: i64,
    pub stage: i64,
    /// JSON: 题号 -> 答案令牌（单个或列表）
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    pub reaction: String,
    pub is_complete: bool,
    pub is_unlocked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::missions::Entity",
        from = "Column::MissionId",
        to = "super::missions::Column::Id"
    )]
    Mission,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_mission(self) -> crate::models::progress::entities::StudentMission {
        use crate::models::progress::entities::{Reaction, StudentMission};

        StudentMission {
            id: self.id,
            mission_id: self.mission_id,
            user_id: self.user_id,
            stage: self.stage,
            answers: serde_json::from_str(&self.answers).unwrap_or_default(),
            reaction: self.reaction.parse::<Reaction>().ok(),
            is_complete: self.is_complete,
            is_unlocked: self.is_unlocked,
        }
    }
}
