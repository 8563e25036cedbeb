//! 用户实体
//!
//! 学生角色专用的字段（coins / entrepreneurship / role_points /
//! motivation_points / completed_at）由任务积分引擎维护，其它角色保持默认值。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub verification: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub avatar_url: Option<String>,
    pub coins: i64,
    pub entrepreneurship: i32,
    /// JSON: 角色排名标签 -> 分值
    #[sea_orm(column_type = "Text", nullable)]
    pub role_points: Option<String>,
    /// JSON: 动机排名标签 -> 分值
    #[sea_orm(column_type = "Text", nullable)]
    pub motivation_points: Option<String>,
    pub completed_at: Option<i64>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_missions::Entity")]
    StudentMissions,
    #[sea_orm(has_many = "super::student_skills::Entity")]
    StudentSkills,
}

impl Related<super::student_missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMissions.def()
    }
}

impl Related<super::student_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{
            User, UserProfile, UserRole, UserStatus, VerificationLevel,
        };
        use chrono::{DateTime, Utc};
        use std::collections::BTreeMap;

        let parse_points = |raw: Option<String>| -> BTreeMap<String, u32> {
            raw.and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default()
        };

        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            verification: self
                .verification
                .parse::<VerificationLevel>()
                .unwrap_or(VerificationLevel::Created),
            profile: UserProfile {
                first_name: self.first_name,
                last_name: self.last_name,
                middle_name: self.middle_name,
                avatar_url: self.avatar_url,
            },
            coins: self.coins,
            entrepreneurship: self.entrepreneurship,
            role_points: parse_points(self.role_points),
            motivation_points: parse_points(self.motivation_points),
            completed_at: self
                .completed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
