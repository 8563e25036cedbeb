//! 任务实体
//!
//! 管理员维护的引用数据。`order` 是唯一的排序键：order == 1 为入口任务，
//! 后继任务通过 order + 1 查找，与存储自增 ID 无关。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub coins: i64,
    #[sea_orm(unique)]
    pub order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission_questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::student_missions::Entity")]
    StudentMissions,
}

impl Related<super::mission_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::student_missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mission(self) -> crate::models::missions::entities::Mission {
        crate::models::missions::entities::Mission {
            id: self.id,
            coins: self.coins,
            order: self.order,
        }
    }
}
