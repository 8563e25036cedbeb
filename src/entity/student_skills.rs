//! 学生技能实体
//!
//! 每个 (user_id, object) 一行，注册时预创建六行。points 只由积分引擎写入。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub object: String,
    pub points: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_skill(self) -> crate::models::skills::entities::StudentSkill {
        use crate::models::skills::entities::{SkillObject, StudentSkill};

        StudentSkill {
            id: self.id,
            user_id: self.user_id,
            object: self
                .object
                .parse::<SkillObject>()
                .unwrap_or(SkillObject::Social),
            points: self.points,
        }
    }
}
