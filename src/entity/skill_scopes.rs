//! 技能-职业领域映射实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skill_scopes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub object: String,
    /// JSON: 职业领域标签列表
    #[sea_orm(column_type = "Text")]
    pub scope: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_skill_scope(self) -> crate::models::skills::entities::SkillScope {
        use crate::models::skills::entities::{SkillObject, SkillScope};

        SkillScope {
            id: self.id,
            object: self
                .object
                .parse::<SkillObject>()
                .unwrap_or(SkillObject::Social),
            scope: serde_json::from_str(&self.scope).unwrap_or_default(),
        }
    }
}
