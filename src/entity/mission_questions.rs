//! 任务题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mission_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mission_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    /// 任务内唯一的题号，也是 answers JSON 的键（自然键）
    pub order: i64,
    /// JSON: 答案令牌 -> 积分标签列表
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    /// 可选的提示（文字或视频链接）
    #[sea_orm(column_type = "Text", nullable)]
    pub hint: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::missions::Entity",
        from = "Column::MissionId",
        to = "super::missions::Column::Id"
    )]
    Mission,
}

impl Related<super::missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::missions::entities::MissionQuestion {
        crate::models::missions::entities::MissionQuestion {
            id: self.id,
            mission_id: self.mission_id,
            question: self.question,
            order: self.order,
            answers: serde_json::from_str(&self.answers).unwrap_or_default(),
            hint: self.hint,
        }
    }
}
