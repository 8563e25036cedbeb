use super::SeaOrmStorage;
use crate::entity::student_skills::{Column, Entity as StudentSkills};
use crate::errors::{CareerQuestError, Result};
use crate::models::skills::entities::{SkillObject, StudentSkill};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 学生技能列表，按固定自然顺序返回
    pub async fn list_student_skills_impl(&self, user_id: i64) -> Result<Vec<StudentSkill>> {
        let rows = StudentSkills::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询技能失败: {e}")))?;

        let mut by_object: HashMap<SkillObject, StudentSkill> = rows
            .into_iter()
            .map(|m| m.into_skill())
            .map(|s| (s.object, s))
            .collect();

        Ok(SkillObject::ALL
            .iter()
            .filter_map(|object| by_object.remove(object))
            .collect())
    }
}
