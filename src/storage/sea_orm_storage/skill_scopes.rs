use super::SeaOrmStorage;
use crate::entity::skill_scopes::{ActiveModel, Column, Entity as SkillScopes};
use crate::errors::{CareerQuestError, Result};
use crate::models::skills::{entities::SkillScope, requests::UpsertSkillScopeRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 技能-职业领域映射列表
    pub async fn list_skill_scopes_impl(&self) -> Result<Vec<SkillScope>> {
        let rows = SkillScopes::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CareerQuestError::database_operation(format!("查询职业领域映射失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_skill_scope()).collect())
    }

    /// 创建或整体替换一条技能-职业领域映射（object 唯一）
    pub async fn upsert_skill_scope_impl(
        &self,
        upsert: UpsertSkillScopeRequest,
    ) -> Result<SkillScope> {
        let scope = serde_json::to_string(&upsert.scope)
            .map_err(|e| CareerQuestError::serialization(format!("职业领域序列化失败: {e}")))?;

        let existing = SkillScopes::find()
            .filter(Column::Object.eq(upsert.object.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| {
                CareerQuestError::database_operation(format!("查询职业领域映射失败: {e}"))
            })?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    scope: Set(scope),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    CareerQuestError::database_operation(format!("更新职业领域映射失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    object: Set(upsert.object.to_string()),
                    scope: Set(scope),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    CareerQuestError::database_operation(format!("创建职业领域映射失败: {e}"))
                })?
            }
        };

        Ok(result.into_skill_scope())
    }
}
