use super::SeaOrmStorage;
use crate::entity::mission_questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as MissionQuestions,
};
use crate::entity::missions::{ActiveModel, Column, Entity as Missions};
use crate::errors::{CareerQuestError, Result};
use crate::models::missions::{
    entities::{Mission, MissionQuestion},
    requests::{CreateMissionRequest, CreateQuestionRequest, UpdateMissionRequest},
    responses::MissionListResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建任务（连同题目原子插入）
    pub async fn create_mission_impl(&self, req: CreateMissionRequest) -> Result<Mission> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            coins: Set(req.coins),
            order: Set(req.order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let mission = model
            .insert(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("创建任务失败: {e}")))?;

        Self::insert_questions(&txn, mission.id, req.questions).await?;

        txn.commit()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(mission.into_mission())
    }

    /// 通过 ID 获取任务
    pub async fn get_mission_by_id_impl(&self, id: i64) -> Result<Option<Mission>> {
        let result = Missions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_mission()))
    }

    /// 通过排序键获取任务
    pub async fn get_mission_by_order_impl(&self, order: i64) -> Result<Option<Mission>> {
        let result = Missions::find()
            .filter(Column::Order.eq(order))
            .one(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_mission()))
    }

    /// 按 order 升序列出全部任务
    pub async fn list_missions_impl(&self) -> Result<MissionListResponse> {
        let missions = Missions::find()
            .order_by_asc(Column::Order)
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(MissionListResponse {
            items: missions.into_iter().map(|m| m.into_mission()).collect(),
        })
    }

    /// 更新任务
    pub async fn update_mission_impl(
        &self,
        id: i64,
        update: UpdateMissionRequest,
    ) -> Result<Option<Mission>> {
        let existing = self.get_mission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(coins) = update.coins {
            model.coins = Set(coins);
        }

        if let Some(order) = update.order {
            model.order = Set(order);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("更新任务失败: {e}")))?;

        self.get_mission_by_id_impl(id).await
    }

    /// 删除任务（题目与进度行由外键级联删除）
    pub async fn delete_mission_impl(&self, id: i64) -> Result<bool> {
        let result = Missions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("删除任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按题号升序列出任务题目
    pub async fn list_mission_questions_impl(
        &self,
        mission_id: i64,
    ) -> Result<Vec<MissionQuestion>> {
        let questions = MissionQuestions::find()
            .filter(QuestionColumn::MissionId.eq(mission_id))
            .order_by_asc(QuestionColumn::Order)
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    /// 整体替换任务题目（先删后插，单事务）
    pub async fn replace_mission_questions_impl(
        &self,
        mission_id: i64,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<Vec<MissionQuestion>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("开启事务失败: {e}")))?;

        MissionQuestions::delete_many()
            .filter(QuestionColumn::MissionId.eq(mission_id))
            .exec(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("清空题目失败: {e}")))?;

        Self::insert_questions(&txn, mission_id, questions).await?;

        txn.commit()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("提交事务失败: {e}")))?;

        self.list_mission_questions_impl(mission_id).await
    }

    async fn insert_questions<C: ConnectionTrait>(
        conn: &C,
        mission_id: i64,
        questions: Vec<CreateQuestionRequest>,
    ) -> Result<()> {
        if questions.is_empty() {
            return Ok(());
        }

        let mut models = Vec::with_capacity(questions.len());
        for q in questions {
            let answers = serde_json::to_string(&q.answers).map_err(|e| {
                CareerQuestError::serialization(format!("题目答案序列化失败: {e}"))
            })?;

            models.push(QuestionActiveModel {
                mission_id: Set(mission_id),
                question: Set(q.question),
                order: Set(q.order),
                answers: Set(answers),
                hint: Set(q.hint),
                ..Default::default()
            });
        }

        MissionQuestions::insert_many(models)
            .exec(conn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("插入题目失败: {e}")))?;

        Ok(())
    }
}
