//! 学生任务进度的存储实现
//!
//! `apply_progress_update_impl` 是积分引擎的落库端：一次保存产生的
//! 进度行更新、技能/排名/创业精神写入、发币、后继解锁和毕业时间戳
//! 全部在同一个数据库事务内完成。

use super::SeaOrmStorage;
use crate::entity::mission_questions::{Column as QuestionColumn, Entity as MissionQuestions};
use crate::entity::missions::{Column as MissionColumn, Entity as Missions};
use crate::entity::student_missions::{ActiveModel, Column, Entity as StudentMissions};
use crate::entity::student_skills::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as StudentSkills,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CareerQuestError, Result};
use crate::models::progress::{
    entities::{MissionScoring, ProgressWriteSet, StudentMission},
    responses::{ProgressListResponse, ProgressResponse},
};
use crate::models::skills::entities::SkillObject;
use crate::models::users::entities::UserRole;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ExprTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::Expr,
};
use std::collections::HashMap;
use tracing::info;

impl SeaOrmStorage {
    /// 注册播种：六个技能行 + 每个任务一条进度行（入口任务解锁）
    pub async fn seed_student_progress_impl(&self, user_id: i64) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("开启事务失败: {e}")))?;

        let skills: Vec<SkillActiveModel> = SkillObject::ALL
            .iter()
            .map(|object| SkillActiveModel {
                user_id: Set(user_id),
                object: Set(object.to_string()),
                points: Set(0),
                ..Default::default()
            })
            .collect();

        StudentSkills::insert_many(skills)
            .exec(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("播种技能行失败: {e}")))?;

        let missions = Missions::find()
            .order_by_asc(MissionColumn::Order)
            .all(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务列表失败: {e}")))?;

        if !missions.is_empty() {
            let now = chrono::Utc::now().timestamp();
            let rows: Vec<ActiveModel> = missions
                .into_iter()
                .map(|mission| ActiveModel {
                    mission_id: Set(mission.id),
                    user_id: Set(user_id),
                    stage: Set(0),
                    answers: Set("{}".to_string()),
                    reaction: Set(String::new()),
                    is_complete: Set(false),
                    is_unlocked: Set(mission.order == 1),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                })
                .collect();

            StudentMissions::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    CareerQuestError::database_operation(format!("播种进度行失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 新任务上线后为已有学生补齐进度行
    ///
    /// 已有行的学生跳过；入口任务（order == 1）补齐为已解锁，其余锁定。
    pub async fn backfill_mission_progress_impl(&self, mission_id: i64) -> Result<u64> {
        let mission = Missions::find_by_id(mission_id)
            .one(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务失败: {e}")))?
            .ok_or_else(|| CareerQuestError::not_found(format!("任务 {mission_id} 不存在")))?;

        let student_ids: Vec<i64> = Users::find()
            .select_only()
            .column(UserColumn::Id)
            .filter(UserColumn::Role.eq(UserRole::STUDENT))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询学生列表失败: {e}")))?;

        let seeded_ids: Vec<i64> = StudentMissions::find()
            .select_only()
            .column(Column::UserId)
            .filter(Column::MissionId.eq(mission_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询进度行失败: {e}")))?;

        let seeded: std::collections::HashSet<i64> = seeded_ids.into_iter().collect();
        let now = chrono::Utc::now().timestamp();

        let rows: Vec<ActiveModel> = student_ids
            .into_iter()
            .filter(|id| !seeded.contains(id))
            .map(|user_id| ActiveModel {
                mission_id: Set(mission_id),
                user_id: Set(user_id),
                stage: Set(0),
                answers: Set("{}".to_string()),
                reaction: Set(String::new()),
                is_complete: Set(false),
                is_unlocked: Set(mission.order == 1),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        if rows.is_empty() {
            return Ok(0);
        }

        let count = rows.len() as u64;
        StudentMissions::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("补齐进度行失败: {e}")))?;

        info!("任务 {} 补齐了 {} 条学生进度行", mission_id, count);
        Ok(count)
    }

    /// 学生任务列表（按任务 order 排序，附题目总数）
    pub async fn list_student_missions_impl(&self, user_id: i64) -> Result<ProgressListResponse> {
        let missions = Missions::find()
            .order_by_asc(MissionColumn::Order)
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询任务列表失败: {e}")))?;

        let rows = StudentMissions::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询进度行失败: {e}")))?;

        let question_missions: Vec<i64> = MissionQuestions::find()
            .select_only()
            .column(QuestionColumn::MissionId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询题目失败: {e}")))?;

        let mut question_counts: HashMap<i64, i64> = HashMap::new();
        for mission_id in question_missions {
            *question_counts.entry(mission_id).or_insert(0) += 1;
        }

        let mut by_mission: HashMap<i64, StudentMission> = rows
            .into_iter()
            .map(|m| (m.mission_id, m.into_student_mission()))
            .collect();

        // 任务表驱动排序，缺行的任务（尚未补齐）直接跳过
        let items = missions
            .into_iter()
            .filter_map(|mission| {
                by_mission.remove(&mission.id).map(|progress| ProgressResponse {
                    progress,
                    mission_order: mission.order,
                    questions_count: question_counts.get(&mission.id).copied().unwrap_or(0),
                })
            })
            .collect();

        Ok(ProgressListResponse { items })
    }

    /// 获取单条进度
    pub async fn get_student_mission_impl(
        &self,
        user_id: i64,
        mission_id: i64,
    ) -> Result<Option<StudentMission>> {
        let result = StudentMissions::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MissionId.eq(mission_id))
            .one(&self.db)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("查询进度行失败: {e}")))?;

        Ok(result.map(|m| m.into_student_mission()))
    }

    /// 原子落库一次进度保存
    ///
    /// 顺序：进度行 -> 积分写入 -> 完成副作用（发币、解锁后继、毕业戳）。
    /// 任一步失败整体回滚。
    pub async fn apply_progress_update_impl(
        &self,
        write: ProgressWriteSet,
    ) -> Result<StudentMission> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let answers = serde_json::to_string(&write.answers)
            .map_err(|e| CareerQuestError::serialization(format!("答卷序列化失败: {e}")))?;

        let mut model = ActiveModel {
            id: Set(write.record_id),
            answers: Set(answers),
            stage: Set(write.stage),
            is_complete: Set(write.is_complete),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(ref reaction) = write.reaction {
            model.reaction = Set(reaction.to_string());
        }

        model
            .update(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("更新进度行失败: {e}")))?;

        if let Some(ref scoring) = write.scoring {
            Self::apply_scoring(&txn, write.user_id, scoring, now).await?;
        }

        if let Some(ref effects) = write.completion {
            // 发币：只在完成边沿触发，计入学生余额
            Users::update_many()
                .col_expr(
                    UserColumn::Coins,
                    Expr::col(UserColumn::Coins).add(effects.coins_delta),
                )
                .col_expr(UserColumn::UpdatedAt, Expr::value(now))
                .filter(UserColumn::Id.eq(write.user_id))
                .exec(&txn)
                .await
                .map_err(|e| CareerQuestError::database_operation(format!("发放金币失败: {e}")))?;

            // 解锁后继任务；最后一个任务没有后继，静默跳过
            let next = Missions::find()
                .filter(MissionColumn::Order.eq(effects.next_mission_order))
                .one(&txn)
                .await
                .map_err(|e| {
                    CareerQuestError::database_operation(format!("查询后继任务失败: {e}"))
                })?;

            if let Some(next) = next {
                StudentMissions::update_many()
                    .col_expr(Column::IsUnlocked, Expr::value(true))
                    .col_expr(Column::UpdatedAt, Expr::value(now))
                    .filter(Column::UserId.eq(write.user_id))
                    .filter(Column::MissionId.eq(next.id))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        CareerQuestError::database_operation(format!("解锁后继任务失败: {e}"))
                    })?;
            }

            // 毕业观察：全部任务完成时盖一次时间戳，已盖过的不再覆盖
            let remaining = StudentMissions::find()
                .filter(Column::UserId.eq(write.user_id))
                .filter(Column::IsComplete.eq(false))
                .count(&txn)
                .await
                .map_err(|e| {
                    CareerQuestError::database_operation(format!("统计未完成任务失败: {e}"))
                })?;

            if remaining == 0 {
                Users::update_many()
                    .col_expr(UserColumn::CompletedAt, Expr::value(now))
                    .filter(UserColumn::Id.eq(write.user_id))
                    .filter(UserColumn::CompletedAt.is_null())
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        CareerQuestError::database_operation(format!("写入毕业时间失败: {e}"))
                    })?;
            }
        }

        let refreshed = StudentMissions::find_by_id(write.record_id)
            .one(&txn)
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("回读进度行失败: {e}")))?
            .ok_or_else(|| {
                CareerQuestError::reference_data(format!("进度行 {} 丢失", write.record_id))
            })?;

        txn.commit()
            .await
            .map_err(|e| CareerQuestError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(refreshed.into_student_mission())
    }

    /// 把积分引擎的结论写入学生行 / 技能行
    ///
    /// 所有写入都是覆盖语义：同一任务重复保存会把旧值整体替换。
    async fn apply_scoring<C: ConnectionTrait>(
        conn: &C,
        user_id: i64,
        scoring: &MissionScoring,
        now: i64,
    ) -> Result<()> {
        match scoring {
            MissionScoring::RoleRanking(points) => {
                let json = serde_json::to_string(points).map_err(|e| {
                    CareerQuestError::serialization(format!("角色排名序列化失败: {e}"))
                })?;

                Users::update_many()
                    .col_expr(UserColumn::RolePoints, Expr::value(json))
                    .col_expr(UserColumn::UpdatedAt, Expr::value(now))
                    .filter(UserColumn::Id.eq(user_id))
                    .exec(conn)
                    .await
                    .map_err(|e| {
                        CareerQuestError::database_operation(format!("写入角色排名失败: {e}"))
                    })?;
            }
            MissionScoring::MotivationRanking(points) => {
                let json = serde_json::to_string(points).map_err(|e| {
                    CareerQuestError::serialization(format!("动机排名序列化失败: {e}"))
                })?;

                Users::update_many()
                    .col_expr(UserColumn::MotivationPoints, Expr::value(json))
                    .col_expr(UserColumn::UpdatedAt, Expr::value(now))
                    .filter(UserColumn::Id.eq(user_id))
                    .exec(conn)
                    .await
                    .map_err(|e| {
                        CareerQuestError::database_operation(format!("写入动机排名失败: {e}"))
                    })?;
            }
            MissionScoring::Generic {
                entrepreneurship,
                skill_points,
            } => {
                if let Some(value) = entrepreneurship {
                    Users::update_many()
                        .col_expr(UserColumn::Entrepreneurship, Expr::value(*value))
                        .col_expr(UserColumn::UpdatedAt, Expr::value(now))
                        .filter(UserColumn::Id.eq(user_id))
                        .exec(conn)
                        .await
                        .map_err(|e| {
                            CareerQuestError::database_operation(format!(
                                "写入创业精神失败: {e}"
                            ))
                        })?;
                }

                for (object, points) in skill_points {
                    let result = StudentSkills::update_many()
                        .col_expr(SkillColumn::Points, Expr::value(*points))
                        .filter(SkillColumn::UserId.eq(user_id))
                        .filter(SkillColumn::Object.eq(object.to_string()))
                        .exec(conn)
                        .await
                        .map_err(|e| {
                            CareerQuestError::database_operation(format!(
                                "写入技能分值失败: {e}"
                            ))
                        })?;

                    // 注册播种应已创建六个技能行，缺行说明引用数据损坏
                    if result.rows_affected == 0 {
                        return Err(CareerQuestError::reference_data(format!(
                            "学生 {user_id} 缺少技能行 {object}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
