//! 进度保存的编排
//!
//! 顺序：定位 (学生, 任务) 进度行 -> 状态机检查（锁定 / 终态）->
//! 答卷边界校验 -> 键级合并 -> 积分引擎求值 -> 完成边沿判定 ->
//! 构造写集交给存储层单事务落库。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::progress::{
    entities::{CompletionEffects, ProgressWriteSet, merge_answers},
    requests::ProgressUpdateRequest,
    responses::ProgressResponse,
};
use crate::models::{ApiResponse, ErrorCode};

use super::{ProgressService, scoring};

pub async fn handle_update_mission(
    service: &ProgressService,
    mission_id: i64,
    update: ProgressUpdateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 1. 任务与进度行必须都存在
    let mission = match storage.get_mission_by_id(mission_id).await {
        Ok(Some(mission)) => mission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MissionNotFound,
                "任务不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    };

    let record = match storage.get_student_mission(user_id, mission_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProgressNotFound,
                "任务进度不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务进度失败: {e}"),
                )),
            );
        }
    };

    // 2. 状态机检查：锁定的任务不可写，COMPLETE 是终态
    if !record.is_unlocked {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::MissionLocked,
            "任务尚未解锁",
        )));
    }

    if record.is_complete {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::MissionAlreadyComplete,
            "任务已完成，进度不可再修改",
        )));
    }

    let questions = match storage.list_mission_questions(mission_id).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    // 3. 边界校验：答卷键必须是本任务的题号。未知答案令牌不报错，
    //    积分引擎按无标签处理（容忍部分作答）。
    if let Some(ref patch) = update.answers {
        for key in patch.keys() {
            if !questions.iter().any(|q| q.order.to_string() == *key) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::AnswerInvalid,
                    format!("未知题号: {key}"),
                )));
            }
        }
    }

    // 4. 键级合并答卷，stage 为合并后的已答题数
    let mut answers = record.answers.clone();
    if let Some(patch) = update.answers {
        merge_answers(&mut answers, patch);
    }
    let stage = answers.len() as i64;

    let is_complete = update.is_complete.unwrap_or(false) || record.is_complete;

    // 5. 答卷非空时每次保存都重新求积分（幂等覆盖写）
    let scoring = match scoring::score_answers(&answers, &questions) {
        Ok(scoring) => scoring,
        Err(e) => {
            // 引用数据损坏：不吞掉，大声记录后报内部错误
            error!(
                "任务 {} 学生 {} 积分求值失败: {}",
                mission_id, user_id, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "任务引用数据异常，请联系管理员",
                )),
            );
        }
    };

    // 6. 完成副作用只在 false -> true 边沿触发（终态检查保证了旧值为 false）
    let completion = is_complete.then(|| CompletionEffects {
        coins_delta: mission.coins,
        next_mission_order: mission.order + 1,
    });

    let write = ProgressWriteSet {
        record_id: record.id,
        user_id,
        mission_id,
        answers,
        stage,
        reaction: update.reaction,
        is_complete,
        scoring,
        completion,
    };

    match storage.apply_progress_update(write).await {
        Ok(progress) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgressResponse {
                progress,
                mission_order: mission.order,
                questions_count: questions.len() as i64,
            },
            "进度保存成功",
        ))),
        Err(e) => {
            error!("任务 {} 学生 {} 进度落库失败: {}", mission_id, user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("进度保存失败: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::missions::entities::Mission;
    use crate::models::missions::requests::CreateMissionRequest;
    use crate::models::users::entities::{User, UserProfile, UserRole};
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest, web};
    use migration::{Migrator, MigratorTrait};
    use std::sync::Arc;

    // 内存 SQLite：连接数必须为 1，否则每个池连接各自一份空库
    async fn memory_storage() -> Arc<dyn Storage> {
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = sea_orm::Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Arc::new(SeaOrmStorage { db })
    }

    async fn seed_missions(storage: &Arc<dyn Storage>) -> (Mission, Mission) {
        let first = storage
            .create_mission(CreateMissionRequest {
                coins: 7,
                order: 1,
                questions: vec![],
            })
            .await
            .unwrap();
        let second = storage
            .create_mission(CreateMissionRequest {
                coins: 9,
                order: 2,
                questions: vec![],
            })
            .await
            .unwrap();
        (first, second)
    }

    async fn seed_student(storage: &Arc<dyn Storage>) -> User {
        let user = storage
            .create_user(CreateUserRequest {
                email: "student@example.com".to_string(),
                password: "hashed".to_string(),
                role: UserRole::Student,
                profile: UserProfile {
                    first_name: "小".to_string(),
                    last_name: "李".to_string(),
                    middle_name: None,
                    avatar_url: None,
                },
            })
            .await
            .unwrap();
        storage.seed_student_progress(user.id).await.unwrap();
        user
    }

    fn request_for(storage: &Arc<dyn Storage>, user: &User) -> actix_web::HttpRequest {
        let req = TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();
        req.extensions_mut().insert(user.clone());
        req
    }

    fn complete_patch() -> ProgressUpdateRequest {
        ProgressUpdateRequest {
            answers: None,
            reaction: None,
            is_complete: Some(true),
        }
    }

    #[actix_web::test]
    async fn test_completion_edge_credits_coins_and_unlocks_successor() {
        let storage = memory_storage().await;
        let (first, second) = seed_missions(&storage).await;
        let user = seed_student(&storage).await;
        let service = ProgressService::new_lazy();
        let req = request_for(&storage, &user);

        let resp = handle_update_mission(&service, first.id, complete_patch(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let refreshed = storage.get_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(refreshed.coins, 7);
        assert!(refreshed.completed_at.is_none());

        let successor = storage
            .get_student_mission(user.id, second.id)
            .await
            .unwrap()
            .unwrap();
        assert!(successor.is_unlocked);
        assert!(!successor.is_complete);
    }

    #[actix_web::test]
    async fn test_completed_mission_is_terminal_and_never_recredits() {
        let storage = memory_storage().await;
        let (first, _second) = seed_missions(&storage).await;
        let user = seed_student(&storage).await;
        let service = ProgressService::new_lazy();
        let req = request_for(&storage, &user);

        let resp = handle_update_mission(&service, first.id, complete_patch(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // 重复保存撞上终态：409，金币不再发放
        let resp = handle_update_mission(&service, first.id, complete_patch(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let refreshed = storage.get_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(refreshed.coins, 7);
    }

    #[actix_web::test]
    async fn test_locked_mission_rejects_updates() {
        let storage = memory_storage().await;
        let (_first, second) = seed_missions(&storage).await;
        let user = seed_student(&storage).await;
        let service = ProgressService::new_lazy();
        let req = request_for(&storage, &user);

        let resp = handle_update_mission(&service, second.id, complete_patch(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_completed_at_stamped_when_all_missions_done() {
        let storage = memory_storage().await;
        let (first, second) = seed_missions(&storage).await;
        let user = seed_student(&storage).await;
        let service = ProgressService::new_lazy();
        let req = request_for(&storage, &user);

        handle_update_mission(&service, first.id, complete_patch(), &req)
            .await
            .unwrap();
        let resp = handle_update_mission(&service, second.id, complete_patch(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let refreshed = storage.get_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(refreshed.coins, 16);
        assert!(refreshed.completed_at.is_some());
    }
}
