use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MissionService;
use crate::models::{
    ApiResponse, ErrorCode,
    missions::requests::{CreateMissionRequest, CreateQuestionRequest},
};

pub async fn handle_create_mission(
    service: &MissionService,
    create_request: CreateMissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // order 是唯一的总排序键，冲突直接拒绝
    match storage.get_mission_by_order(create_request.order).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::MissionOrderConflict,
                format!("任务序号 {} 已被占用", create_request.order),
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    }

    if let Err(response) = validate_questions(&create_request.questions) {
        return Ok(response);
    }

    match storage.create_mission(create_request).await {
        Ok(mission) => {
            // 为已注册的学生补齐这条任务的进度行
            if let Err(e) = storage.backfill_mission_progress(mission.id).await {
                error!("任务 {} 补齐学生进度行失败: {}", mission.id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "任务创建成功但补齐学生进度失败",
                    )),
                );
            }

            Ok(HttpResponse::Created().json(ApiResponse::success(mission, "任务创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("任务创建失败: {e}"),
            )),
        ),
    }
}

/// 题号在任务内必须唯一
pub(crate) fn validate_questions(
    questions: &[CreateQuestionRequest],
) -> Result<(), HttpResponse> {
    let mut seen = std::collections::HashSet::new();
    for q in questions {
        if !seen.insert(q.order) {
            return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("题号 {} 重复", q.order),
            )));
        }
    }
    Ok(())
}
