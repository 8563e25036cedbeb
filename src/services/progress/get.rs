use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::progress::responses::ProgressResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::ProgressService;

pub async fn handle_get_mission(
    service: &ProgressService,
    mission_id: i64,
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

    let questions_count = match storage.list_mission_questions(mission_id).await {
        Ok(questions) => questions.len() as i64,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    match storage.get_student_mission(user_id, mission_id).await {
        Ok(Some(progress)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgressResponse {
                progress,
                mission_order: mission.order,
                questions_count,
            },
            "获取任务进度成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgressNotFound,
            "任务进度不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询任务进度失败: {e}"),
            )),
        ),
    }
}
