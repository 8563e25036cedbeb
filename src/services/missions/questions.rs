use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MissionService;
use crate::models::{
    ApiResponse, ErrorCode,
    missions::{
        requests::CreateQuestionRequest,
        responses::{QuestionListResponse, QuestionResponse},
    },
};

/// 学生可见的题目列表：答案只暴露令牌，积分标签不出服务端
pub async fn handle_list_questions(
    service: &MissionService,
    mission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_mission_by_id(mission_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.list_mission_questions(mission_id).await {
        Ok(questions) => {
            let response = QuestionListResponse {
                items: questions.into_iter().map(QuestionResponse::from).collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取题目列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取题目列表失败: {e}"),
            )),
        ),
    }
}

/// 整体替换任务题目（管理员）
pub async fn handle_replace_questions(
    service: &MissionService,
    mission_id: i64,
    questions: Vec<CreateQuestionRequest>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_mission_by_id(mission_id).await {
        Ok(Some(_)) => {}
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
    }

    if let Err(response) = super::create::validate_questions(&questions) {
        return Ok(response);
    }

    match storage.replace_mission_questions(mission_id, questions).await {
        Ok(replaced) => {
            let response = QuestionListResponse {
                items: replaced.into_iter().map(QuestionResponse::from).collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "题目替换成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("题目替换失败: {e}"),
            )),
        ),
    }
}
