use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MissionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_missions(
    service: &MissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_missions().await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取任务列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取任务列表失败: {e}"),
            )),
        ),
    }
}
