use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MissionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete_mission(
    service: &MissionService,
    mission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_mission(mission_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("任务删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MissionNotFound,
            "任务不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("任务删除失败: {e}"),
            )),
        ),
    }
}
