use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MissionService;
use crate::models::{ApiResponse, ErrorCode, missions::requests::UpdateMissionRequest};

pub async fn handle_update_mission(
    service: &MissionService,
    mission_id: i64,
    update: UpdateMissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 改 order 时检查冲突（允许改回自身当前值）
    if let Some(order) = update.order {
        match storage.get_mission_by_order(order).await {
            Ok(Some(existing)) if existing.id != mission_id => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::MissionOrderConflict,
                    format!("任务序号 {order} 已被占用"),
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询任务失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_mission(mission_id, update).await {
        Ok(Some(mission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(mission, "任务更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MissionNotFound,
            "任务不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("任务更新失败: {e}"),
            )),
        ),
    }
}
