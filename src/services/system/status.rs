use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, ErrorCode, system::SystemStatusResponse};

pub async fn get_status(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);

    let users_total = match storage.count_users().await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计用户数量失败: {e}"),
                )),
            );
        }
    };

    let response = SystemStatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds: (chrono::Utc::now() - started_at).num_seconds(),
        users_total,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取系统状态成功")))
}
