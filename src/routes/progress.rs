use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::progress::requests::ProgressUpdateRequest;
use crate::models::users::entities::UserRole;
use crate::services::ProgressService;
use crate::utils::SafeMissionIdI64;

// 懒加载的全局 ProgressService 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

pub async fn list_missions(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.list_missions(&req).await
}

pub async fn get_mission(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.get_mission(mission_id.0, &req).await
}

pub async fn update_mission(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
    update_data: web::Json<ProgressUpdateRequest>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .update_mission(mission_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/progress")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(list_missions))
                    .route("/{mission_id}", web::get().to(get_mission))
                    .route("/{mission_id}", web::patch().to(update_mission)),
            ),
    );
}
