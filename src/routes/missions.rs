use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::missions::requests::{
    CreateMissionRequest, CreateQuestionRequest, UpdateMissionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::MissionService;
use crate::utils::SafeMissionIdI64;

// 懒加载的全局 MissionService 实例
static MISSION_SERVICE: Lazy<MissionService> = Lazy::new(MissionService::new_lazy);

pub async fn list_missions(req: HttpRequest) -> ActixResult<HttpResponse> {
    MISSION_SERVICE.list_missions(&req).await
}

pub async fn list_questions(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
) -> ActixResult<HttpResponse> {
    MISSION_SERVICE.list_questions(mission_id.0, &req).await
}

pub async fn create_mission(
    req: HttpRequest,
    mission_data: web::Json<CreateMissionRequest>,
) -> ActixResult<HttpResponse> {
    MISSION_SERVICE
        .create_mission(mission_data.into_inner(), &req)
        .await
}

pub async fn update_mission(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
    update_data: web::Json<UpdateMissionRequest>,
) -> ActixResult<HttpResponse> {
    MISSION_SERVICE
        .update_mission(mission_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn replace_questions(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
    questions: web::Json<Vec<CreateQuestionRequest>>,
) -> ActixResult<HttpResponse> {
    MISSION_SERVICE
        .replace_questions(mission_id.0, questions.into_inner(), &req)
        .await
}

pub async fn delete_mission(
    req: HttpRequest,
    mission_id: SafeMissionIdI64,
) -> ActixResult<HttpResponse> {
    MISSION_SERVICE.delete_mission(mission_id.0, &req).await
}

// 配置路由
pub fn configure_mission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/missions")
            .wrap(middlewares::RequireJWT)
            // 引用数据读取对所有登录用户开放
            .route("", web::get().to(list_missions))
            .route("/{mission_id}/questions", web::get().to(list_questions))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(create_mission))
                    .route("/{mission_id}", web::put().to(update_mission))
                    .route("/{mission_id}/questions", web::put().to(replace_questions))
                    .route("/{mission_id}", web::delete().to(delete_mission)),
            ),
    );
}
