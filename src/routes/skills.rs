use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::skills::requests::UpsertSkillScopeRequest;
use crate::models::users::entities::UserRole;
use crate::services::SkillService;

// 懒加载的全局 SkillService 实例
static SKILL_SERVICE: Lazy<SkillService> = Lazy::new(SkillService::new_lazy);

pub async fn list_skills(req: HttpRequest) -> ActixResult<HttpResponse> {
    SKILL_SERVICE.list_skills(&req).await
}

pub async fn list_scopes(req: HttpRequest) -> ActixResult<HttpResponse> {
    SKILL_SERVICE.list_scopes(&req).await
}

pub async fn upsert_scope(
    req: HttpRequest,
    upsert_data: web::Json<UpsertSkillScopeRequest>,
) -> ActixResult<HttpResponse> {
    SKILL_SERVICE
        .upsert_scope(upsert_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_skill_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/skills")
            .wrap(middlewares::RequireJWT)
            // 映射表对所有登录用户可读
            .route("/scopes", web::get().to(list_scopes))
            .service(
                web::scope("/scopes")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::put().to(upsert_scope)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::get().to(list_skills)),
            ),
    );
}
