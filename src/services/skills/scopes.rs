use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SkillService;
use crate::models::{
    ApiResponse, ErrorCode,
    skills::{requests::UpsertSkillScopeRequest, responses::SkillScopeListResponse},
};

pub async fn handle_list_scopes(
    service: &SkillService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_skill_scopes().await {
        Ok(scopes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SkillScopeListResponse { items: scopes },
            "获取职业领域映射成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取职业领域映射失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_upsert_scope(
    service: &SkillService,
    upsert: UpsertSkillScopeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if upsert.scope.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "职业领域列表不能为空",
        )));
    }

    match storage.upsert_skill_scope(upsert).await {
        Ok(scope) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(scope, "职业领域映射保存成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("职业领域映射保存失败: {e}"),
            )),
        ),
    }
}
