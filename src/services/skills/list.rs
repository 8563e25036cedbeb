use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SkillService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    skills::responses::{SkillListResponse, SkillResponse},
};

pub async fn handle_list_skills(
    service: &SkillService,
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

    match storage.list_student_skills(user_id).await {
        Ok(skills) => {
            let response = SkillListResponse {
                items: skills.into_iter().map(SkillResponse::from).collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取技能列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取技能列表失败: {e}"),
            )),
        ),
    }
}
