pub mod list;
pub mod scopes;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::skills::requests::UpsertSkillScopeRequest;
use crate::storage::Storage;

pub struct SkillService {
    storage: Option<Arc<dyn Storage>>,
}

impl SkillService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学生技能列表（百分比视图）
    pub async fn list_skills(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_skills(self, request).await
    }

    // 技能-职业领域映射列表
    pub async fn list_scopes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        scopes::handle_list_scopes(self, request).await
    }

    // 创建或整体替换一条映射（管理员）
    pub async fn upsert_scope(
        &self,
        upsert: UpsertSkillScopeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        scopes::handle_upsert_scope(self, upsert, request).await
    }
}
