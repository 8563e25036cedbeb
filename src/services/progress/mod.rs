pub mod get;
pub mod list;
pub mod scoring;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
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

    // 学生任务列表
    pub async fn list_missions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_missions(self, request).await
    }

    // 单条任务进度
    pub async fn get_mission(
        &self,
        mission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_mission(self, mission_id, request).await
    }

    // 进度增量更新（合并答卷、重算积分、完成副作用）
    pub async fn update_mission(
        &self,
        mission_id: i64,
        update_request: crate::models::progress::requests::ProgressUpdateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_mission(self, mission_id, update_request, request).await
    }
}
