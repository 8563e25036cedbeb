pub mod create;
pub mod delete;
pub mod list;
pub mod questions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::missions::requests::{
    CreateMissionRequest, CreateQuestionRequest, UpdateMissionRequest,
};
use crate::storage::Storage;

pub struct MissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl MissionService {
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

    // 任务列表（引用数据，按 order 排序）
    pub async fn list_missions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_missions(self, request).await
    }

    // 任务题目列表（只暴露答案令牌与提示）
    pub async fn list_questions(
        &self,
        mission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::handle_list_questions(self, mission_id, request).await
    }

    // 创建任务（管理员；为已有学生补齐进度行）
    pub async fn create_mission(
        &self,
        create_request: CreateMissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_mission(self, create_request, request).await
    }

    // 更新任务（管理员）
    pub async fn update_mission(
        &self,
        mission_id: i64,
        update_request: UpdateMissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_mission(self, mission_id, update_request, request).await
    }

    // 整体替换任务题目（管理员）
    pub async fn replace_questions(
        &self,
        mission_id: i64,
        questions: Vec<CreateQuestionRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::handle_replace_questions(self, mission_id, questions, request).await
    }

    // 删除任务（管理员）
    pub async fn delete_mission(
        &self,
        mission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_mission(self, mission_id, request).await
    }
}
