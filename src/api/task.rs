use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::task::{
    CreateSubTaskRequest, CreateTaskDialog, CreateTaskDialogRequest, CreateTaskRequest,
    GetTaskContentRequest, GetTaskFilesRequest, GetTaskListRequest, GetTaskRequest, ProjectTask,
    TaskActionRequest, TaskContent, TaskFile, UpdateTaskRequest,
};
use crate::models::Paginated;

/// Task CRUD and task attachments.
#[async_trait]
pub trait TaskApi {
    /// Page through tasks. `None` uses the default filter.
    async fn get_task_list(
        &self,
        params: Option<GetTaskListRequest>,
    ) -> ApiResult<Paginated<ProjectTask>>;

    async fn get_task(&self, params: GetTaskRequest) -> ApiResult<ProjectTask>;

    async fn get_task_content(&self, params: GetTaskContentRequest) -> ApiResult<TaskContent>;

    async fn get_task_files(&self, params: GetTaskFilesRequest) -> ApiResult<Vec<TaskFile>>;

    async fn create_task(&self, params: CreateTaskRequest) -> ApiResult<ProjectTask>;

    async fn create_sub_task(&self, params: CreateSubTaskRequest) -> ApiResult<ProjectTask>;

    async fn update_task(&self, params: UpdateTaskRequest) -> ApiResult<ProjectTask>;

    /// Open (or fetch) the dialog attached to a task.
    async fn create_task_dialog(&self, params: CreateTaskDialogRequest)
        -> ApiResult<CreateTaskDialog>;

    /// `archive_type` is `add` to archive or `recovery` to restore.
    async fn archive_task(&self, task_id: i64, archive_type: &str) -> ApiResult<()>;

    /// `delete_type` is `delete` to delete or `recovery` to restore.
    async fn delete_task(&self, task_id: i64, delete_type: &str) -> ApiResult<()>;
}

#[async_trait]
impl TaskApi for Client {
    async fn get_task_list(
        &self,
        params: Option<GetTaskListRequest>,
    ) -> ApiResult<Paginated<ProjectTask>> {
        let params = params.unwrap_or_default();
        self.get("/api/project/task/lists", Some(&params)).await
    }

    async fn get_task(&self, params: GetTaskRequest) -> ApiResult<ProjectTask> {
        self.get("/api/project/task/one", Some(&params)).await
    }

    async fn get_task_content(&self, params: GetTaskContentRequest) -> ApiResult<TaskContent> {
        self.get("/api/project/task/content", Some(&params)).await
    }

    async fn get_task_files(&self, params: GetTaskFilesRequest) -> ApiResult<Vec<TaskFile>> {
        self.get("/api/project/task/files", Some(&params)).await
    }

    async fn create_task(&self, params: CreateTaskRequest) -> ApiResult<ProjectTask> {
        self.post("/api/project/task/add", Some(&params)).await
    }

    async fn create_sub_task(&self, params: CreateSubTaskRequest) -> ApiResult<ProjectTask> {
        self.get("/api/project/task/addsub", Some(&params)).await
    }

    async fn update_task(&self, params: UpdateTaskRequest) -> ApiResult<ProjectTask> {
        self.post("/api/project/task/update", Some(&params)).await
    }

    async fn create_task_dialog(
        &self,
        params: CreateTaskDialogRequest,
    ) -> ApiResult<CreateTaskDialog> {
        self.get("/api/project/task/dialog", Some(&params)).await
    }

    async fn archive_task(&self, task_id: i64, archive_type: &str) -> ApiResult<()> {
        let params = TaskActionRequest {
            task_id,
            r#type: archive_type.to_string(),
        };
        self.get_empty("/api/project/task/archived", Some(&params)).await
    }

    async fn delete_task(&self, task_id: i64, delete_type: &str) -> ApiResult<()> {
        let params = TaskActionRequest {
            task_id,
            r#type: delete_type.to_string(),
        };
        self.get_empty("/api/project/task/remove", Some(&params)).await
    }
}
