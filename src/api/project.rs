use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::project::{
    ColumnActionRequest, CreateColumnRequest, CreateProjectRequest, GetColumnListRequest,
    GetProjectListRequest, GetProjectRequest, Project, ProjectActionRequest, ProjectColumn,
    UpdateColumnRequest, UpdateProjectRequest,
};
use crate::models::Paginated;

/// Project and column management.
#[async_trait]
pub trait ProjectApi {
    /// Page through visible projects. `None` uses the default filter.
    async fn get_project_list(
        &self,
        params: Option<GetProjectListRequest>,
    ) -> ApiResult<Paginated<Project>>;

    async fn get_project(&self, params: GetProjectRequest) -> ApiResult<Project>;

    async fn create_project(&self, params: CreateProjectRequest) -> ApiResult<Project>;

    async fn update_project(&self, params: UpdateProjectRequest) -> ApiResult<Project>;

    async fn exit_project(&self, project_id: i64) -> ApiResult<()>;

    async fn delete_project(&self, project_id: i64) -> ApiResult<()>;

    async fn get_column_list(
        &self,
        params: GetColumnListRequest,
    ) -> ApiResult<Paginated<ProjectColumn>>;

    async fn create_column(&self, params: CreateColumnRequest) -> ApiResult<ProjectColumn>;

    async fn update_column(&self, params: UpdateColumnRequest) -> ApiResult<ProjectColumn>;

    async fn delete_column(&self, column_id: i64) -> ApiResult<()>;
}

#[async_trait]
impl ProjectApi for Client {
    async fn get_project_list(
        &self,
        params: Option<GetProjectListRequest>,
    ) -> ApiResult<Paginated<Project>> {
        let params = params.unwrap_or_default();
        self.get("/api/project/lists", Some(&params)).await
    }

    async fn get_project(&self, params: GetProjectRequest) -> ApiResult<Project> {
        self.get("/api/project/one", Some(&params)).await
    }

    async fn create_project(&self, params: CreateProjectRequest) -> ApiResult<Project> {
        self.get("/api/project/add", Some(&params)).await
    }

    async fn update_project(&self, params: UpdateProjectRequest) -> ApiResult<Project> {
        self.get("/api/project/update", Some(&params)).await
    }

    async fn exit_project(&self, project_id: i64) -> ApiResult<()> {
        let params = ProjectActionRequest {
            project_id,
            ..Default::default()
        };
        self.get_empty("/api/project/exit", Some(&params)).await
    }

    async fn delete_project(&self, project_id: i64) -> ApiResult<()> {
        let params = ProjectActionRequest {
            project_id,
            ..Default::default()
        };
        self.get_empty("/api/project/remove", Some(&params)).await
    }

    async fn get_column_list(
        &self,
        params: GetColumnListRequest,
    ) -> ApiResult<Paginated<ProjectColumn>> {
        self.get("/api/project/column/lists", Some(&params)).await
    }

    async fn create_column(&self, params: CreateColumnRequest) -> ApiResult<ProjectColumn> {
        self.get("/api/project/column/add", Some(&params)).await
    }

    async fn update_column(&self, params: UpdateColumnRequest) -> ApiResult<ProjectColumn> {
        self.get("/api/project/column/update", Some(&params)).await
    }

    async fn delete_column(&self, column_id: i64) -> ApiResult<()> {
        let params = ColumnActionRequest { column_id };
        self.get_empty("/api/project/column/remove", Some(&params)).await
    }
}
