use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub desc: String,
    pub userid: i64,
    pub dialog_id: i64,
    pub archived_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub owner: i64,
    pub owner_userid: i64,
    pub personal: i64,
    pub task_num: i64,
    pub task_complete: i64,
    pub task_percent: i64,
    pub task_my_num: i64,
    pub task_my_complete: i64,
    pub task_my_percent: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProjectListRequest {
    /// `all`, `team`, or `personal`.
    pub r#type: String,
    /// `all`, `yes`, or `no`.
    pub archived: String,
    pub getcolumn: String,
    pub getuserid: String,
    pub getstatistics: String,
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProjectRequest {
    pub project_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProjectRequest {
    pub name: String,
    pub desc: String,
    /// Comma-separated column names seeded into the new project.
    pub columns: String,
    /// `open` or `close`.
    pub flow: String,
    pub personal: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProjectRequest {
    pub project_id: i64,
    pub name: String,
    pub desc: String,
    pub archive_method: String,
    pub archive_days: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectActionRequest {
    pub project_id: i64,
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectColumn {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub color: String,
    pub sort: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetColumnListRequest {
    pub project_id: i64,
    pub page: i64,
    pub pagesize: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateColumnRequest {
    pub project_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateColumnRequest {
    pub column_id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnActionRequest {
    pub column_id: i64,
}
