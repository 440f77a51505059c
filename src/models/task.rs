use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTask {
    pub id: i64,
    pub project_id: i64,
    pub column_id: i64,
    pub parent_id: i64,
    pub name: String,
    pub desc: String,
    pub start_at: String,
    pub end_at: String,
    pub complete_at: String,
    pub archived_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub userid: i64,
    pub dialog_id: i64,
    pub flow_item_id: i64,
    pub flow_item_name: String,
    pub visibility: i64,
    pub color: String,
    pub file_num: i64,
    pub msg_num: i64,
    pub sub_num: i64,
    pub sub_complete: i64,
    pub percent: i64,
    pub project_name: String,
    pub column_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFile {
    pub id: i64,
    pub task_id: i64,
    pub name: String,
    pub ext: String,
    pub size: i64,
    pub path: String,
    pub thumb: String,
    pub userid: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskContent {
    pub content: String,
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTaskListRequest {
    pub project_id: i64,
    pub parent_id: i64,
    /// `all`, `yes`, or `no`.
    pub archived: String,
    /// `all`, `yes`, or `no`.
    pub deleted: String,
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTaskRequest {
    pub task_id: i64,
    pub archived: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTaskContentRequest {
    pub task_id: i64,
    pub history_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTaskFilesRequest {
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub project_id: i64,
    /// Integer id or a column name; the server accepts both.
    pub column_id: Value,
    pub name: String,
    pub content: String,
    pub times: Vec<String>,
    pub owner: Vec<i64>,
    pub top: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSubTaskRequest {
    pub task_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub task_id: i64,
    pub name: String,
    pub content: String,
    pub times: Vec<String>,
    pub owner: Vec<i64>,
    pub assist: Vec<i64>,
    pub color: String,
    pub visibility: i64,
    /// Timestamp string, or `false` to reopen the task.
    pub complete_at: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskActionRequest {
    pub task_id: i64,
    /// `add`, `recovery`, or `delete` depending on the operation.
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskDialogRequest {
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskDialog {
    pub id: i64,
    pub dialog_id: i64,
    pub dialog_data: Value,
}
