use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dialog::DialogInfo;

/// Send text or markdown into a dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageRequest {
    pub dialog_id: i64,
    pub text: String,
    /// `md` or `text`; defaults to `md` when left empty.
    pub text_type: String,
    pub silence: bool,
}

/// Send text to a user, resolving their private dialog first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageToUserRequest {
    pub userid: i64,
    pub text: String,
    pub text_type: String,
    pub silence: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendBotMessageRequest {
    pub userid: i64,
    pub text: String,
    /// Bot category; defaults to `system-msg` when left empty.
    pub bot_type: String,
    /// Display name, honoured for custom bot types only.
    pub bot_name: String,
    pub silence: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendAnonymousMessageRequest {
    pub userid: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendStreamMessageRequest {
    pub userid: i64,
    pub stream_url: String,
    /// Defaults to `api` when left empty.
    pub source: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendNoticeMessageRequest {
    pub dialog_id: i64,
    pub dialog_ids: String,
    pub notice: String,
    pub silence: bool,
    pub source: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateContent {
    pub content: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendTemplateMessageRequest {
    pub dialog_id: i64,
    pub dialog_ids: String,
    pub content: Vec<TemplateContent>,
    pub title: String,
    pub silence: bool,
    pub source: String,
}

/// A single message within a dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessage {
    pub id: i64,
    pub dialog_id: i64,
    pub userid: i64,
    pub bot: i64,
    pub created_at: String,
    pub r#type: String,
    pub mtype: String,
    /// Content shape varies with `mtype`.
    pub msg: Value,
    pub reply_id: i64,
    pub reply_num: i64,
    pub forward_id: i64,
    pub forward_num: i64,
    pub tag: i64,
    pub todo: i64,
    pub read: i64,
    pub send: i64,
    pub read_at: Option<String>,
    pub mention: i64,
    pub dot: i64,
    pub emoji: Vec<Value>,
    pub link: i64,
    pub modify: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessageList {
    pub list: Vec<DialogMessage>,
    pub time: i64,
    pub dialog: DialogInfo,
    pub todo: Vec<Value>,
    pub top: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMessageSearch {
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMessageListRequest {
    pub dialog_id: i64,
    pub msg_id: i64,
    pub position_id: i64,
    pub prev_id: i64,
    pub next_id: i64,
    pub msg_type: String,
    pub take: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMessageRequest {
    pub dialog_id: i64,
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMessageRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawMessageRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardMessageRequest {
    pub msg_id: i64,
    pub dialogids: Vec<i64>,
    pub userids: Vec<i64>,
    pub show_source: i64,
    pub leave_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleMessageTodoRequest {
    pub msg_id: i64,
    /// `all` or a targeted toggle; defaults to `all` when left empty.
    pub r#type: String,
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkMessageDoneRequest {
    pub msg_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoUser {
    pub userid: i64,
    pub nickname: String,
    pub userimg: String,
    pub done: bool,
    pub done_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoList {
    pub users: Vec<TodoUser>,
}
