use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A conversation thread, direct or group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogInfo {
    pub id: i64,
    pub r#type: String,
    pub group_type: String,
    pub name: String,
    pub avatar: String,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub last_at: String,
    pub mark_unread: i64,
    pub silence: i64,
    pub hide: i64,
    pub color: String,
    pub unread: i64,
    pub unread_one: i64,
    pub mention: i64,
    pub mention_ids: Vec<i64>,
    pub people: i64,
    pub people_user: i64,
    pub people_bot: i64,
    pub todo_num: i64,
    /// Shape varies with the message type.
    pub last_msg: Value,
    pub pinyin: String,
    pub bot: i64,
    pub top_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogMember {
    pub id: i64,
    pub dialog_id: i64,
    pub userid: i64,
    pub nickname: String,
    pub email: String,
    pub userimg: String,
    pub bot: i64,
    pub online: bool,
}

/// Payload of `/api/dialog/open/user`: the private dialog with a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOpenUser {
    pub dialog_user: DialogUser,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogUser {
    pub dialog_id: i64,
    pub userid: i64,
    pub bot: i64,
}

/// Paging window shared by the list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRangeRequest {
    /// Comma-separated timestamp pair, e.g. `1752711205,1751776557`.
    pub timerange: String,
    pub page: i64,
    pub pagesize: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDialogRequest {
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetDialogRequest {
    pub dialog_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetDialogUserRequest {
    pub dialog_id: i64,
    /// Set to 1 to include member nickname/email details.
    pub getuser: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateGroupRequest {
    pub avatar: String,
    pub chat_name: String,
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditGroupRequest {
    pub dialog_id: i64,
    pub avatar: String,
    pub chat_name: String,
    /// 1 checks system-admin rights instead of group-admin rights.
    pub admin: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddGroupUserRequest {
    pub dialog_id: i64,
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveGroupUserRequest {
    pub dialog_id: i64,
    /// Empty list means the caller leaves the group themselves.
    pub userids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferGroupRequest {
    pub dialog_id: i64,
    pub userid: i64,
    /// `yes` to require ownership verification, `no` to skip.
    pub check_owner: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisbandGroupRequest {
    pub dialog_id: i64,
}
