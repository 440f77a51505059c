use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::dialog::{
    AddGroupUserRequest, CreateGroupRequest, DialogInfo, DialogMember, DisbandGroupRequest,
    EditGroupRequest, GetDialogRequest, GetDialogUserRequest, RemoveGroupUserRequest,
    SearchDialogRequest, TimeRangeRequest, TransferGroupRequest,
};
use crate::models::Paginated;

/// Dialog listing and group lifecycle.
#[async_trait]
pub trait DialogApi {
    /// Page through the caller's dialogs. `None` uses the default window.
    async fn get_dialog_list(
        &self,
        params: Option<TimeRangeRequest>,
    ) -> ApiResult<Paginated<DialogInfo>>;

    async fn search_dialog(&self, params: SearchDialogRequest) -> ApiResult<Vec<DialogInfo>>;

    async fn get_dialog_one(&self, params: GetDialogRequest) -> ApiResult<DialogInfo>;

    /// Members of a dialog.
    async fn get_dialog_user(&self, params: GetDialogUserRequest) -> ApiResult<Vec<DialogMember>>;

    async fn create_group(&self, params: CreateGroupRequest) -> ApiResult<DialogInfo>;

    async fn edit_group(&self, params: EditGroupRequest) -> ApiResult<()>;

    async fn add_group_user(&self, params: AddGroupUserRequest) -> ApiResult<()>;

    async fn remove_group_user(&self, params: RemoveGroupUserRequest) -> ApiResult<()>;

    /// Leave a group: a member removal with an empty member list.
    async fn exit_group(&self, dialog_id: i64) -> ApiResult<()>;

    async fn transfer_group(&self, params: TransferGroupRequest) -> ApiResult<()>;

    async fn disband_group(&self, params: DisbandGroupRequest) -> ApiResult<()>;
}

#[async_trait]
impl DialogApi for Client {
    async fn get_dialog_list(
        &self,
        params: Option<TimeRangeRequest>,
    ) -> ApiResult<Paginated<DialogInfo>> {
        let params = params.unwrap_or_default();
        self.get("/api/dialog/lists", Some(&params)).await
    }

    async fn search_dialog(&self, params: SearchDialogRequest) -> ApiResult<Vec<DialogInfo>> {
        self.get("/api/dialog/search", Some(&params)).await
    }

    async fn get_dialog_one(&self, params: GetDialogRequest) -> ApiResult<DialogInfo> {
        self.get("/api/dialog/one", Some(&params)).await
    }

    async fn get_dialog_user(&self, params: GetDialogUserRequest) -> ApiResult<Vec<DialogMember>> {
        self.get("/api/dialog/user", Some(&params)).await
    }

    async fn create_group(&self, params: CreateGroupRequest) -> ApiResult<DialogInfo> {
        self.get("/api/dialog/group/add", Some(&params)).await
    }

    async fn edit_group(&self, params: EditGroupRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/group/edit", Some(&params)).await
    }

    async fn add_group_user(&self, params: AddGroupUserRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/group/adduser", Some(&params)).await
    }

    async fn remove_group_user(&self, params: RemoveGroupUserRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/group/deluser", Some(&params)).await
    }

    async fn exit_group(&self, dialog_id: i64) -> ApiResult<()> {
        self.remove_group_user(RemoveGroupUserRequest {
            dialog_id,
            userids: Vec::new(),
        })
        .await
    }

    async fn transfer_group(&self, params: TransferGroupRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/group/transfer", Some(&params)).await
    }

    async fn disband_group(&self, params: DisbandGroupRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/group/disband", Some(&params)).await
    }
}
