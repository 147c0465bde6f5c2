use crate::shared::api_utils::{get_json, post_empty};
use contracts::system::session::CurrentUser;

pub async fn get_current_user() -> Result<CurrentUser, String> {
    get_json("/api/system/session").await
}

pub async fn logout() -> Result<(), String> {
    post_empty("/api/system/session/logout").await
}
