//! Auth Calls
//!
//! Best-effort "who am I". Any failure, network or unauthenticated,
//! means "no user"; callers then redirect to the server-hosted login.

use crate::models::User;

pub async fn current_user() -> Option<User> {
    let resp = super::get("/auth/me").send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<User>().await.ok()
}
