//! Auth sub-client.

use serde_json::json;

use crate::auth::{AdminUser, AuthData, LoginRequest, MemberUser, RegisterRequest, UserLoginRequest};
use crate::client::OrderDeskClient;
use crate::envelope::{ApiResponse, FailureKind, MSG_SESSION_NOT_SAVED};
use crate::http::RequestSpec;
use crate::shared::Role;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Auth<'a> {
    /// `POST /admin/login`. On success the admin namespace becomes active.
    pub async fn admin_login(&self, username: &str, password: &str) -> ApiResponse<AuthData> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .http
            .request(RequestSpec::post("/admin/login").json(&request))
            .await;
        self.persist(Role::Admin, resp, |data| data.user.clone()).await
    }

    /// `POST /user/register`. Registration signs the new member in.
    ///
    /// The response carries no user object; `{userId, promoCode}` is kept
    /// as the user snapshot instead.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResponse<AuthData> {
        let resp = self
            .client
            .http
            .request(RequestSpec::post("/user/register").json(request))
            .await;
        self.persist(Role::Member, resp, |data| {
            data.user.clone().or_else(|| {
                Some(json!({
                    "userId": data.user_id,
                    "promoCode": data.promo_code,
                }))
            })
        })
        .await
    }

    /// `POST /user/login`.
    pub async fn user_login(&self, phone: &str, password: &str) -> ApiResponse<AuthData> {
        let request = UserLoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .http
            .request(RequestSpec::post("/user/login").json(&request))
            .await;
        self.persist(Role::Member, resp, |data| data.user.clone()).await
    }

    /// Forget the session locally. No request is sent.
    pub async fn logout(&self) {
        self.client.http.session().clear().await;
    }

    /// Whether a token is persisted right now. Re-reads the store each call.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.session().is_authenticated().await
    }

    /// Last known user snapshot, without asking the server.
    pub async fn current_user(&self) -> Option<serde_json::Value> {
        self.client.http.session().current_user().await
    }

    /// The snapshot as an admin account, when the admin is signed in.
    pub async fn current_admin(&self) -> Option<AdminUser> {
        self.client.http.session().current_user_as().await
    }

    /// The snapshot as a member account. `None` right after registration,
    /// where only `{userId, promoCode}` is known.
    pub async fn current_member(&self) -> Option<MemberUser> {
        self.client.http.session().current_user_as().await
    }

    async fn persist(
        &self,
        role: Role,
        resp: ApiResponse<AuthData>,
        snapshot: impl FnOnce(&AuthData) -> Option<serde_json::Value>,
    ) -> ApiResponse<AuthData> {
        let data = match resp.data() {
            Some(data) => data,
            None => {
                tracing::warn!(role = role.as_str(), message = resp.message(), "login failed");
                return resp;
            }
        };
        let token = match data.token() {
            Some(token) => token,
            None => {
                tracing::warn!(role = role.as_str(), "login response carried no token");
                return resp;
            }
        };

        let user = snapshot(data);
        if let Err(e) = self.client.http.session().establish(role, token, user).await {
            tracing::error!(role = role.as_str(), error = %e, "failed to persist session");
            return ApiResponse::failure(FailureKind::Storage, MSG_SESSION_NOT_SAVED);
        }
        tracing::info!(role = role.as_str(), "signed in");
        resp
    }
}
