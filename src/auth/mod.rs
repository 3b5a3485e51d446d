//! Authentication for both roles: admin login, member registration and login.
//!
//! Login calls persist the returned token and user snapshot through the
//! [`SessionManager`](crate::session::SessionManager); every later request
//! picks the token up from there. Logout is local only: the backend has no
//! logout route, and dropping the token is enough to end the session.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::PromoCode;

// ── Requests ─────────────────────────────────────────────────────────────────

/// Body of `POST /admin/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /user/login`.
#[derive(Debug, Clone, Serialize)]
pub struct UserLoginRequest {
    pub phone: String,
    pub password: String,
}

/// Body of `POST /user/register`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub pay_password: String,
    /// Upline's promo code. Sent as `""` when there is none.
    pub promo_code: String,
}

impl RegisterRequest {
    pub fn new(name: &str, phone: &str, password: &str, pay_password: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
            pay_password: pay_password.to_string(),
            promo_code: String::new(),
        }
    }

    pub fn promo_code(mut self, promo_code: &str) -> Self {
        self.promo_code = promo_code.to_string();
        self
    }
}

// ── Responses ────────────────────────────────────────────────────────────────

/// `data` of a login or registration response.
///
/// Logins return `{token, user}`; registration returns
/// `{token, userId, promoCode}` with no user object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<PromoCode>,
}

impl AuthData {
    /// The token, if one was issued and is non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Admin account as returned by `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    /// e.g. `super_admin`.
    pub role: String,
}

/// Member account as returned by `POST /user/login` and `GET /user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    pub id: i64,
    #[serde(default)]
    pub promo_code: Option<PromoCode>,
    #[serde(default)]
    pub name: Option<String>,
    /// Masked as `138****1234`.
    #[serde(default)]
    pub phone: Option<String>,
    /// `ordinary` or `agent`.
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub register_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_request_uses_camel_case() {
        let req = RegisterRequest::new("张三", "13800000000", "pw", "123456").promo_code("AB12");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "张三",
                "phone": "13800000000",
                "password": "pw",
                "payPassword": "123456",
                "promoCode": "AB12"
            })
        );
    }

    #[test]
    fn register_without_promo_sends_empty_string() {
        let value = serde_json::to_value(RegisterRequest::new("a", "b", "c", "d")).unwrap();
        assert_eq!(value["promoCode"], "");
    }

    #[test]
    fn auth_data_reads_both_shapes() {
        let login: AuthData =
            serde_json::from_value(json!({"token": "t", "user": {"id": 7}})).unwrap();
        assert_eq!(login.token(), Some("t"));
        assert_eq!(login.user, Some(json!({"id": 7})));

        let register: AuthData =
            serde_json::from_value(json!({"token": "t", "userId": 9, "promoCode": "X1"})).unwrap();
        assert!(register.user.is_none());
        assert_eq!(register.user_id, Some(9));
        assert_eq!(register.promo_code, Some(PromoCode::from("X1")));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let data = AuthData {
            token: Some(String::new()),
            ..AuthData::default()
        };
        assert_eq!(data.token(), None);
    }

    #[test]
    fn member_user_decodes_profile() {
        let user: MemberUser = serde_json::from_value(json!({
            "id": 3,
            "promoCode": "P3",
            "name": "李四",
            "phone": "139****5678",
            "userType": "agent",
            "parentId": null,
            "points": 12.5,
            "registerDate": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(user.user_type.as_deref(), Some("agent"));
        assert_eq!(user.points, 12.5);
        assert!(user.parent_id.is_none());
    }
}
