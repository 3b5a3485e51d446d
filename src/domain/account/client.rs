//! Account sub-client.

use crate::client::OrderDeskClient;
use crate::domain::account::{ChangePasswordRequest, MemberProfile, PromoCodeCheck, PromoCodeRequest};
use crate::domain::settings::SystemSettings;
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;

/// Sub-client for the signed-in member's own account.
pub struct Account<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Account<'a> {
    /// `GET /user/profile`.
    pub async fn profile(&self) -> ApiResponse<MemberProfile> {
        self.client.http.request(RequestSpec::get("/user/profile")).await
    }

    /// `POST /user/validate-promo-code`. Usable before registration.
    pub async fn validate_promo_code(&self, promo_code: &str) -> ApiResponse<PromoCodeCheck> {
        let spec = RequestSpec::post("/user/validate-promo-code").json(&PromoCodeRequest { promo_code });
        self.client.http.request(spec).await
    }

    /// `PUT /user/change-password`.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> JsonResponse {
        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let spec = RequestSpec::put("/user/change-password").json(&body);
        self.client.http.request(spec).await
    }

    /// `PUT /user/change-pay-password`.
    pub async fn change_pay_password(&self, old_password: &str, new_password: &str) -> JsonResponse {
        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let spec = RequestSpec::put("/user/change-pay-password").json(&body);
        self.client.http.request(spec).await
    }

    /// `GET /user/settings`. The public subset of the system settings.
    pub async fn settings(&self) -> ApiResponse<SystemSettings> {
        self.client.http.request(RequestSpec::get("/user/settings")).await
    }
}
