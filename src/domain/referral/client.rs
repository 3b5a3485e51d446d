//! Referrals sub-client.

use crate::client::OrderDeskClient;
use crate::domain::referral::{AddNonMemberRequest, NonMember, NonMemberList, UpgradeToOrdinaryRequest};
use crate::envelope::{ApiResponse, JsonResponse};
use crate::http::RequestSpec;

/// Sub-client for the signed-in member's referral tree.
pub struct Referrals<'a> {
    pub(crate) client: &'a OrderDeskClient,
}

impl<'a> Referrals<'a> {
    /// `GET /users/nonmembers`.
    pub async fn non_members(&self) -> ApiResponse<Vec<NonMember>> {
        let resp: ApiResponse<NonMemberList> =
            self.client.http.request(RequestSpec::get("/users/nonmembers")).await;
        resp.map(|page| page.list)
    }

    /// `POST /users/nonmembers`. `link` may be empty.
    pub async fn add_non_member(&self, name: &str, link: &str) -> JsonResponse {
        let spec = RequestSpec::post("/users/nonmembers").json(&AddNonMemberRequest { name, link });
        self.client.http.request(spec).await
    }

    /// `DELETE /users/nonmembers/{id}`.
    pub async fn delete_non_member(&self, id: i64) -> JsonResponse {
        let path = format!("/users/nonmembers/{}", id);
        self.client.http.request(RequestSpec::delete(path)).await
    }

    /// `GET /users/subordinates`. Ordinary and agent members directly below.
    pub async fn subordinates(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/users/subordinates")).await
    }

    /// `GET /users/ordinary`.
    pub async fn ordinary_members(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/users/ordinary")).await
    }

    /// `GET /users/agents`.
    pub async fn agent_members(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::get("/users/agents")).await
    }

    /// `POST /users/upgrade-to-ordinary`. Registers a non-member under the
    /// given phone number.
    pub async fn upgrade_to_ordinary(&self, non_member_id: i64, phone: &str) -> JsonResponse {
        let body = UpgradeToOrdinaryRequest {
            non_member_id,
            phone,
        };
        let spec = RequestSpec::post("/users/upgrade-to-ordinary").json(&body);
        self.client.http.request(spec).await
    }

    /// `POST /users/upgrade-to-agent`. Upgrades the signed-in member; no body.
    pub async fn upgrade_to_agent(&self) -> JsonResponse {
        self.client.http.request(RequestSpec::post("/users/upgrade-to-agent")).await
    }
}
