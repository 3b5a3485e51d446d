//! Account domain: the signed-in member's profile and credentials.

pub mod client;
pub mod wire;

pub use wire::{MemberProfile, ParentInfo, PromoCodeCheck};
pub(crate) use wire::{ChangePasswordRequest, PromoCodeRequest};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn profile_flattens_user_fields() {
        let profile: MemberProfile = serde_json::from_value(json!({
            "id": 12,
            "promoCode": "A1B2C3",
            "name": "赵六",
            "phone": "13812341234",
            "userType": "agent",
            "parentId": 3,
            "points": 88.5,
            "registerDate": "2024-02-02",
            "parent": {"name": "王五", "phone": "13700009012"},
            "cashProfit": 12.34
        }))
        .unwrap();
        assert_eq!(profile.user.id, 12);
        assert_eq!(profile.user.phone.as_deref(), Some("13812341234"));
        assert_eq!(profile.parent.unwrap().name, "王五");
        assert_eq!(profile.cash_profit, Some(Decimal::new(1234, 2)));
    }

    #[test]
    fn change_password_body_is_camel_case() {
        let body = ChangePasswordRequest {
            old_password: "old",
            new_password: "new",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"oldPassword": "old", "newPassword": "new"})
        );
    }

    #[test]
    fn promo_check_reads_flag() {
        let check: PromoCodeCheck = serde_json::from_value(json!({"isUnique": true})).unwrap();
        assert!(check.is_unique);
    }
}
