//! Order domain: member order submission, history and exception reports.

pub mod client;
pub mod wire;

pub use wire::{
    Order, OrderFilter, OrderList, OrderStatistics, OrderSubmission, SubmissionTotals,
    SubmitOrderRequest, SubmitOrderResult,
};

use crate::http::{FilePart, MultipartForm};

/// A problem report against one order, with optional photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionReport {
    pub order_id: i64,
    pub description: String,
    pub images: Vec<FilePart>,
}

impl ExceptionReport {
    pub fn new(order_id: i64, description: &str) -> Self {
        Self {
            order_id,
            description: description.to_string(),
            images: Vec::new(),
        }
    }

    pub fn image(mut self, image: FilePart) -> Self {
        self.images.push(image);
        self
    }

    /// `orderId`, `description`, then one `images` part per file.
    pub fn into_form(self) -> MultipartForm {
        let form = MultipartForm::new()
            .text("orderId", self.order_id.to_string())
            .text("description", self.description);
        self.images
            .into_iter()
            .fold(form, |form, image| form.file("images", image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FieldValue;
    use crate::shared::QueryParams;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn submit_body_matches_backend() {
        let req = SubmitOrderRequest {
            non_member_ids: vec![3, 5],
            settlement_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quantity: 2,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"nonMemberIds": [3, 5], "settlementDate": "2024-01-15", "quantity": 2})
        );
    }

    #[test]
    fn filter_drops_unset_fields() {
        let params: QueryParams = OrderFilter {
            status: Some("pending".to_string()),
            keyword: Some(String::new()),
            ..OrderFilter::default()
        }
        .into();
        assert_eq!(params.encode().as_deref(), Some("status=pending"));
    }

    #[test]
    fn exception_form_repeats_images() {
        let form = ExceptionReport::new(42, "数量不对")
            .image(FilePart::new("a.jpg", "image/jpeg", vec![1, 2]))
            .image(FilePart::new("b.png", "image/png", vec![3]))
            .into_form();
        let names: Vec<&str> = form.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["orderId", "description", "images", "images"]);
        assert_eq!(form.fields[0].1, FieldValue::Text("42".to_string()));
    }

    #[test]
    fn exception_form_without_images() {
        let form = ExceptionReport::new(1, "x").into_form();
        assert_eq!(form.fields.len(), 2);
    }

    #[test]
    fn order_list_decodes_grouped_submissions() {
        let list: OrderList = serde_json::from_value(json!({
            "list": [{
                "submissionTime": "2024-01-15 09:30:00",
                "settlementDate": "2024-01-15",
                "settlementDateShort": "01/15",
                "quantity": 4,
                "totalPoints": 3.6,
                "avgDiscountPrice": 0.9,
                "orderCount": 2,
                "orders": [{
                    "id": 10, "userId": 1, "nonMemberId": 3, "nonMemberName": "小明",
                    "settlementDate": "2024-01-15", "basePrice": 1.0, "discountRate": 0.1,
                    "finalPrice": 0.9, "quantity": 2, "totalPoints": 1.8, "points": 1.8,
                    "status": "pending", "exported": false, "createdAt": "2024-01-15 09:30:00",
                    "hasException": false, "exceptionStatus": null
                }]
            }],
            "total": 1,
            "statistics": null
        }))
        .unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.list[0].orders[0].non_member_name.as_deref(), Some("小明"));
        assert!(list.statistics.is_none());
    }
}
