//! Canned payloads.

use serde_json::{json, Value};

pub(super) fn members() -> Value {
    json!({
        "list": [{
            "id": "123456",
            "name": "张三",
            "phone": "138****1234",
            "type": "普通会员",
            "parentId": "654321",
            "points": 1500,
            "registerDate": "2023-01-15",
            "nonmemberCount": 8,
            "todayOrders": 5,
            "monthOrders": 120
        }],
        "total": 100,
        "page": 1,
        "pageSize": 20
    })
}

pub(super) fn agents() -> Value {
    json!({
        "list": [{
            "id": "654321",
            "name": "王五",
            "phone": "137****9012",
            "type": "代理",
            "parentId": null,
            "points": 5000,
            "registerDate": "2022-12-01",
            "subAgents": 5,
            "subMembers": 24,
            "nonmemberCount": 15,
            "todayOrders": 15,
            "monthOrders": 450
        }],
        "total": 50,
        "page": 1,
        "pageSize": 20
    })
}

pub(super) fn orders() -> Value {
    json!({
        "list": [],
        "total": 0,
        "stats": {
            "todayTotal": 156,
            "todayUsers": 45,
            "todayPoints": 234
        }
    })
}

pub(super) fn transactions() -> Value {
    json!({
        "list": [],
        "total": 0,
        "stats": {
            "todayRecharge": 5000,
            "todayRevenue": 500,
            "todayConsumption": 2340,
            "monthRecharge": 50000,
            "monthRevenue": 5000,
            "monthConsumption": 23400
        }
    })
}

pub(super) fn exceptions() -> Value {
    json!({
        "list": [],
        "total": 0,
        "stats": {
            "todayExceptions": 5,
            "todayPending": 3,
            "todayProcessed": 2
        }
    })
}

pub(super) fn settings() -> Value {
    json!({
        "contact": {
            "wechat": "kefu123456",
            "phone": "400-123-4567",
            "qq": "123456789"
        },
        "price": {
            "basePrice": 1,
            "fridayPrice": 1.5
        },
        "discountRules": [
            { "minOrders": 20, "discount": 0.4 },
            { "minOrders": 10, "discount": 0.25 },
            { "minOrders": 5, "discount": 0.1 }
        ],
        "rechargeDiscountRules": [
            { "minAmount": 200, "discount": 95 },
            { "minAmount": 100, "discount": 98 }
        ],
        "rewardRates": {
            "direct": 3,
            "indirect": 1
        },
        "transferLimits": {
            "minQuantity": 10,
            "maxUnitPrice": 1.5
        }
    })
}
