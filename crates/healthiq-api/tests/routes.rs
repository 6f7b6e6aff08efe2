use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use healthiq_api::router;
use healthiq_api::state::AppState;
use healthiq_benchmark::catalog::default_categories;

async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = router(AppState::new(default_categories()));
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send("GET", uri, None).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send("POST", uri, Some(body)).await
}

#[tokio::test]
async fn health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_templates_by_kind() {
    let (status, body) = get("/templates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (_, audits) = get("/templates?kind=audit").await;
    let ids: Vec<_> = audits
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["therapeutic_environment", "documentation_quality"]);
}

#[tokio::test]
async fn template_detail_and_not_found() {
    let (status, body) = get("/templates/documentation_quality").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["criterion_id"], 5);
    assert_eq!(body["indicators"].as_array().unwrap().len(), 3);

    let (status, body) = get("/templates/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "template not found: nope");
}

#[tokio::test]
async fn scores_template_entries() {
    let (status, body) = post(
        "/templates/documentation_quality/score",
        json!({"entries": [
            {"indicator_id": 14, "score": 90},
            {"indicator_id": 15, "rating": "pass"},
            {"indicator_id": 16, "score": 70}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 0.4·90 + 0.3·100 + 0.3·70
    assert_eq!(body["score"], 87.0);
    assert_eq!(body["rating"], "pass");
    assert_eq!(body["criterion"]["type"], "audit");
}

#[tokio::test]
async fn out_of_range_entries_are_reported() {
    let (status, body) = post(
        "/templates/documentation_quality/score",
        json!({"entries": [
            {"indicator_id": 14, "score": 120},
            {"indicator_id": 15, "score": 50}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["indicator_id"], 14);
}

#[tokio::test]
async fn unknown_indicator_is_a_bad_request() {
    let (status, body) = post(
        "/templates/documentation_quality/score",
        json!({"entries": [{"indicator_id": 1, "score": 50}]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown indicator 1"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn weighted_and_rating_endpoints() {
    let (status, body) = post(
        "/scores/weighted",
        json!([{"weight": 1, "score": 100}, {"weight": 1, "score": 0}]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 50.0);

    let (_, body) = post("/ratings/score", json!({"score": 70})).await;
    assert_eq!(body["rating"], "high-partial");

    let (_, body) = get("/ratings").await;
    let scale = body.as_array().unwrap();
    assert_eq!(scale.len(), 7);
    let na = scale.iter().find(|r| r["rating"] == "not-applicable").unwrap();
    assert!(na["score"].is_null());
}

#[tokio::test]
async fn overall_scorecard() {
    let criteria = json!([
        {
            "id": 1, "name": "Environment", "type": "audit", "weight": 25,
            "indicators": [
                {"id": 1, "name": "Safety", "weight": 1, "score": 80},
                {"id": 2, "name": "Comfort", "weight": 1, "score": 60}
            ]
        },
        {
            "id": 2, "name": "Documentation", "type": "audit", "weight": 75,
            "indicators": [
                {"id": 3, "name": "Completeness", "weight": 1, "rating": "pass"}
            ]
        }
    ]);
    let (status, body) = post("/scores/overall", criteria.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["criteria"][0]["score"], 70.0);
    assert_eq!(body["criteria"][1]["score"], 100.0);
    assert_eq!(body["overall_score"], 92.5);

    let (_, body) = post("/scores/criterion", criteria[0].clone()).await;
    assert_eq!(body["score"], 70.0);
}

#[tokio::test]
async fn catalog_is_served_from_state() {
    let (status, body) = get("/benchmarks/catalog").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["operational-efficiency", "quality-compliance", "performance-trends"]
    );
}

#[tokio::test]
async fn compare_metric_and_zero_target() {
    let metric = json!({
        "metricId": "bed-occupancy",
        "metricName": "Bed Occupancy",
        "targetValue": 90,
        "source": "custom"
    });
    let (status, body) = post("/benchmarks/compare", json!({"metric": metric, "value": 95})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "above");
    assert_eq!(body["trend"], "steady");

    let (status, _) = post("/benchmarks/compare", json!({"metric": metric})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let zero = json!({
        "metricId": "x", "metricName": "X", "targetValue": 0, "source": "custom"
    });
    let (status, body) = post("/benchmarks/compare", json!({"metric": zero, "value": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("non-zero"));
}

#[tokio::test]
async fn performance_from_audit_records() {
    let (status, body) = post(
        "/benchmarks/performance",
        json!({
            "records": [
                {"audit_id": "a1", "criteria_name": "Documentation Quality", "score": 60, "audit_date": "2025-03-05"},
                {"audit_id": "a1", "criteria_name": "Safety", "score": 95, "audit_date": "2025-03-05"},
                {"audit_id": "a2", "criteria_name": "Documentation Quality", "score": 64, "audit_date": "2025-04-07"}
            ],
            "totalScheduled": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statistics"]["totalCount"], 2);
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);

    let areas = body["improvementAreas"].as_array().unwrap();
    assert!(!areas.is_empty());
    assert!(areas
        .iter()
        .any(|a| a["metricId"] == "documentation-compliance"));
}

#[tokio::test]
async fn gaps_with_improvement_targets() {
    let (status, body) = post(
        "/benchmarks/gaps",
        json!({
            "metrics": [
                {"metricId": "audit-completion", "metricName": "Audit Completion",
                 "targetValue": 90, "currentValue": 70, "source": "organizational"},
                {"metricId": "unmeasured", "metricName": "Unmeasured",
                 "targetValue": 90, "source": "custom"}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let gaps = body.as_array().unwrap();
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0]["metricId"], "audit-completion");
    assert_eq!(gaps[0]["priority"], "high");
    assert_eq!(gaps[0]["improvementTarget"], 82.0);
    assert_eq!(gaps[0]["timeframeMonths"], 3);
}

#[tokio::test]
async fn projection_needs_a_horizon() {
    let (status, body) = post(
        "/benchmarks/projection",
        json!({"current": 70, "target": 85, "daysToTarget": 75}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["milestones"].as_array().unwrap().len(), 3);
    assert_eq!(body["milestones"][2]["value"], 85.0);

    let (status, _) = post("/benchmarks/projection", json!({"current": 70, "target": 85})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn projection_rejects_an_unbounded_horizon() {
    for days in [3651_u64, u64::from(u32::MAX)] {
        let (status, body) = post(
            "/benchmarks/projection",
            json!({"current": 0, "target": 100, "daysToTarget": days}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("exceeds the maximum of 3650"));
    }

    let (status, _) = post(
        "/benchmarks/projection",
        json!({"current": 0, "target": 100, "daysToTarget": 3650}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rankings_with_previous_positions() {
    let (status, body) = post(
        "/facilities/rankings",
        json!({
            "scores": [
                {"facility_id": 1, "facility_name": "Riverside", "score": 72.5},
                {"facility_id": 2, "facility_name": "Hillcrest", "score": 88.0}
            ],
            "previous": {"1": 1, "2": 2}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["facility_name"], "Hillcrest");
    assert_eq!(body[0]["overall_rank"], 1);
    assert_eq!(body[0]["previous_rank"], 2);
    assert_eq!(body[1]["total_facilities"], 2);
}

#[tokio::test]
async fn facility_cannot_be_compared_with_itself() {
    let facility = json!({"facility_id": 1, "facility_name": "Riverside"});
    let (status, _) = post(
        "/facilities/compare",
        json!({"facility_a": facility, "facility_b": facility}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_as_of_is_a_bad_request() {
    let (status, body) = post(
        "/facilities/compare",
        json!({
            "facility_a": {"facility_id": 1, "facility_name": "Riverside"},
            "facility_b": {"facility_id": 2, "facility_name": "Hillcrest"},
            "as_of": "-009999-01-03T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("date arithmetic failed"));
}

#[tokio::test]
async fn facilities_compare_side_by_side() {
    let (status, body) = post(
        "/facilities/compare",
        json!({
            "facility_a": {
                "facility_id": 1,
                "facility_name": "Riverside",
                "audits": [{
                    "id": "7f1c8f5e-3c2b-4d8a-9a43-2f4d1c0b9e11",
                    "facility_id": 1,
                    "status": "completed",
                    "scheduled_date": "2025-06-01T10:00:00Z",
                    "audit_date": "2025-06-01T10:00:00Z",
                    "overall_score": 81
                }]
            },
            "facility_b": {"facility_id": 2, "facility_name": "Hillcrest"},
            "as_of": "2025-06-30T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score_a"], 81.0);
    assert_eq!(body["overall_score_b"], 0.0);
}

#[tokio::test]
async fn reconciles_paginated_audits() {
    let (status, body) = post(
        "/audits/reconcile?now=2025-06-30T00:00:00Z",
        json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": "7f1c8f5e-3c2b-4d8a-9a43-2f4d1c0b9e11", "facility_id": 1,
                 "status": "scheduled", "scheduled_date": "2025-06-01T10:00:00Z"},
                {"id": "0b6a2f7c-52a1-4f0e-8d4b-6a3c9e1d2f30", "facility_id": 1,
                 "status": "scheduled", "scheduled_date": "2025-07-15T10:00:00Z"}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);
    assert_eq!(body["audits"][0]["status"], "missed");
    assert_eq!(body["audits"][1]["status"], "scheduled");
}
