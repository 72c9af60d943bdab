use axum::http::StatusCode;
use serde_json::json;

use crate::tests::server;

#[serial_test::serial]
#[tokio::test]
async fn healthz() {
  let response = server().get("/healthz").await;

  response.assert_status_ok();
}

#[serial_test::serial]
#[tokio::test]
async fn unknown_route_is_json_404() {
  let response = server().get("/nope").await;

  response.assert_status_not_found();
  response.assert_json_contains(&json!({ "message": "missing resource" }));
}

#[serial_test::serial]
#[tokio::test]
async fn rank_orders_and_summarizes() {
  let response = server()
    .post("/rank")
    .json(&json!({
        "profile": {
            "majors": ["finance"],
            "skills": ["excel", "financial modeling", "powerpoint"],
            "availability_hours_per_week": 20,
            "preferred_work_modes": ["hybrid", "remote"],
            "preferred_locations": ["new york", "boston"]
        },
        "internships": [
            {
                "id": "i-chicago",
                "majors": ["operations"],
                "location": "Chicago, IL (On-site)"
            },
            {
                "id": "i-ny",
                "majors": ["finance", "accounting"],
                "hours_per_week": 20,
                "location": "New York, NY (Hybrid)",
                "description": "Required skills: excel, financial modeling\nPreferred skills: powerpoint, accounting"
            }
        ]
    }))
    .await;

  response.assert_status_ok();
  response.assert_json_contains(&json!({
      "candidates": 2,
      "eligible": 1,
      "results": [
          {
              "id": "i-ny",
              "match": {
                  "eligible": true,
                  "score": 9.75,
                  "max_score": 17.0,
                  "matching_version": "rules-v1"
              }
          }
      ]
  }));
}

#[serial_test::serial]
#[tokio::test]
async fn rank_honors_the_limit() {
  let internships = (0..5)
    .map(|i| json!({ "id": format!("i-{i}"), "majors": ["finance"] }))
    .collect::<Vec<_>>();

  let response = server()
    .post("/rank")
    .json(&json!({
        "profile": { "majors": ["finance"] },
        "internships": internships,
        "limit": 2
    }))
    .await;

  response.assert_status_ok();
  response.assert_json_contains(&json!({ "candidates": 5, "eligible": 5, "limit": 2 }));

  let body: serde_json::Value = response.json();

  assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[serial_test::serial]
#[tokio::test]
async fn rank_requires_internships() {
  let response = server()
    .post("/rank")
    .json(&json!({
        "profile": { "majors": ["finance"] },
        "internships": []
    }))
    .await;

  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
  response.assert_json_contains(&json!({
      "message": "payload failed validation",
      "details": ["at least one internship must be provided"]
  }));
}

#[serial_test::serial]
#[tokio::test]
async fn malformed_rank_payload_is_a_bad_request() {
  let response = server().post("/rank").content_type("application/json").bytes("{not json".into()).await;

  response.assert_status_bad_request();
  response.assert_json_contains(&json!({ "message": "could not read request payload" }));
}

#[serial_test::serial]
#[tokio::test]
async fn rank_rejects_negative_weights() {
  let response = server()
    .post("/rank")
    .json(&json!({
        "profile": { "majors": ["finance"] },
        "internships": [{ "id": "i-1" }],
        "weights": { "major": -1.0 }
    }))
    .await;

  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
  response.assert_json_contains(&json!({ "message": "invalid weights: major must be a non-negative number" }));
}

#[serial_test::serial]
#[tokio::test]
async fn evaluate_always_explains() {
  let response = server()
    .post("/evaluate")
    .json(&json!({
        "profile": { "majors": ["finance"], "skills": ["excel"] },
        "internship": {
            "id": "i-1",
            "majors": ["finance"],
            "required_skills": "excel, sql"
        }
    }))
    .await;

  response.assert_status_ok();
  response.assert_json_contains(&json!({
      "eligible": true,
      "gaps": ["Missing required skills: sql"]
  }));

  let body: serde_json::Value = response.json();
  let contributions = body["breakdown"]["contributions"].as_array().unwrap();

  assert_eq!(contributions.len(), 8);
  assert!(contributions.iter().any(|c| c["key"] == "required_skills" && c["points"] == 2.0));
}

#[serial_test::serial]
#[tokio::test]
async fn metrics_endpoint_is_gated() {
  let response = server().get("/metrics").await;

  response.assert_status_not_found();
}
