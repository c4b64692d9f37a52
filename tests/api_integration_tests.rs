//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint against the
//! real router, with scripted completion providers standing in for the
//! external service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::time::sleep;
use tower::ServiceExt;

use jobfit::api::create_router;
use jobfit::cache::ResponseCache;
use jobfit::provider::{CompletionProvider, ProviderError};
use jobfit::AppState;

// == Helper Functions ==

const SAMPLE_REPLY: &str = r#"{
    "overallMatch": 64,
    "missingSkills": ["Go"],
    "requiredSkills": {"missing": ["Go"], "present": ["Rust"]},
    "preferredSkills": [
        {"skill": "Terraform", "inResume": false, "benefit": "Could boost your match by 5 percent", "priority": "low"}
    ],
    "atsKeywords": {
        "mustHave": ["Rust"],
        "replaceWith": [{"current": "helped with servers", "better": "operated production services"}],
        "exactPhrases": ["3+ years experience"],
        "actionVerbs": ["built"]
    },
    "pointsToAdd": [
        {"suggestion": "Quantify throughput improvements", "reason": "JD stresses scale", "priority": "high"}
    ],
    "pointsToRemove": [],
    "keyInsights": ["Lead with systems work"],
    "interviewQuestions": [
        {"question": "How do you debug a latency regression?", "type": "technical", "reason": "JD lists performance work", "sampleAnswer": "I start from metrics and narrow down with traces."}
    ]
}"#;

/// Scripted provider: always returns the same reply, counting calls.
struct ScriptedProvider {
    reply: String,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Provider that always fails.
struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Api {
            status: 500,
            message: "upstream exploded".to_string(),
        })
    }
}

fn test_app(provider: Arc<dyn CompletionProvider>, capacity: usize, ttl: Duration) -> Router {
    let cache = ResponseCache::new(capacity, ttl).unwrap();
    let state = AppState::new(cache, provider, 8000);
    create_router(state)
}

fn default_app(provider: Arc<dyn CompletionProvider>) -> Router {
    test_app(provider, 100, Duration::from_secs(300))
}

fn analyze_request(resume: &str, job_description: &str) -> Request<Body> {
    let body = json!({ "resume": resume, "jobDescription": job_description });
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Analyze Endpoint Tests ==

#[tokio::test]
async fn test_analyze_fresh_result() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let response = app
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cached"], false);
    assert_eq!(json["content"]["overallMatch"], 64);
    assert_eq!(json["content"]["requiredSkills"]["present"][0], "Rust");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_analyze_repeat_served_from_cache() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let first = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let json = body_to_json(second.into_body()).await;
    assert_eq!(json["cached"], true);
    assert_eq!(json["content"]["overallMatch"], 64);

    // The provider was only paid for once
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_analyze_distinct_pairs_not_shared() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let _ = app
        .clone()
        .oneshot(analyze_request("resume one", "backend jd"))
        .await
        .unwrap();

    // Same texts swapped are a different request
    let swapped = app
        .clone()
        .oneshot(analyze_request("backend jd", "resume one"))
        .await
        .unwrap();
    let json = body_to_json(swapped.into_body()).await;
    assert_eq!(json["cached"], false);

    let other = app
        .oneshot(analyze_request("resume two", "backend jd"))
        .await
        .unwrap();
    let json = body_to_json(other.into_body()).await;
    assert_eq!(json["cached"], false);

    assert_eq!(provider.calls(), 3);
}

// == Validation Tests ==

#[tokio::test]
async fn test_analyze_blank_fields_rejected() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let response = app
        .oneshot(analyze_request("   ", "backend jd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Resume and job description are required"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_analyze_over_length_field_rejected() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let long_resume = "x".repeat(8001);
    let response = app
        .oneshot(analyze_request(&long_resume, "backend jd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("8000"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_analyze_invalid_json_body() {
    let app = default_app(ScriptedProvider::new(SAMPLE_REPLY));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"invalid json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 400 or 422 for JSON deserialization failures
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

// == Failure Semantics Tests ==

#[tokio::test]
async fn test_provider_failure_returns_502_and_caches_nothing() {
    let app = default_app(Arc::new(FailingProvider));

    let response = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());

    // Nothing was written to the cache by the failed call
    let stats = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["total_entries"], 0);
}

#[tokio::test]
async fn test_malformed_reply_returns_502_and_caches_nothing() {
    let app = default_app(ScriptedProvider::new("Sorry, I cannot produce JSON today."));

    let response = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let stats = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["total_entries"], 0);
}

// == Cache Behavior Over the API ==

#[tokio::test]
async fn test_ttl_expiry_via_api() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = test_app(provider.clone(), 100, Duration::from_millis(80));

    let _ = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    // Still fresh in cache
    let hit = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    let json = body_to_json(hit.into_body()).await;
    assert_eq!(json["cached"], true);

    // Wait for the TTL to elapse
    sleep(Duration::from_millis(120)).await;

    let expired = app
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    let json = body_to_json(expired.into_body()).await;
    assert_eq!(json["cached"], false, "expired entry must be recomputed");
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_capacity_eviction_via_api() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = test_app(provider.clone(), 1, Duration::from_secs(300));

    let _ = app
        .clone()
        .oneshot(analyze_request("resume a", "jd a"))
        .await
        .unwrap();

    // A second pair evicts the first (capacity 1)
    let _ = app
        .clone()
        .oneshot(analyze_request("resume b", "jd b"))
        .await
        .unwrap();

    let recomputed = app
        .oneshot(analyze_request("resume a", "jd a"))
        .await
        .unwrap();
    let json = body_to_json(recomputed.into_body()).await;
    assert_eq!(json["cached"], false, "evicted entry must be recomputed");
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_zero_ttl_never_serves_from_cache() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = test_app(provider.clone(), 100, Duration::ZERO);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(analyze_request("rust resume", "backend jd"))
            .await
            .unwrap();
        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["cached"], false);
    }

    assert_eq!(provider.calls(), 3);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_counts() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider);

    // miss (fresh compute), then hit
    let _ = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    let _ = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

// == Clear Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint_drops_cached_reports() {
    let provider = ScriptedProvider::new(SAMPLE_REPLY);
    let app = default_app(provider.clone());

    let _ = app
        .clone()
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cleared"], 1);

    // The next identical request recomputes
    let recomputed = app
        .oneshot(analyze_request("rust resume", "backend jd"))
        .await
        .unwrap();
    let json = body_to_json(recomputed.into_body()).await;
    assert_eq!(json["cached"], false);
    assert_eq!(provider.calls(), 2);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = default_app(ScriptedProvider::new(SAMPLE_REPLY));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
