//! Integration tests for the HTTP surface, driven through the real router
//! with stub providers.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    asset, body_bytes, body_json, build_app, config_from, content_type, get, multipart_body, post_json,
    post_multipart, test_config, StubImage, StubRemix,
};
use studio_gateway::provider::ProviderError;
use studio_gateway::replicate::RemixOutput;

// ---------------------------------------------------------------------------
// POST /api/generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_provider_bytes() {
    let image = StubImage::returning(b"\x89PNG-neon-city", Some("image/png"));
    let app = build_app(test_config(), image.clone(), StubRemix::unused());

    let response = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "neon city", "width": 768, "height": 960, "num_inference_steps": 16, "guidance_scale": 7.5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response).as_deref(), Some("image/png"));
    assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
    assert_eq!(&body_bytes(response).await[..], b"\x89PNG-neon-city");

    let payloads = image.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].inputs, "neon city");
    assert_eq!(payloads[0].parameters.seed, None);
    assert!(payloads[0].options.wait_for_model);
}

#[tokio::test]
async fn generate_applies_defaults_and_aliases() {
    let image = StubImage::returning(b"img", Some("image/jpeg"));
    let app = build_app(test_config(), image.clone(), StubRemix::unused());

    let response = post_json(app, "/api/generate", json!({ "prompt": "p", "steps": 20, "guidanceScale": 3, "seed": 42 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response).as_deref(), Some("image/jpeg"));

    let payloads = image.payloads.lock().unwrap();
    let params = &payloads[0].parameters;
    assert_eq!((params.width, params.height), (768, 960));
    assert_eq!(params.num_inference_steps, 20);
    assert_eq!(params.guidance_scale, 3.0);
    assert_eq!(params.seed, Some(42));
}

#[tokio::test]
async fn generate_accepts_both_spellings_of_a_field() {
    let image = StubImage::returning(b"img", None);
    let app = build_app(test_config(), image.clone(), StubRemix::unused());

    let response = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "p", "steps": 40, "num_inference_steps": 24, "guidanceScale": 2, "guidance_scale": 6 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let payloads = image.payloads.lock().unwrap();
    assert_eq!(payloads[0].parameters.num_inference_steps, 24);
    assert_eq!(payloads[0].parameters.guidance_scale, 6.0);
}

#[tokio::test]
async fn generate_defaults_missing_content_type_to_png() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = post_json(app, "/api/generate", json!({ "prompt": "p" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response).as_deref(), Some("image/png"));
}

#[tokio::test]
async fn blank_prompt_is_rejected_without_calling_the_provider() {
    let image = StubImage::returning(b"img", None);
    let app = build_app(test_config(), image.clone(), StubRemix::unused());

    let response = post_json(app, "/api/generate", json!({ "prompt": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "ok": false, "error": "Prompt is required" }));
    assert_eq!(image.calls(), 0);
}

#[tokio::test]
async fn out_of_range_steps_are_rejected() {
    for steps in [0, 81] {
        let image = StubImage::returning(b"img", None);
        let app = build_app(test_config(), image.clone(), StubRemix::unused());

        let response = post_json(app, "/api/generate", json!({ "prompt": "p", "num_inference_steps": steps })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Steps must be between 1 and 80");
        assert_eq!(image.calls(), 0);
    }
}

#[tokio::test]
async fn every_validation_problem_is_reported() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = post_json(app, "/api/generate", json!({ "prompt": "", "width": 100, "seed": 1.5 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Prompt is required"));
    assert!(error.contains("Width must be between 256 and 1536"));
    assert!(error.contains("Seed must be an integer"));
}

#[tokio::test]
async fn non_object_body_is_a_validation_error() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = post_json(app, "/api/generate", json!(null)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["ok"], false);
}

#[tokio::test]
async fn provider_failure_is_a_500_json_error() {
    let image = StubImage::new(|| {
        Err(ProviderError::Upstream { status: 503, body: "model loading".to_string() })
    });
    let app = build_app(test_config(), image, StubRemix::unused());

    let response = post_json(app, "/api/generate", json!({ "prompt": "p" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type(&response).as_deref(), Some("application/json"));
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Provider returned 503: model loading");
}

#[tokio::test]
async fn missing_hf_token_surfaces_as_a_500() {
    let image = StubImage::new(|| Err(ProviderError::MissingCredential("HF_TOKEN")));
    let app = build_app(test_config(), image, StubRemix::unused());
    let response = post_json(app, "/api/generate", json!({ "prompt": "p" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "HF_TOKEN missing. Add it to .env and restart.");
}

#[tokio::test]
async fn video_generation_is_not_implemented() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = post_json(app, "/api/generate-video", json!({ "prompt": "p" })).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        body_json(response).await,
        json!({ "ok": false, "error": "Video generation is not available yet" })
    );
}

// ---------------------------------------------------------------------------
// POST /api/remix
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remix_without_image_is_rejected_before_any_provider_call() {
    let remix = StubRemix::with_output(json!(["https://cdn.test/out.png"]));
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "make it neon"), ("strength", "0.5")], None);
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "ok": false, "error": "Missing image file" }));
    assert_eq!(remix.runs(), 0);
    assert_eq!(remix.fetches(), 0);
}

#[tokio::test]
async fn remix_with_url_field_streams_the_asset() {
    let remix = StubRemix::with_output(json!({ "url": "https://cdn.test/out.jpg" }));
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "make it neon"), ("strength", "0.4")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response).as_deref(), Some("image/jpeg"));
    assert_eq!(&body_bytes(response).await[..], b"JPEGDATA");

    let inputs = remix.inputs.lock().unwrap();
    assert_eq!(inputs[0].prompt, "make it neon");
    assert_eq!(inputs[0].strength, 0.4);
    assert_eq!(inputs[0].num_inference_steps, 30);
    assert_eq!(inputs[0].guidance_scale, 7.5);
    assert_eq!(inputs[0].image, "data:image/png;base64,U1JD");
    assert_eq!(*remix.fetched.lock().unwrap(), vec!["https://cdn.test/out.jpg".to_string()]);
}

#[tokio::test]
async fn remix_uses_first_array_element_and_default_strength() {
    let remix = StubRemix::with_output(json!(["https://cdn.test/a.png", "https://cdn.test/b.png"]));
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p"), ("strength", "")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(remix.inputs.lock().unwrap()[0].strength, 0.65);
    assert_eq!(*remix.fetched.lock().unwrap(), vec!["https://cdn.test/a.png".to_string()]);
}

#[tokio::test]
async fn remix_rejects_out_of_range_strength() {
    let remix = StubRemix::unused();
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p"), ("strength", "1.5")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Strength must be between 0 and 1");
    assert_eq!(remix.runs(), 0);
}

#[tokio::test]
async fn remix_accepts_photos_above_two_megabytes() {
    let remix = StubRemix::with_output(json!(["https://cdn.test/out.png"]));
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let photo = vec![0xAB_u8; 3 * 1024 * 1024];
    let body = multipart_body(&[("prompt", "p")], Some(("phone.jpg", "image/jpeg", &photo[..])));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let inputs = remix.inputs.lock().unwrap();
    let prefix = "data:image/jpeg;base64,";
    assert!(inputs[0].image.starts_with(prefix));
    assert_eq!(inputs[0].image.len(), prefix.len() + 4 * 1024 * 1024);
}

#[tokio::test]
async fn remix_over_the_configured_limit_is_payload_too_large() {
    let remix = StubRemix::unused();
    let config = config_from(&[("REPLICATE_API_TOKEN", "r8_abcdefghijklmnop"), ("REMIX_MAX_BYTES", "4096")]);
    let app = build_app(config, StubImage::returning(b"img", None), remix.clone());

    let photo = vec![0xAB_u8; 8192];
    let body = multipart_body(&[("prompt", "p")], Some(("phone.jpg", "image/jpeg", &photo[..])));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body_json(response).await,
        json!({ "ok": false, "error": "Upload too large (limit is 4096 bytes)" })
    );
    assert_eq!(remix.runs(), 0);
}

#[tokio::test]
async fn remix_without_locator_is_a_malformed_response() {
    let remix = StubRemix::with_output(json!({}));
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Malformed remix provider response: {}");
    assert_eq!(remix.fetches(), 0);
}

#[tokio::test]
async fn malformed_dump_is_truncated() {
    let big = "x".repeat(1000);
    let remix = StubRemix::new(
        move || Ok(RemixOutput::from(json!({ "detail": big.clone() }))),
        || Ok(asset(200, Some("image/png"), b"never")),
    );
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    let dump = error.strip_prefix("Malformed remix provider response: ").unwrap();
    assert_eq!(dump.chars().count(), 400);
    assert_eq!(remix.fetches(), 0);
}

#[tokio::test]
async fn failed_asset_download_is_reported_with_status() {
    let remix = StubRemix::new(
        || Ok(RemixOutput::from(json!("https://cdn.test/gone.png"))),
        || Ok(asset(404, Some("text/plain"), b"not here")),
    );
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Failed to fetch remix image (404): not here");
}

#[tokio::test]
async fn non_image_asset_type_falls_back_to_png() {
    let remix = StubRemix::new(
        || Ok(RemixOutput::from(json!({ "image": "https://cdn.test/out" }))),
        || Ok(asset(200, Some("application/octet-stream"), b"RAW")),
    );
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix);

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response).as_deref(), Some("image/png"));
}

#[tokio::test]
async fn remix_without_token_is_a_configuration_error() {
    let remix = StubRemix::with_output(json!(["https://cdn.test/out.png"]));
    let config = config_from(&[("HF_TOKEN", "hf_abcdefghijklmnop")]);
    let app = build_app(config, StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "REPLICATE_API_TOKEN missing. Add it to .env and restart."
    );
    assert_eq!(remix.runs(), 0);
}

#[tokio::test]
async fn failed_prediction_is_a_500() {
    let remix = StubRemix::new(
        || Err(ProviderError::PredictionFailed { status: "failed".into(), detail: "NSFW content".into() }),
        || Ok(asset(200, Some("image/png"), b"never")),
    );
    let app = build_app(test_config(), StubImage::returning(b"img", None), remix.clone());

    let body = multipart_body(&[("prompt", "p")], Some(("base.png", "image/png", b"SRC")));
    let response = post_multipart(app, "/api/remix", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Remix prediction failed: NSFW content");
    assert_eq!(remix.fetches(), 0);
}

// ---------------------------------------------------------------------------
// Read-only routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_configuration_without_leaking_tokens() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "studio-gateway");
    assert!(body["ts"].is_string());
    assert_eq!(body["hf"]["tokenPresent"], true);
    assert_eq!(body["hf"]["tokenPrefix"], "hf_abc");
    assert_eq!(body["hf"]["imageModel"], "test/image-model");
    assert_eq!(body["hf"]["imageAlt"], serde_json::Value::Null);
    assert_eq!(body["hf"]["videoModel"], "test/video-model");
    assert_eq!(body["replicate"]["tokenPresent"], true);
    assert!(body["replicate"]["model"].as_str().unwrap().starts_with("stability-ai/sdxl:"));
    assert!(!body.to_string().contains("hf_abcdefghijklmnop"));
    assert!(!body.to_string().contains("r8_abcdefghijklmnop"));
}

#[tokio::test]
async fn health_without_tokens() {
    let app = build_app(config_from(&[]), StubImage::returning(b"img", None), StubRemix::unused());
    let body = body_json(get(app, "/api/health").await).await;
    assert_eq!(body["hf"]["tokenPresent"], false);
    assert_eq!(body["hf"]["tokenPrefix"], serde_json::Value::Null);
    assert_eq!(body["replicate"]["tokenPresent"], false);
}

#[tokio::test]
async fn characters_are_listed_and_looked_up() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let list = body_json(get(app.clone(), "/api/characters").await).await;
    let ids: Vec<&str> = list.as_array().unwrap().iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "nova", "luxe", "cipher", "aria", "vega", "ember", "onyx", "seraph", "nyx", "riven", "solaris",
            "astra", "echo", "faye", "dahlia", "marrow",
        ]
    );

    let response = get(app.clone(), "/api/characters/vega").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["links"]["image"],
        "/studio?mode=image&character=vega&seed=20251205&aspect=4%3A5"
    );

    let response = get(app.clone(), "/api/characters/luxe").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["profile"]["consistency"]["suggestedSeed"], 20251202);
    assert_eq!(body["links"]["remix"], "/studio?mode=remix&character=luxe&seed=20251202&aspect=4%3A5");

    let response = get(app, "/api/characters/nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["ok"], false);
}

#[tokio::test]
async fn root_serves_a_banner() {
    let app = build_app(test_config(), StubImage::returning(b"img", None), StubRemix::unused());
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_bytes(response).await[..], b"Studio Gateway");
}
