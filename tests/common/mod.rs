//! Shared fixtures for the integration tests: stub providers, a test
//! configuration, and request/response helpers for the router.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use studio_gateway::api::{self, AppState};
use studio_gateway::hf::{ImageOutput, ImagePayload};
use studio_gateway::provider::{FetchedAsset, ImageProvider, ProviderResult, RemixProvider};
use studio_gateway::replicate::{ModelRef, RemixInput, RemixOutput};
use studio_gateway::Config;

pub const BOUNDARY: &str = "studio-test-boundary";

type ImageReply = Box<dyn Fn() -> ProviderResult<ImageOutput> + Send + Sync>;
type RemixReply = Box<dyn Fn() -> ProviderResult<RemixOutput> + Send + Sync>;
type AssetReply = Box<dyn Fn() -> ProviderResult<FetchedAsset> + Send + Sync>;

/// Image provider that replays a canned reply and records payloads.
pub struct StubImage {
    reply: ImageReply,
    pub payloads: Mutex<Vec<ImagePayload>>,
}

impl StubImage {
    pub fn new(reply: impl Fn() -> ProviderResult<ImageOutput> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(StubImage { reply: Box::new(reply), payloads: Mutex::new(Vec::new()) })
    }

    /// Always answers with `bytes` and the given content type.
    pub fn returning(bytes: &'static [u8], content_type: Option<&'static str>) -> Arc<Self> {
        Self::new(move || {
            Ok(ImageOutput {
                bytes: Bytes::from_static(bytes),
                content_type: content_type.map(str::to_string),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageProvider for StubImage {
    async fn generate_image(&self, payload: &ImagePayload) -> ProviderResult<ImageOutput> {
        self.payloads.lock().unwrap().push(payload.clone());
        (self.reply)()
    }
}

/// Remix provider with canned job output and asset download.
pub struct StubRemix {
    run_reply: RemixReply,
    asset_reply: AssetReply,
    pub inputs: Mutex<Vec<RemixInput>>,
    pub fetched: Mutex<Vec<String>>,
    runs: AtomicUsize,
}

impl StubRemix {
    pub fn new(
        run_reply: impl Fn() -> ProviderResult<RemixOutput> + Send + Sync + 'static,
        asset_reply: impl Fn() -> ProviderResult<FetchedAsset> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(StubRemix {
            run_reply: Box::new(run_reply),
            asset_reply: Box::new(asset_reply),
            inputs: Mutex::new(Vec::new()),
            fetched: Mutex::new(Vec::new()),
            runs: AtomicUsize::new(0),
        })
    }

    /// Job output is `output`; the asset is a small JPEG.
    pub fn with_output(output: Value) -> Arc<Self> {
        Self::new(
            move || Ok(RemixOutput::from(output.clone())),
            || Ok(asset(200, Some("image/jpeg"), b"JPEGDATA")),
        )
    }

    /// A provider that must never be reached.
    pub fn unused() -> Arc<Self> {
        Self::with_output(Value::Null)
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

#[async_trait]
impl RemixProvider for StubRemix {
    async fn run(&self, _model: &ModelRef, input: &RemixInput) -> ProviderResult<RemixOutput> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(input.clone());
        (self.run_reply)()
    }

    async fn fetch_asset(&self, locator: &str) -> ProviderResult<FetchedAsset> {
        self.fetched.lock().unwrap().push(locator.to_string());
        (self.asset_reply)()
    }
}

pub fn asset(status: u16, content_type: Option<&str>, bytes: &'static [u8]) -> FetchedAsset {
    FetchedAsset {
        status,
        content_type: content_type.map(str::to_string),
        bytes: Bytes::from_static(bytes),
    }
}

/// Configuration with both provider tokens set.
pub fn test_config() -> Config {
    config_from(&[
        ("HF_TOKEN", "hf_abcdefghijklmnop"),
        ("HF_MODEL_IMAGE", "test/image-model"),
        ("HF_MODEL_VIDEO", "test/video-model"),
        ("REPLICATE_API_TOKEN", "r8_abcdefghijklmnop"),
    ])
}

pub fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("test config")
}

pub fn build_app(config: Config, image: Arc<StubImage>, remix: Arc<StubRemix>) -> Router {
    api::router(Arc::new(AppState {
        config: Arc::new(config),
        image_provider: image,
        remix_provider: remix,
    }))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Encode text fields plus an optional `image` file part `(file_name, media_type, bytes)`.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    if let Some((file_name, media_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {media_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn body_bytes(response: Response) -> Bytes {
    hyper::body::to_bytes(response.into_body()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub fn spawn(app: Router) -> String {
    spawn_with(|_| app)
}

/// Like [`spawn`], for fakes that need to know their own base URL.
pub fn spawn_with(build: impl FnOnce(String) -> Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = build(format!("http://{addr}"));
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(async move {
        let _ = server.await;
    });
    format!("http://{addr}")
}
