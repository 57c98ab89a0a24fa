//! Thin HTTP client for the image-to-image (remix) provider.
//!
//! - `create_prediction` starts a job, asking the provider to hold the
//!   connection until the job finishes.
//! - `wait_for` polls the job's `urls.get` link until it is terminal.
//! - `fetch_asset` downloads whatever locator the job produced.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use crate::provider::{FetchedAsset, ProviderError, ProviderResult, RemixProvider};
use crate::replicate::schema::{PredictionRequest, PredictionStatus};
use crate::replicate::{ModelRef, Prediction, RemixInput, RemixOutput};
use crate::utils::text::{excerpt, truncate_chars, ERROR_EXCERPT_CHARS};

#[derive(Clone)]
pub struct ReplicateClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    poll_interval: Duration,
}

impl ReplicateClient {
    pub fn new(base_url: String, token: Option<String>, poll_interval: Duration) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        ReplicateClient { client: Client::new(), base_url: base, token, poll_interval }
    }

    fn token(&self) -> ProviderResult<&str> {
        self.token
            .as_deref()
            .ok_or(ProviderError::MissingCredential("REPLICATE_API_TOKEN"))
    }

    /// Start a prediction for `model`.
    pub async fn create_prediction(&self, model: &ModelRef, input: &RemixInput) -> ProviderResult<Prediction> {
        let token = self.token()?;
        let url = match model.version {
            Some(_) => format!("{}/predictions", self.base_url),
            None => format!("{}/models/{}/{}/predictions", self.base_url, model.owner, model.name),
        };
        tracing::info!(model = %model, "Creating remix prediction at URL: {}", url);
        tracing::debug!(strength = input.strength, steps = input.num_inference_steps, "Remix input");

        let body = PredictionRequest { version: model.version.as_deref(), input };
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;
        read_prediction(response).await
    }

    /// Poll until the prediction reaches a terminal status.
    // TODO: bound the total polling time once a REPLICATE_POLL_TIMEOUT setting exists.
    pub async fn wait_for(&self, mut prediction: Prediction) -> ProviderResult<Prediction> {
        let token = self.token()?;
        while !prediction.status.is_terminal() {
            let poll_url = prediction
                .urls
                .as_ref()
                .and_then(|u| u.get.clone())
                .ok_or_else(|| ProviderError::Malformed("prediction has no poll url".to_string()))?;
            tracing::debug!(
                id = prediction.id.as_deref().unwrap_or("?"),
                status = prediction.status.as_str(),
                "Prediction still running"
            );
            tokio::time::sleep(self.poll_interval).await;
            let response = self.client.get(&poll_url).bearer_auth(token).send().await?;
            prediction = read_prediction(response).await?;
        }
        Ok(prediction)
    }
}

async fn read_prediction(response: Response) -> ProviderResult<Prediction> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let error = ProviderError::Upstream {
            status: status.as_u16(),
            body: excerpt(&body, ERROR_EXCERPT_CHARS),
        };
        tracing::error!("{}", error);
        return Err(error);
    }
    serde_json::from_slice(&body)
        .map_err(|e| ProviderError::Malformed(format!("{}: {}", e, excerpt(&body, ERROR_EXCERPT_CHARS))))
}

#[async_trait]
impl RemixProvider for ReplicateClient {
    async fn run(&self, model: &ModelRef, input: &RemixInput) -> ProviderResult<RemixOutput> {
        let created = self.create_prediction(model, input).await?;
        let finished = self.wait_for(created).await?;
        match finished.status {
            PredictionStatus::Succeeded => {
                tracing::info!(id = finished.id.as_deref().unwrap_or("?"), "Remix prediction succeeded");
                Ok(RemixOutput::from(finished.output))
            }
            status => {
                let detail = match &finished.error {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => "no error detail".to_string(),
                    other => other.to_string(),
                };
                Err(ProviderError::PredictionFailed {
                    status: status.as_str().to_string(),
                    detail: truncate_chars(&detail, ERROR_EXCERPT_CHARS).to_string(),
                })
            }
        }
    }

    async fn fetch_asset(&self, locator: &str) -> ProviderResult<FetchedAsset> {
        tracing::info!("Fetching remix asset from URL: {}", locator);
        let response = self.client.get(locator).send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        Ok(FetchedAsset { status, content_type, bytes })
    }
}
