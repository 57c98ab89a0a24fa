//! Request/response schema pair for the image-to-image (remix) provider.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A remix model reference, `owner/name` with an optional pinned version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub owner: String,
    pub name: String,
    pub version: Option<String>,
}

impl ModelRef {
    /// Parse `owner/name[:version]`. A version must be a 64 character
    /// lowercase hex digest, which is the only form the provider accepts.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        let (path, version) = match raw.split_once(':') {
            Some((path, version)) => (path, Some(version)),
            None => (raw, None),
        };
        let (owner, name) = path
            .split_once('/')
            .ok_or_else(|| "expected 'owner/name[:version]'".to_string())?;
        for (label, part) in [("owner", owner), ("name", name)] {
            if part.is_empty() {
                return Err(format!("{label} is empty"));
            }
            if !part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            {
                return Err(format!("{label} '{part}' contains invalid characters"));
            }
        }
        if let Some(v) = version {
            let is_digest =
                v.len() == 64 && v.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
            if !is_digest {
                return Err("version must be a 64 character lowercase hex digest".to_string());
            }
        }
        Ok(ModelRef {
            owner: owner.to_string(),
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)?;
        if let Some(v) = &self.version {
            write!(f, ":{v}")?;
        }
        Ok(())
    }
}

/// Job input for one remix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemixInput {
    pub prompt: String,
    /// Source image as a `data:<mime>;base64,<payload>` URL.
    pub image: String,
    pub strength: f64,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    pub input: &'a RemixInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionUrls {
    pub get: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub id: Option<String>,
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Value,
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

/// Shape of a finished remix job's output.
///
/// The provider returns either a list of asset locators, a single locator, or
/// an object carrying the locator under `url` or `image`. Anything else is
/// unrecognized.
#[derive(Debug, Clone, PartialEq)]
pub enum RemixOutput {
    Locators(Vec<Value>),
    Locator(String),
    Fields(Map<String, Value>),
    Unrecognized(Value),
}

impl From<Value> for RemixOutput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => RemixOutput::Locators(items),
            Value::String(s) => RemixOutput::Locator(s),
            Value::Object(map) => RemixOutput::Fields(map),
            other => RemixOutput::Unrecognized(other),
        }
    }
}

impl RemixOutput {
    /// First usable locator: first array element, the bare string, `url`,
    /// then `image`. Only non-empty strings count.
    pub fn locator(&self) -> Option<&str> {
        fn usable(v: &Value) -> Option<&str> {
            v.as_str().filter(|s| !s.trim().is_empty())
        }
        match self {
            RemixOutput::Locators(items) => items.first().and_then(usable),
            RemixOutput::Locator(s) => Some(s.as_str()).filter(|s| !s.trim().is_empty()),
            RemixOutput::Fields(map) => map
                .get("url")
                .and_then(usable)
                .or_else(|| map.get("image").and_then(usable)),
            RemixOutput::Unrecognized(_) => None,
        }
    }

    /// The output as the provider sent it, for diagnostics.
    pub fn to_json(&self) -> Value {
        match self {
            RemixOutput::Locators(items) => Value::Array(items.clone()),
            RemixOutput::Locator(s) => Value::String(s.clone()),
            RemixOutput::Fields(map) => Value::Object(map.clone()),
            RemixOutput::Unrecognized(v) => v.clone(),
        }
    }
}
