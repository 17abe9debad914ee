use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, Eq, Hash, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    Gpt35Turbo,
    Gpt4,
    ClaudeV1,
    Llama270b,
    Other(String),
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        match value {
            "gpt-3.5-turbo" => ModelId::Gpt35Turbo,
            "gpt-4" => ModelId::Gpt4,
            "claude-v1" => ModelId::ClaudeV1,
            "llama-2-70b" => ModelId::Llama270b,
            other => ModelId::Other(other.to_string()),
        }
    }
}

impl From<String> for ModelId {
    fn from(value: String) -> Self {
        ModelId::from(value.as_str())
    }
}

impl From<ModelId> for String {
    fn from(value: ModelId) -> Self {
        value.to_string()
    }
}

impl FromStr for ModelId {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ModelId::from(value))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelId::Gpt35Turbo => write!(f, "gpt-3.5-turbo"),
            ModelId::Gpt4 => write!(f, "gpt-4"),
            ModelId::ClaudeV1 => write!(f, "claude-v1"),
            ModelId::Llama270b => write!(f, "llama-2-70b"),
            ModelId::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.min_ms == 0 && self.max_ms == 0
    }

    // Half-open range; a collapsed range always yields min_ms.
    pub fn sample(&self, rng: &mut StdRng) -> u64 {
        if self.max_ms > self.min_ms {
            rng.gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum LatencyPreset {
    Wide,
    #[default]
    Narrow,
}

impl LatencyPreset {
    pub fn delay_range(self) -> DelayRange {
        match self {
            LatencyPreset::Wide => DelayRange {
                min_ms: 1000,
                max_ms: 3000,
            },
            LatencyPreset::Narrow => DelayRange {
                min_ms: 1500,
                max_ms: 2500,
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub model: ModelId,
    pub latency: LatencyPreset,
    pub delay_ms: Option<DelayRange>,
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model: ModelId::Gpt35Turbo,
            latency: LatencyPreset::default(),
            delay_ms: None,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn response_delay(&self) -> DelayRange {
        self.delay_ms.unwrap_or_else(|| self.latency.delay_range())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DemoRequest {
    pub message: String,
    pub model: ModelId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DemoResult {
    pub model: ModelId,
    pub reply: String,
    pub usage: Usage,
    pub elapsed_seconds: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanTier {
    Free,
    Pro,
    Enterprise,
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanTier::Free => write!(f, "Starter (Free)"),
            PlanTier::Pro => write!(f, "Pro"),
            PlanTier::Enterprise => write!(f, "Enterprise"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceQuote {
    pub cost: f64,
    pub tier: PlanTier,
}

#[derive(Clone, Debug, Serialize)]
pub struct ModelInfo {
    pub id: ModelId,
    pub object: &'static str,
    pub owned_by: &'static str,
}

impl ModelInfo {
    pub fn new(id: ModelId, owned_by: &'static str) -> Self {
        Self {
            id,
            object: "model",
            owned_by,
        }
    }
}
