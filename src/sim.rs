use std::time::Duration;

use log::debug;
use rand::{Rng, RngCore};
use tokio::time::sleep;

use crate::catalog;
use crate::error::{Error, Result};
use crate::models::{DemoConfig, DemoRequest, DemoResult, Usage};

pub trait ReplySelector: Send + Sync {
    fn select(&self, candidates: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str;
}

#[derive(Default)]
pub struct UniformSelector;

impl ReplySelector for UniformSelector {
    fn select(&self, candidates: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
        let choice = rng.gen_range(0..candidates.len());
        candidates[choice]
    }
}

pub struct FixedSelector(pub usize);

impl ReplySelector for FixedSelector {
    fn select(&self, candidates: &'static [&'static str], _rng: &mut dyn RngCore) -> &'static str {
        candidates[self.0 % candidates.len()]
    }
}

pub struct DemoSimulator {
    config: DemoConfig,
    selector: Box<dyn ReplySelector>,
}

impl DemoSimulator {
    pub fn new(config: DemoConfig) -> Self {
        Self::with_selector(config, Box::new(UniformSelector))
    }

    pub fn with_selector(config: DemoConfig, selector: Box<dyn ReplySelector>) -> Self {
        Self { config, selector }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub async fn simulate(&self, request: &DemoRequest) -> Result<DemoResult> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let candidates = catalog::replies(&request.model);
        let mut rng = self.config.rng();
        let reply = self.selector.select(candidates, &mut rng);

        let prompt_tokens = (message.chars().count() / 4) as u64;
        let completion_tokens: u64 = rng.gen_range(50..150);
        let elapsed_seconds = round_to(rng.gen_range(0.1..0.6), 3);

        let delay_ms = self.config.response_delay().sample(&mut rng);
        debug!(
            "replying as {} after {}ms ({} candidates)",
            request.model,
            delay_ms,
            candidates.len()
        );
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }

        Ok(DemoResult {
            model: request.model.clone(),
            reply: reply.to_string(),
            usage: Usage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            elapsed_seconds,
        })
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
