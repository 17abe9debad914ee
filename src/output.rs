use std::io::{self, Write};
use std::time::Duration;

use rand::rngs::StdRng;
use serde::Serialize;
use tokio::time::sleep;

use crate::cli::FormatArg;
use crate::error::{Error, Result};
use crate::models::{DelayRange, DemoResult, ModelInfo, PriceQuote, Usage};

pub const WORD_DELAY_MS: DelayRange = DelayRange {
    min_ms: 50,
    max_ms: 150,
};

pub trait Formatter {
    fn chat(&self, result: &DemoResult) -> Result<String>;
    fn quote(&self, requests: u64, quote: &PriceQuote) -> Result<String>;
    fn models(&self, models: &[ModelInfo]) -> Result<String>;
}

pub struct HumanFormatter;
pub struct JsonFormatter;

pub fn formatter_for(format: FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}

impl Formatter for HumanFormatter {
    fn chat(&self, result: &DemoResult) -> Result<String> {
        Ok(format!("{}\n\n{}", result.reply, chat_footer(result)))
    }

    fn quote(&self, requests: u64, quote: &PriceQuote) -> Result<String> {
        let cost = if quote.cost == 0.0 {
            "Free".to_string()
        } else {
            format!("${:.2}/month", quote.cost)
        };
        Ok(format!(
            "Requests: {} per month\nEstimated cost: {}\nPlan: {}\n",
            group_thousands(requests),
            cost,
            quote.tier
        ))
    }

    fn models(&self, models: &[ModelInfo]) -> Result<String> {
        let mut out = String::new();
        for info in models {
            out.push_str(&format!("{} ({})\n", info.id, info.owned_by));
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Serialize)]
struct ChatCompletion {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Usage,
    elapsed_seconds: f64,
}

#[derive(Serialize)]
struct QuoteOutput {
    requests: u64,
    cost: f64,
    tier: crate::models::PlanTier,
}

#[derive(Serialize)]
struct ModelListing<'a> {
    data: &'a [ModelInfo],
}

impl Formatter for JsonFormatter {
    fn chat(&self, result: &DemoResult) -> Result<String> {
        let envelope = ChatCompletion {
            model: result.model.to_string(),
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: "assistant",
                    content: result.reply.clone(),
                },
            }],
            usage: result.usage.clone(),
            elapsed_seconds: result.elapsed_seconds,
        };
        render_json(&envelope)
    }

    fn quote(&self, requests: u64, quote: &PriceQuote) -> Result<String> {
        render_json(&QuoteOutput {
            requests,
            cost: quote.cost,
            tier: quote.tier,
        })
    }

    fn models(&self, models: &[ModelInfo]) -> Result<String> {
        render_json(&ModelListing { data: models })
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|err| Error::Render(err.to_string()))?;
    Ok(format!("{}\n", rendered))
}

pub fn chat_footer(result: &DemoResult) -> String {
    format!(
        "Model: {} | Tokens: {} | Time: {:.3}s\n",
        result.model, result.usage.total_tokens, result.elapsed_seconds
    )
}

pub async fn stream_words(reply: &str, delay: DelayRange, rng: &mut StdRng) -> io::Result<()> {
    let mut stdout = io::stdout();
    for (idx, word) in reply.split_whitespace().enumerate() {
        if idx > 0 {
            write!(stdout, " ")?;
        }
        write!(stdout, "{}", word)?;
        stdout.flush()?;
        let pause = delay.sample(rng);
        if pause > 0 {
            sleep(Duration::from_millis(pause)).await;
        }
    }
    writeln!(stdout)?;
    Ok(())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
