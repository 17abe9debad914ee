use crate::models::{ModelId, ModelInfo};

const GPT_35_TURBO_REPLIES: &[&str] = &[
    "Hello! I'm HelixFlow AI, powered by GPT-3.5 Turbo. I'm here to help you with any questions or tasks you have. How can I assist you today?",
    "Great to meet you! I can help with a wide variety of tasks including answering questions, providing explanations, helping with writing, and much more. What would you like to know?",
    "Hi there! I'm ready to help you with your questions. I have knowledge about many topics and can assist with both simple and complex inquiries.",
];

const GPT_4_REPLIES: &[&str] = &[
    "Greetings! I'm powered by GPT-4 through HelixFlow's enterprise platform. I offer enhanced reasoning capabilities and can provide more detailed, nuanced responses. How may I help you today?",
    "Hello! As an AI assistant powered by GPT-4, I can help with complex problem-solving, detailed analysis, creative writing, and much more. I'm excited to assist you with your inquiry.",
];

const CLAUDE_V1_REPLIES: &[&str] = &[
    "Hello! I'm Claude, accessible through HelixFlow's unified API. I'm designed to be helpful, harmless, and honest in my interactions. How can I assist you today?",
    "Hi there! I'm Claude, and I'm here to provide helpful and thoughtful responses to your questions. I strive to be informative while maintaining safety and accuracy.",
];

const LLAMA_2_70B_REPLIES: &[&str] = &[
    "Greetings! I'm powered by Llama 2 70B through HelixFlow. I'm an open-source large language model that can help with various tasks including answering questions and providing information.",
    "Hello! I'm accessible via Llama 2, and I'm here to help you with your questions and tasks. I can assist with information, analysis, and general conversation.",
];

const FALLBACK_REPLIES: &[&str] = &[
    "Hello! I'm here to help you with any questions or tasks you have. How can I assist you further?",
];

pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Explain quantum computing in simple terms",
    "Write a Python function to reverse a string",
    "What are the benefits of cloud computing?",
    "Generate a business plan outline for a startup",
    "Explain machine learning to a 5-year-old",
];

// Every known model has a non-empty list; anything else gets the fallback.
pub fn replies(model: &ModelId) -> &'static [&'static str] {
    match model {
        ModelId::Gpt35Turbo => GPT_35_TURBO_REPLIES,
        ModelId::Gpt4 => GPT_4_REPLIES,
        ModelId::ClaudeV1 => CLAUDE_V1_REPLIES,
        ModelId::Llama270b => LLAMA_2_70B_REPLIES,
        ModelId::Other(_) => FALLBACK_REPLIES,
    }
}

pub fn fallback_replies() -> &'static [&'static str] {
    FALLBACK_REPLIES
}

pub fn model_listing() -> Vec<ModelInfo> {
    vec![
        ModelInfo::new(ModelId::Gpt35Turbo, "openai"),
        ModelInfo::new(ModelId::Gpt4, "openai"),
        ModelInfo::new(ModelId::ClaudeV1, "anthropic"),
        ModelInfo::new(ModelId::Llama270b, "meta"),
    ]
}
