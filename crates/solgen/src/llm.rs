use crate::config::LlmConfig;
use crate::prelude::*;
use futures::future::{BoxFuture, FutureExt};
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::anthropic;

/// Something that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate_text<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>>;
}

/// Anthropic backed generator. Deterministic sampling, one user message.
pub struct AnthropicGenerator {
    client: anthropic::Client,
    model: String,
    max_tokens: u64,
}

impl AnthropicGenerator {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_eyre("Missing API key: set CLAUDE_API_KEY or pass --api-key")?;

        let client = anthropic::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| eyre!("Failed to create Anthropic client: {}", e))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

impl TextGenerator for AnthropicGenerator {
    fn generate_text<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        async move {
            let agent = self
                .client
                .agent(&self.model)
                .max_tokens(self.max_tokens)
                .temperature(0.0)
                .build();

            let response = agent
                .prompt(prompt)
                .await
                .map_err(|e| Error::GenerationFailed(e.to_string()))?;

            Ok(response.trim().to_string())
        }
        .boxed()
    }
}
