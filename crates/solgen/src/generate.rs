use crate::config::LlmConfig;
use crate::llm::{AnthropicGenerator, TextGenerator};
use crate::prelude::{eprintln, println, *};
use solgen_core::generation::{build_prompt, parse_reply, GenerationRequest, GenerationResult};

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Draft a Solidity contract from a description")]
pub struct App {
    /// What the contract should do
    pub description: String,

    /// Print the full result as JSON
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub llm: LlmConfig,
}

/// Ask the model for a contract and split its reply.
///
/// Calls the generator exactly once. Parsing never fails; only the
/// generator can.
pub async fn generate_contract(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GenerationResult, Error> {
    let prompt = build_prompt(&request.description);
    log::debug!(
        "Generating contract: description {} chars, prompt {} chars",
        request.description.len(),
        prompt.len()
    );

    let reply = generator.generate_text(&prompt).await?;
    log::debug!("Model replied with {} chars", reply.len());

    Ok(parse_reply(&reply))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let generator = AnthropicGenerator::new(&app.llm)?;

    if global.verbose {
        eprintln!("Model: {}", app.llm.model);
    }

    let request = GenerationRequest {
        description: app.description,
    };
    let result = generate_contract(&generator, &request).await?;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if global.verbose {
        eprintln!("{}\n", result.first_explanation);
    }
    println!("{}", result.code);
    if global.verbose {
        eprintln!("\n{}", result.last_explanation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingGenerator, ScriptedGenerator};
    use solgen_core::generation::EXAMPLE_CONTRACT;

    fn request(description: &str) -> GenerationRequest {
        GenerationRequest {
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_calls_model_once_with_template_and_description() {
        let generator = ScriptedGenerator::new("no code for you");
        let description = "A capped token } with {braces} and ```fences```";

        generate_contract(&generator, &request(description))
            .await
            .unwrap();

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(EXAMPLE_CONTRACT));
        assert!(prompts[0].contains(description));
    }

    #[tokio::test]
    async fn test_splits_reply() {
        let generator = ScriptedGenerator::new(
            "Here you go:\n```solidity\ncontract Capped {}\n```\nRemember to audit it.",
        );

        let result = generate_contract(&generator, &request("capped token"))
            .await
            .unwrap();

        assert_eq!(result.code, "contract Capped {}");
        assert_eq!(result.first_explanation, "Here you go:");
        assert_eq!(result.last_explanation, "Remember to audit it.");
    }

    #[tokio::test]
    async fn test_unstructured_reply_degrades() {
        let generator = ScriptedGenerator::new("I would rather not.");

        let result = generate_contract(&generator, &request("anything"))
            .await
            .unwrap();

        assert_eq!(result.code, "");
        assert_eq!(result.first_explanation, "I would rather not.");
        assert_eq!(result.last_explanation, "I would rather not.");
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let generator = FailingGenerator::new("authentication_error: invalid x-api-key");

        let err = generate_contract(&generator, &request("anything"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::GenerationFailed("authentication_error: invalid x-api-key".to_string())
        );
    }
}
