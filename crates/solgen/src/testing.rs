//! Deterministic collaborators for tests.

use crate::llm::TextGenerator;
use crate::prelude::*;
use crate::solc::SolidityCompiler;
use futures::future::{BoxFuture, FutureExt};
use serde_json::{json, Value};
use solgen_core::compilation::{StandardJsonInput, LIBRARY_ALIAS};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Replies with a fixed text and records every prompt it saw.
pub struct ScriptedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate_text<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        futures::future::ready(Ok(self.reply.clone())).boxed()
    }
}

pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl TextGenerator for FailingGenerator {
    fn generate_text<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        futures::future::ready(Err(Error::GenerationFailed(self.message.clone()))).boxed()
    }
}

/// Only answers once `parties` calls are pending at the same time.
pub struct RendezvousGenerator {
    barrier: Arc<Barrier>,
}

impl RendezvousGenerator {
    pub fn new(parties: usize) -> Self {
        Self {
            barrier: Arc::new(Barrier::new(parties)),
        }
    }
}

impl TextGenerator for RendezvousGenerator {
    fn generate_text<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        async move {
            self.barrier.wait().await;
            Ok("met".to_string())
        }
        .boxed()
    }
}

/// Returns a canned output document and records every input it saw.
pub struct ScriptedCompiler {
    output: Result<Value, String>,
    inputs: Mutex<Vec<StandardJsonInput>>,
}

impl ScriptedCompiler {
    pub fn new(output: Value) -> Self {
        Self {
            output: Ok(output),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            output: Err(message.to_string()),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<StandardJsonInput> {
        self.inputs.lock().unwrap().clone()
    }
}

impl SolidityCompiler for ScriptedCompiler {
    fn compile<'a>(&'a self, input: &'a StandardJsonInput) -> BoxFuture<'a, Result<Value, Error>> {
        self.inputs.lock().unwrap().push(input.clone());
        let output = self.output.clone().map_err(Error::CompilationFailed);
        futures::future::ready(output).boxed()
    }
}

/// Resolves library imports through the input's remapping the way solc
/// does, reporting a missing file as an error diagnostic.
pub struct LibraryAwareCompiler;

impl LibraryAwareCompiler {
    fn library_root(input: &StandardJsonInput) -> Option<PathBuf> {
        input.settings.remappings.iter().find_map(|remapping| {
            remapping
                .strip_prefix(LIBRARY_ALIAS)
                .and_then(|rest| rest.strip_prefix('='))
                .map(PathBuf::from)
        })
    }

    fn imports(source: &str) -> Vec<&str> {
        source
            .lines()
            .filter_map(|line| line.trim().strip_prefix("import \""))
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }
}

impl SolidityCompiler for LibraryAwareCompiler {
    fn compile<'a>(&'a self, input: &'a StandardJsonInput) -> BoxFuture<'a, Result<Value, Error>> {
        let source = input.source().unwrap_or_default();
        let root = Self::library_root(input);

        let missing: Vec<Value> = Self::imports(source)
            .into_iter()
            .filter(|import| {
                let resolved = match (&root, import.strip_prefix(LIBRARY_ALIAS)) {
                    (Some(root), Some(relative)) => root.join(relative.trim_start_matches('/')),
                    _ => PathBuf::from(import),
                };
                !resolved.is_file()
            })
            .map(|import| {
                json!({
                    "severity": "error",
                    "type": "ParserError",
                    "message": f!("Source \"{import}\" not found: File not found."),
                })
            })
            .collect();

        let output = if missing.is_empty() {
            json!({
                "contracts": {
                    "Contract.sol": {
                        "Owned": { "abi": [], "evm": { "bytecode": { "object": "6080" } } }
                    }
                }
            })
        } else {
            json!({ "errors": missing })
        };

        futures::future::ready(Ok(output)).boxed()
    }
}
