//! Core library for solgen
//!
//! This crate implements the **Functional Core** of the solgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`solgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`solgen`**: Language model and compiler invocation, HTTP server and CLI
//!   (the Imperative Shell)
//!
//! Nothing in here talks to the language model or spawns the compiler. The
//! shell hands over the model's reply or the compiler's JSON output and this
//! crate turns it into domain values.
//!
//! # Module Organization
//!
//! - [`generation`]: Prompt assembly and parsing of the model's reply
//! - [`compilation`]: Source sanitizing, compiler input assembly, output
//!   extraction and version checks
//!
//! # Example Usage
//!
//! ```rust
//! use solgen_core::generation::{build_prompt, parse_reply};
//!
//! let prompt = build_prompt("An ERC20 token called Gold");
//! assert!(prompt.contains("An ERC20 token called Gold"));
//!
//! let result = parse_reply("Sure.\n```solidity\ncontract Gold {}\n```\nDone.");
//! assert_eq!(result.code, "contract Gold {}");
//! assert_eq!(result.first_explanation, "Sure.");
//! assert_eq!(result.last_explanation, "Done.");
//! ```

pub mod compilation;
pub mod generation;
