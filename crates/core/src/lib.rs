//! Core library for research-assistant
//!
//! This crate implements the **Functional Core** of the research-assistant
//! application, following the Functional Core - Imperative Shell pattern.
//!
//! # Architecture Overview
//!
//! - **`research_core`** (this crate): Pure transformation functions with zero I/O
//! - **`research-assistant`**: HTTP calls, servers, and orchestration (the Imperative Shell)
//!
//! Every function here is deterministic and has no side effects, so it can be
//! tested with plain fixture strings and no mocking.
//!
//! # Module Organization
//!
//! - [`research`]: Prompt construction and model response extraction
//!
//! # Example Usage
//!
//! ```rust
//! use research_core::research::{build_prompt, extract_answer, ResearchRequest};
//!
//! let request = ResearchRequest::new("suggest", "Photosynthesis");
//! let prompt = build_prompt(&request).unwrap();
//! assert!(prompt.ends_with("Photosynthesis"));
//!
//! let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello world"}]}}]}"#;
//! assert_eq!(extract_answer(raw), "Hello world");
//! ```

pub mod research;
