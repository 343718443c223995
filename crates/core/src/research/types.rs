use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced by the pure research functions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResearchError {
    #[error("Unknown operation: {0}")]
    UnsupportedOperation(String),
}

/// The transformation a caller asks the model to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Summarize,
    Suggest,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Summarize, Operation::Suggest];

    /// Wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ResearchError;

    /// Matching is exact: `"Summarize"` or `" suggest"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(Operation::Summarize),
            "suggest" => Ok(Operation::Suggest),
            other => Err(ResearchError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// A single research request as received from a client.
///
/// `operation` stays a raw string so that validation happens when the prompt
/// is built, and the offending value can be reported back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub operation: String,
    pub content: String,
}

impl ResearchRequest {
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            content: content.into(),
        }
    }
}

/// One entry of `contents` in a `generateContent` request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// `generateContent` request body: `{"contents":[{"parts":[{"text": ...}]}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a prompt as a single content with a single text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}
