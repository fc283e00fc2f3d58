//! JSON request and response shapes used by the command-line front end.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::PolynomialCache;
use crate::error::PolyError;
use crate::pipeline::Pipeline;

/// Code reported for a request line that is not valid JSON.
pub const MALFORMED_REQUEST: u16 = 400;
/// Code reported for errors that carry no typed failure.
pub const UNKNOWN_ERROR: u16 = 999;

/// One request: simplify when `x` is absent, evaluate otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    pub polynomial: String,
    pub x: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Polynomial { polynomial: String },
    Evaluation { result: i64 },
    Error { code: u16, message: String },
}

impl Response {
    pub fn from_error(err: &PolyError) -> Self {
        match err.failure() {
            Some(failure) => Response::Error {
                code: failure.code(),
                message: failure.message(),
            },
            None => Response::Error {
                code: UNKNOWN_ERROR,
                message: err.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

pub fn answer<C: PolynomialCache>(pipeline: &Pipeline<C>, request: &Request) -> Response {
    let outcome = match &request.x {
        None => pipeline
            .simplify(&request.polynomial)
            .map(|polynomial| Response::Polynomial { polynomial }),
        Some(x) => pipeline
            .evaluate(&request.polynomial, x)
            .map(|result| Response::Evaluation { result }),
    };
    outcome.unwrap_or_else(|err| Response::from_error(&err))
}

/// Answers one JSON line; `None` for blank lines.
pub fn answer_line<C: PolynomialCache>(pipeline: &Pipeline<C>, line: &str) -> Option<Response> {
    if line.trim().is_empty() {
        return None;
    }
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => answer(pipeline, &request),
        Err(err) => {
            warn!(error = %err, "malformed request line");
            Response::Error {
                code: MALFORMED_REQUEST,
                message: format!("malformed request: {err}"),
            }
        }
    };
    Some(response)
}
