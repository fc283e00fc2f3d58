//! Error kinds and the replayable failure value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

/// User-facing failure categories, each with a stable wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnsupportedPolynomialType,
    UnsupportedXType,
    ImpossibleToParseCoefficient,
    IncorrectMultiplySignPosition,
    ImpossibleToParseDegree,
    IncorrectDegreeSignPosition,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::UnsupportedPolynomialType,
        ErrorKind::UnsupportedXType,
        ErrorKind::ImpossibleToParseCoefficient,
        ErrorKind::IncorrectMultiplySignPosition,
        ErrorKind::ImpossibleToParseDegree,
        ErrorKind::IncorrectDegreeSignPosition,
    ];

    pub fn code(self) -> u16 {
        match self {
            ErrorKind::UnsupportedPolynomialType => 1,
            ErrorKind::UnsupportedXType => 2,
            ErrorKind::ImpossibleToParseCoefficient => 3,
            ErrorKind::IncorrectMultiplySignPosition => 4,
            ErrorKind::ImpossibleToParseDegree => 5,
            ErrorKind::IncorrectDegreeSignPosition => 6,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Message template; `%s` marks the slot for the offending term.
    pub fn template(self) -> &'static str {
        match self {
            ErrorKind::UnsupportedPolynomialType => {
                "Unsupported polynomial type. The example of a correct polynomial: \
                 '(x^2 - 5) * (2*x + 2)', '3*x^3 - 7*x + 1'"
            }
            ErrorKind::UnsupportedXType => {
                "Unsupported x type. The example of a correct x: '12', '-5'"
            }
            ErrorKind::ImpossibleToParseCoefficient => {
                "Impossible to parse coefficient (%s). The example of a correct coefficient: \
                 '12', '-5'"
            }
            ErrorKind::IncorrectMultiplySignPosition => {
                "Impossible to parse term (%s): incorrect sign '*' position: it should be before \
                 'x' in each term. The example of a correct terms: '2 * x^2', '-5 * x'"
            }
            ErrorKind::ImpossibleToParseDegree => {
                "Impossible to parse degree from term (%s). The example of a correct terms: \
                 '2 * x^2', 'x ^ 5'"
            }
            ErrorKind::IncorrectDegreeSignPosition => {
                "Impossible to parse term (%s): incorrect sign '^' position: it should be after \
                 'x' in each term. The example of a correct terms: '2 * x^2', 'x ^ 5'"
            }
        }
    }
}

/// A failure reduced to plain data: kind plus the ordered message parameters.
///
/// Storing this is enough to raise the same error again later without
/// re-deriving anything from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub parameters: Vec<String>,
}

impl Failure {
    pub fn new(kind: ErrorKind) -> Self {
        Failure {
            kind,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(kind: ErrorKind, parameter: impl Into<String>) -> Self {
        Failure {
            kind,
            parameters: vec![parameter.into()],
        }
    }

    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        let mut params = self.parameters.iter();
        let mut out = String::new();
        let mut rest = self.kind.template();
        while let Some(idx) = rest.find("%s") {
            out.push_str(&rest[..idx]);
            match params.next() {
                Some(param) => out.push_str(param),
                None => out.push_str("null"),
            }
            rest = &rest[idx + 2..];
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Debug, Error)]
pub enum PolyError {
    /// Failure tied to a polynomial string; `raw` is the request it came from.
    #[error("{failure}")]
    Polynomial {
        failure: Failure,
        raw: Option<String>,
    },
    #[error("{0}")]
    X(Failure),
    #[error("store error: {0}")]
    Store(String),
    #[error("config error: {0}")]
    Config(String),
}

impl PolyError {
    pub(crate) fn polynomial(failure: Failure) -> Self {
        PolyError::Polynomial { failure, raw: None }
    }

    /// Attach the raw request string to a polynomial failure.
    pub(crate) fn with_raw(self, raw: &str) -> Self {
        match self {
            PolyError::Polynomial { failure, .. } => PolyError::Polynomial {
                failure,
                raw: Some(raw.to_string()),
            },
            other => other,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            PolyError::Polynomial { failure, .. } | PolyError::X(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.failure().map(|f| f.kind)
    }
}
