//! Parsing, simplification and evaluation of single-variable integer
//! polynomials, with a memoizing pipeline in front of the pure engine.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod pipeline;
pub mod polynomial;
pub mod prelude;
pub mod term;
pub mod ui;
pub mod wire;

pub use cache::{InMemoryCache, PolynomialCache, PolynomialRecord};
pub use config::PipelineConfig;
pub use error::{ErrorKind, Failure, PolyError, Result};
pub use parser::{parse_canonical, parse_polynomial, parse_x};
pub use pipeline::Pipeline;
pub use polynomial::Polynomial;
pub use term::Term;
pub use ui::{evaluate, format_canonical, parse_and_simplify};
