//! Everything needed for typical use in one import.

pub use crate::cache::{InMemoryCache, PolynomialCache, PolynomialRecord};
pub use crate::config::PipelineConfig;
pub use crate::error::{ErrorKind, Failure, PolyError, Result};
pub use crate::parser::{parse_canonical, parse_polynomial, parse_x};
pub use crate::pipeline::Pipeline;
pub use crate::polynomial::Polynomial;
pub use crate::term::Term;
pub use crate::ui::{evaluate, format_canonical, parse_and_simplify};
