pub mod check;
pub mod resolver;

pub use check::{CheckQuery, CheckResponse};
pub use resolver::{ResolverDto, ResolverResultDto};
