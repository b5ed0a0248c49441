pub mod check;
pub mod health;
pub mod resolvers;

pub use check::check_propagation;
pub use health::{health_check, root};
pub use resolvers::get_resolvers;
