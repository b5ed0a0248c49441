pub mod dns;
pub mod errors;
pub mod logging;
pub mod resolvers;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolvers::default_resolvers;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
