#![allow(dead_code)]

mod mock_dns_client;

pub use mock_dns_client::{endpoint, MockBehavior, MockDnsClient};
