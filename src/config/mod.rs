pub mod schema;

pub use schema::{ClassifierConfig, Config, GatewayConfig};
