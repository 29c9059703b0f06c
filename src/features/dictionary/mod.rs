pub mod error_conversions;
pub mod error_responses;
pub mod normalize;
pub mod resolver;
pub mod service;

pub use resolver::Resolver;
pub use service::Dictionary;
