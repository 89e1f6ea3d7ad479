pub mod forwarder;
pub mod resolver;
