pub mod lookup_client;
pub mod parsing;
