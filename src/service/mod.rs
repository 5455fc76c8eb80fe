pub mod dictionary;
pub mod fallback;
pub mod gameapi;
