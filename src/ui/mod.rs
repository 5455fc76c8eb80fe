pub mod render;
pub mod repl;
pub mod widget;

pub use widget::LookupWidget;
