pub mod commands;
pub mod dispatcher;

pub use dispatcher::{tokenize, Dispatcher};
