pub mod dictionary;
pub mod format;
pub mod preprocess;

pub use dictionary::{Dictionary, search};
pub use format::{capitalize, format};
