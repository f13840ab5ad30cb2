pub mod commands;
pub mod logging;
pub mod word_source;
