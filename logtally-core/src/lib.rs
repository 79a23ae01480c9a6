pub mod cli;
pub mod conf;
pub mod logging;
pub mod parse;
pub mod report;
