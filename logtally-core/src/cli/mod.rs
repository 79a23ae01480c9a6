pub mod conf;
pub mod report;
