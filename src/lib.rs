pub mod cover_letter;
pub mod environment;
pub mod exporter;
pub mod job_scraper;
pub mod matcher;
pub mod resume;
pub mod utils;
pub mod web;

pub use environment::ServiceConfig;
pub use web::start_web_server;
