// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_from_file;
pub use scrape::collect_report;
pub use scrape::collect_statistics;
pub use scrape::extract;
pub use scrape::report_from_doc;
