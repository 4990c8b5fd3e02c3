#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod logging;
pub mod models;
pub mod pages;
pub mod rewrite;
pub mod site;
pub mod verify;

pub use config::RewriteConfig;
pub use driver::{process_file, relativize_directory, rewrite_files};
pub use error::RewriteError;
pub use models::{FileFailure, FileOutcome, PreparedSite, ReferenceCheck, RunSummary};
pub use rewrite::PathRewriter;
pub use site::SitePreparer;
