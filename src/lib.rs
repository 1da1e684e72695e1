//! aws_cli_sample library: client-side behavior of the AWS CLI component sample site
//!
//! The sample site is a static page deployed to S3 and served through
//! CloudFront. Its script logs deployment details, adds smooth scrolling to
//! same-page links, logs button hovers, reports which environment is serving
//! the page, and prints the cache strategy the pipeline applies.
//!
//! The script runs against any [`Document`]; [`HtmlDocument`] provides one
//! backed by a parsed HTML page with a simulated event loop.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use aws_cli_sample::{start, Environment, HtmlDocument, MemoryConsole};
//!
//! let mut page = HtmlDocument::parse(
//!     r##"<body><a href="#top">Top</a><div id="top"></div></body>"##,
//!     "https://d111111abcdef8.cloudfront.net/",
//! )?;
//! let console = Rc::new(MemoryConsole::new());
//!
//! let sample = start(&mut page, console.clone());
//! page.finish_loading();
//!
//! assert_eq!(sample.get_environment(&page, console.as_ref()), Environment::CloudFront);
//! # Ok::<(), aws_cli_sample::PageError>(())
//! ```

pub mod config;
pub mod console;
pub mod document;
mod error_handling;
pub mod initialization;
pub mod page;
mod run;
mod utils;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use console::{Console, LogConsole, MemoryConsole, TeeConsole};
pub use document::{Document, ElementHandle, HtmlDocument, ReadyState};
pub use error_handling::{InitializationError, PageError};
pub use page::{classify_hostname, initialize, on_ready, start, Environment, SampleInfo};
pub use run::{run_sample, RunReport};
