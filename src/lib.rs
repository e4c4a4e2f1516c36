//! User-Agent detection for server-side rendering.
//!
//! Classifies the client behind a request from its `User-Agent` header and a
//! few related headers, and decides whether crawler-guarded markup should be
//! suppressed.
//!
//! # Features
//!
//! - Crawler identity and version from an ordered signature table
//! - Device category (desktop, tablet, mobile, tv, ...)
//! - Platform, platform version and processor
//! - Rendering engine
//! - Responsive view from device defaults and a preference cookie
//! - Include/exclude tag filtering
//!
//! # Example
//!
//! ```
//! use ua_detection::{classify, should_suppress, CrawlerKind};
//!
//! let result = classify("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)", None);
//! assert_eq!(result.kind(), CrawlerKind::Google);
//! assert!(should_suppress(&result, None, Some("google")));
//! ```

pub mod config;
pub mod detectors;
pub mod error;
pub mod filter;
pub mod responsive;
pub mod service;
pub mod version;

mod text;

pub use config::{CrawlerOptions, DetectionOptions, ResponsiveOptions};
pub use detectors::{
    classify, ClassificationResult, CrawlerDetector, CrawlerKind, DetectionContext, Detector,
    Device, Engine, Platform, PlatformInfo, Processor, SignatureTable,
};
pub use error::DetectionError;
pub use filter::{should_suppress, TagFilter};
pub use responsive::{ResponsiveResolver, ResponsiveView};
pub use service::{DetectionReport, DetectionService};
pub use version::Version;
