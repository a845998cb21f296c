//! Configuration kernel: the property registry, value parsers and layered site configuration.
//!
//! ```rust
//! use basalt_kernel::prelude::*;
//!
//! let defaults = DefaultConfiguration::new();
//! assert_eq!(defaults.get(Property::MasterClientPort), "9999");
//! assert_eq!(defaults.get_port(Property::MasterClientPort).unwrap(), 9999);
//! ```
//!
//! ## Site configuration
//! ```rust,no_run
//! use basalt_kernel::prelude::*;
//!
//! // site.toml overlaid with BASALT__* environment variables
//! let site = SiteConfiguration::load("site.toml").unwrap();
//! let threads = site.get_count(Property::TserverMinThreads).unwrap();
//! # let _ = threads;
//! ```
pub mod conf;
pub mod prelude;

pub use basalt_domain as domain;
