//! Facade for the Basalt configuration crates.
//! Re-exports the domain vocabulary, the property kernel and (with `logger`) the subscriber setup.
//! Keep this crate thin: it composes the other crates, it does not define properties.
//!
//! ## Usage
//! ```rust,no_run
//! use basalt::prelude::*;
//!
//! let site = SiteConfiguration::builder().optional_file("site.toml").build().unwrap();
//! # #[cfg(feature = "logger")]
//! let _logger = basalt::logging::init("basalt", &site).unwrap();
//! ```

mod error;
#[cfg(feature = "logger")]
pub mod logging;

pub use crate::error::{BasaltError, BasaltErrorExt, BasaltResult};
pub use basalt_domain as domain;
pub use basalt_kernel as kernel;
#[cfg(feature = "logger")]
pub use basalt_logger as logger;

pub mod prelude {
    pub use crate::{BasaltError, BasaltResult};
    pub use basalt_kernel::prelude::*;
}
