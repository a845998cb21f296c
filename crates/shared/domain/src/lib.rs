//! # Domain Models
//!
//! Pure data for the Basalt configuration core: the compiled-in property table and the
//! integer-coded vocabularies exchanged with other processes.
//! Keep it lean: no I/O and no value parsing. Validation lives in `basalt-kernel`.

pub mod master;
pub mod properties;
pub mod property;
pub mod security;
pub mod wire;

pub use master::MasterState;
pub use properties::{PROPERTIES, Property};
pub use property::{PropertyDefinition, PropertyFlags, PropertyPrefix, PropertyType};
pub use security::SecurityErrorCode;
pub use wire::WireEnum;
