#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Basalt crates.
//!
//! Currently a single attribute, [`macro@basalt_error`], which turns a plain enum into
//! a `thiserror` error with context support and the conversions every Basalt
//! error type is expected to have.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Stem>Result<T>` alias, where the stem is the enum name without its `Error`
///   suffix (`ConfigError` gives `ConfigResult<T>`).
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Must be applied to an **enum**; tuple variants are rejected.
/// 2. Variants that take context declare `context: Option<Cow<'static, str>>`.
/// 3. Variants with a source must also declare a context field.
///
/// `format_context` is emitted next to the enum, so keep one error enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use basalt_derive::basalt_error;
/// use std::borrow::Cow;
///
/// #[basalt_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open(path: &str) -> StoreResult<std::fs::File> {
///     std::fs::File::open(path).context("Opening store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn basalt_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
