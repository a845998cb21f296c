use basalt_kernel::conf::ConfigError;
use std::borrow::Cow;

#[basalt_derive::basalt_error]
pub enum BasaltError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "logger")]
    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: basalt_logger::LoggerError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
