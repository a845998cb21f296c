use basalt_derive::basalt_error;
use std::borrow::Cow;

#[basalt_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Shutdown requested")]
    Shutdown,

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> DemoResult<()> {
    std::fs::File::open("/nonexistent/segment").context("opening segment")?;
    Ok(())
}

fn main() {
    let _ = open();
}
