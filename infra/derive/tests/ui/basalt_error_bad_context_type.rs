use basalt_derive::basalt_error;

#[basalt_error]
pub enum DemoError {
    #[error("Unknown key: {key}")]
    UnknownKey { key: String, context: Option<String> },
}

fn main() {}
