use basalt_derive::basalt_error;

#[basalt_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
