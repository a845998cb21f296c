pub mod args;
pub mod view;
