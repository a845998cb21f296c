pub mod check;
pub mod defaults;
pub mod property;
pub mod wire;
