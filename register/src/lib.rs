pub mod command;
pub mod error;
pub mod number;
pub mod range;
pub mod render;
pub mod session;
pub mod style;

pub use command::Command;
pub use range::BitRange;
pub use session::Session;
