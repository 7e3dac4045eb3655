pub mod console;
pub mod invoker;
pub mod menu;

pub use invoker::{InvocationReport, Invoker};
