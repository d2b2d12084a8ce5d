pub mod console;
pub mod convert;
