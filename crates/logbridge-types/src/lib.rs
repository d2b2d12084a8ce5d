pub mod content;
pub mod interaction;
mod util;

pub use content::*;
pub use interaction::*;
pub use util::*;
