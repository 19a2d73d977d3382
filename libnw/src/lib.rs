pub mod align;
mod util;
pub mod viz;
