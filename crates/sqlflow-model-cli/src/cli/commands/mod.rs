//! CLI command handlers. Each command is in its own file.

mod drivers;
mod load;
mod parse_uri;
mod save;

pub use drivers::run_drivers;
pub use load::run_load;
pub use parse_uri::run_parse_uri;
pub use save::run_save;
