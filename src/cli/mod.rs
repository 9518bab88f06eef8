mod commands;
mod handlers;

pub use commands::{Cli, Commands, ServeArgs};
pub use handlers::{handle_init_db, handle_serve, serve};
