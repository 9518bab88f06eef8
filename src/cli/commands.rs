use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "notes-api")]
#[command(version, about = "HTTP CRUD service for notes stored in SQLite")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Create the database and the notes table, then exit
    InitDb {
        /// SQLite database file
        #[arg(long, value_name = "PATH")]
        db: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on [default: 0.0.0.0:3000]
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<SocketAddr>,

    /// SQLite database file [default: ./notes.db]
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset [default: info]
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl ServeArgs {
    /// Apply the flags that were given on top of the defaults
    pub fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            listen_addr: self.addr.unwrap_or(defaults.listen_addr),
            database_path: self.db.unwrap_or(defaults.database_path),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        }
    }
}
