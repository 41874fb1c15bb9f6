pub mod attend;
pub mod check;

use crate::libs::context::AppContext;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
#[command(disable_version_flag(true))]
pub struct Cli {
    #[arg(long, help = "Show attendance records for the current month")]
    check: bool,

    #[arg(long, help = "Print version information")]
    version: bool,

    #[arg(long, value_name = "FILE", help = "Path to the configuration file")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Path to the attendance database")]
    db: Option<PathBuf>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        // Version is reported before any path resolution so it cannot
        // touch the filesystem or fail.
        if cli.version {
            msg_print!(Message::Version(env!("CARGO_PKG_VERSION").to_string()));
            return Ok(());
        }

        let ctx = AppContext::resolve(env!("CARGO_PKG_VERSION"), cli.config, cli.db)?;

        if cli.check {
            check::cmd(&ctx)
        } else {
            attend::cmd(&ctx)
        }
    }
}
