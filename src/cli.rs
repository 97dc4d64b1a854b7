use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "friendlist",
    version,
    about = "A terminal friends list with a paginated selectable table and a synchronized form."
)]
pub struct Cli {
    /// Config file to use instead of ./friendlist.toml or the XDG config.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default config file (to PATH, or the XDG config path) and exit.
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<Option<PathBuf>>,
}
