pub mod catalog;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "svcprobe")]
#[command(about = "Interactive console for invoking configured web services")]
pub struct CliConfig {
    #[arg(long, default_value = "svcprobe.toml", help = "Path to the service catalog")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
