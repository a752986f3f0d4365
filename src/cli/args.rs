use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "buddy")]
#[command(about = "Chat with a robot buddy that types out its replies")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat {
        /// Assistant name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Milliseconds between two typed characters
        #[arg(short = 'i', long = "interval-ms")]
        interval_ms: Option<u64>,
    },
    /// Print the storage body of a wiki page
    Fetch {
        /// Page id
        page_id: String,

        /// Wiki site URL (e.g., https://example.atlassian.net)
        #[arg(short = 'b', long = "base-url")]
        base_url: Option<String>,

        /// Account used to authenticate
        #[arg(short = 'u', long)]
        username: Option<String>,
    },
    /// Configure buddy settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
