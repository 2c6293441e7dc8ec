use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "fieldscope.toml")]
    pub config: String,

    /// Override the HTTP port from the config
    #[arg(long)]
    pub port: Option<u16>,

    /// Skip display hardware probing and run headless
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}
