use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mnema-server", version, about = "Vocabulary hint service")]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Resolve one hint and print it as JSON
    Hint(HintArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    pub bind: Option<String>,
    /// Listen port, overrides PORT
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct HintArgs {
    #[arg(long)]
    pub lemma: String,
    #[arg(long, default_value = "")]
    pub english: String,
    /// Dictionary entry passed to the generator as context
    #[arg(long)]
    pub entry: Option<String>,
    /// Skip the generator even if a key is configured
    #[arg(long)]
    pub offline: bool,
}
