use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use server::config::Overrides;

#[derive(Parser)]
#[command(name = "mathd")]
#[command(about = "Math function dispatch service", long_about = None)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "MATHD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Serve options when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API (the default)
    Serve(ServeArgs),
    /// List the function catalog
    Functions,
    /// Run one function locally and print the JSON response
    Call {
        /// Function name, e.g. fib
        name: String,
        /// Positional parameters; put `--` before tokens such as `-Infinity`
        #[arg(allow_negative_numbers = true)]
        params: Vec<String>,
        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args, Clone, Default)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long, env = "MATHD_CONFIG")]
    pub config: Option<PathBuf>,
    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,
    /// Port to bind
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Args, Clone, Default)]
pub struct LimitArgs {
    /// Maximum recursion depth per call
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Maximum length of any computed sequence
    #[arg(long)]
    pub max_len: Option<usize>,
    /// Stack size of the compute thread, in bytes
    #[arg(long)]
    pub stack_size: Option<usize>,
}

impl From<ServeArgs> for Overrides {
    fn from(args: ServeArgs) -> Self {
        Overrides {
            config: args.config,
            host: args.host,
            port: args.port,
            ..Overrides::from(args.limits)
        }
    }
}

impl From<LimitArgs> for Overrides {
    fn from(args: LimitArgs) -> Self {
        Overrides {
            max_depth: args.max_depth,
            max_len: args.max_len,
            stack_size: args.stack_size,
            ..Overrides::default()
        }
    }
}
