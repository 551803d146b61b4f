use clap::Parser;
use notefulapp::config::NotefulConfig;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "noteful", bin_name = "noteful", version)]
#[command(about = "Serve a small JSON REST API for notes", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the per-user config dir)
    #[arg(long, value_name = "DIR", help_heading = "Config")]
    pub config_dir: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long, help_heading = "Config")]
    pub print_config: bool,

    /// Interface to bind
    #[arg(long, help_heading = "Server")]
    pub host: Option<String>,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, help_heading = "Server")]
    pub port: Option<u16>,

    /// Serve static files from this directory
    #[arg(long, value_name = "DIR", help_heading = "Server")]
    pub public_dir: Option<PathBuf>,

    /// Disable static file serving
    #[arg(long, conflicts_with = "public_dir", help_heading = "Server")]
    pub no_static: bool,

    /// Largest accepted request body, in bytes
    #[arg(long, value_name = "BYTES", help_heading = "Server")]
    pub max_body_bytes: Option<usize>,

    /// JSON file with the notes to start from
    #[arg(long, value_name = "FILE", help_heading = "Data")]
    pub seed: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL", help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Write rotated log files here instead of stderr
    #[arg(long, value_name = "DIR", help_heading = "Logging")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line flags on top of file/default config.
    pub fn apply(&self, mut config: NotefulConfig) -> NotefulConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.no_static {
            config.public_dir = None;
        } else if let Some(dir) = &self.public_dir {
            config.public_dir = Some(dir.clone());
        }
        if let Some(limit) = self.max_body_bytes {
            config.max_body_bytes = limit;
        }
        if let Some(seed) = &self.seed {
            config.seed_file = Some(seed.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        config
    }
}
