use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;
use url::Url;

#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// Posts API endpoint
    #[arg(
        short,
        long,
        env = "POSTS_API",
        default_value = "http://localhost:8080/api/v1/posts"
    )]
    endpoint: Url,
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }
    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .format_timestamp(None)
            .init();
    }
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
