pub mod toml_config;

pub use toml_config::SearchConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::SearchConfig;
    use crate::domain::model::FanOut;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lootbox")]
    #[command(about = "Look up a game's details, prices, videos and live streams")]
    pub struct CliConfig {
        /// Game title to search for
        pub query: String,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Base URL of the lookup service
        #[arg(long)]
        pub base_url: Option<String>,

        /// Directory the result page is written to
        #[arg(long)]
        pub output_dir: Option<String>,

        /// File name of the result page
        #[arg(long)]
        pub page_name: Option<String>,

        /// Query prices, videos and streams one after another
        #[arg(long)]
        pub sequential: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Command line values take precedence over the configuration file.
        pub fn apply_overrides(&self, config: &mut SearchConfig) {
            if let Some(base_url) = &self.base_url {
                config.service.base_url = base_url.clone();
            }
            if let Some(output_dir) = &self.output_dir {
                config.output.directory = output_dir.clone();
            }
            if let Some(page_name) = &self.page_name {
                config.output.page_name = page_name.clone();
            }
            if self.sequential {
                config.search.fan_out = FanOut::Sequential;
            }
        }
    }

}
