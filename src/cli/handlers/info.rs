//! Information display handlers (platforms, config)

use crate::cli::output::print_config;
use crate::cli::output::print_platforms;
use crate::AppConfig;
use crate::Result;

pub fn handle_platforms_command() -> Result<()> {
    print_platforms();
    Ok(())
}

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
