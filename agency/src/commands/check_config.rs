use agency_config::Config;
use tracing::info;

use crate::environment::Provider;

/// Build every service from `config` without starting the server.
///
/// Missing integrations are reported as warnings, invalid values as errors.
pub fn check_config(config: &Config, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        println!("{config:#?}");
    }

    Provider::new(config)?.rest_server()?;
    info!("Config is valid, server would listen on {}", config.http.address);

    Ok(())
}
