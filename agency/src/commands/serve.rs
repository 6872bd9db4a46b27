use agency_config::Config;
use tracing::info;

use crate::environment::Provider;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(&config)?;
    let server = provider.rest_server()?;

    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
