use clap::Parser;
use log::{error, info};

use tsunjo_client::core::{
    cli::Cli,
    common::CancellationSource,
    configuration::{get_configuration, Configuration},
    core::{assemble, run},
    logger::start_logger,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut conf = match &cli.configuration_file {
        Some(path) => get_configuration(path).await?,
        None => Configuration::default(),
    };

    if let Some(environment) = cli.environment {
        conf.api.environment = Some(environment);
    }

    conf.assert_data_dir_permissions()?;
    conf.assert_timeout_is_positive()?;

    let _logger = start_logger(&conf, cli.verbosity)?;

    info!("running against {:?} environment", conf.environment());

    let services = assemble(&conf)?;

    let cancel = CancellationSource::new();
    let token = cancel.token();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    match run(&services, cli.command, &token).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
