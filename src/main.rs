use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use db_gateway::config::structs::configuration::Configuration;
use db_gateway::database::errors::GatewayError;
use db_gateway::database::structs::database_gateway::DatabaseGateway;
use db_gateway::database::structs::query_params::QueryParams;
use db_gateway::database::structs::query_value::QueryValue;
use db_gateway::logging::setup_logging;
use db_gateway::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let gateway = match DatabaseGateway::with_settings(config.database.clone(), &config.gateway) {
        Ok(gateway) => gateway,
        Err(error) => {
            error!("[BOOT] {error}");
            exit(1);
        }
    };

    let result = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let result = run(&gateway, &args).await;
            if let Err(error) = gateway.close().await {
                error!("[DbGateway] {error}");
            }
            result
        });

    if let Err(error) = result {
        error!("[DbGateway] {error}");
        exit(1);
    }
    Ok(())
}

async fn run(gateway: &DatabaseGateway, args: &Cli) -> Result<(), GatewayError>
{
    if args.ping {
        gateway.ping().await?;
        info!("[DbGateway] Ping to {} succeeded", gateway.locator());
    }

    if let Some(sql) = &args.query {
        let params: QueryParams = args
            .params
            .iter()
            .map(|(name, value)| (name, QueryValue::from_literal(value)))
            .collect();
        let result = gateway.execute_query(sql, &params).await?;
        info!(
            "[DbGateway] {} row(s) returned, {} row(s) affected",
            result.rows().len(),
            result.rows_affected()
        );
        match serde_json::to_string_pretty(result.rows()) {
            Ok(json) => println!("{json}"),
            Err(error) => error!("[DbGateway] Unable to render rows: {error}"),
        }
    }

    Ok(())
}
