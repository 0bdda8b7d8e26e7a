use clap::Parser;
use debian_deps::app::oneshot;
use debian_deps::utils::{logger, validation::Validate};
use debian_deps::{AptVenv, CliConfig, DepsError, ReleaseCatalog, Resolver};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.flask {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        if let DepsError::UnknownRelease { .. } = e {
            let known: Vec<&str> = ReleaseCatalog::aliases().collect();
            eprintln!("known releases: {}", known.join(", "));
        }
        std::process::exit(e.exit_code());
    }

    let service_config = match config.service_config() {
        Ok(service_config) => service_config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if config.flask {
        debian_deps::server::serve(&service_config).await?;
        return Ok(());
    }

    let input = config.input.clone().unwrap_or_default();
    let release = config.release().to_string();
    let output_file = config.output_file.clone().map(PathBuf::from);
    let program = service_config.tool.program.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        let resolver = Resolver::new(AptVenv::new(program));
        let report = oneshot::resolve_report(&resolver, &input, &release)?;
        oneshot::write_report(&report, output_file.as_deref())
    })
    .await?;

    if let Err(e) = outcome {
        tracing::error!("Resolution failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
