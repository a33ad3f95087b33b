//! Performa - Main entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use performa::artifacts::{ArtifactState, ArtifactStore};
use performa::cli::{Args, Commands};
use performa::config::ServiceConfig;
use performa::doctor::Doctor;
use performa::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    match &args.command {
        Some(Commands::Doctor) => run_doctor(config),
        Some(Commands::Config) => {
            show_config(&config);
            Ok(())
        }
        None => run_server(&args, config).await,
    }
}

fn resolve_config(args: &Args) -> Result<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli(args.host.as_deref(), args.port, args.artifact_dir.as_deref());
    Ok(config)
}

async fn run_server(args: &Args, config: ServiceConfig) -> Result<()> {
    let verbosity = args.verbosity();

    if verbosity.show_output() {
        println!("{}", "Performa inference service".bold());
    }
    if verbosity.show_details() {
        println!("  model:         {}", config.model_path().display());
        println!("  scaler:        {}", config.scaler_path().display());
        println!("  label encoder: {}", config.label_encoder_path().display());
    }

    let artifact_state = ArtifactStore::load(&config);
    match &artifact_state {
        ArtifactState::Ready(store) => {
            if verbosity.show_output() {
                println!(
                    "{} artifacts loaded ({} features, {} classes: {})",
                    "✓".green(),
                    store.scaler.n_features(),
                    store.encoder.len(),
                    store.encoder.classes().join(", ")
                );
            }
        }
        ArtifactState::Degraded { reason } => {
            eprintln!("{}: {}", "Degraded startup".yellow(), reason);
            eprintln!("  Inference requests will fail with 500 until the artifacts are restored and the service restarts.");
        }
    }

    let state = AppState::new(artifact_state);
    let addr = config.bind_addr();
    if verbosity.show_output() {
        println!("Listening on http://{}", addr);
    }

    server::serve(state, &addr).await
}

fn run_doctor(config: ServiceConfig) -> Result<()> {
    let doctor = Doctor::new(config);
    let checks = doctor.run_diagnostics();
    Doctor::display_results(&checks);

    std::process::exit(if Doctor::overall_status(&checks) { 0 } else { 1 });
}

fn show_config(config: &ServiceConfig) {
    println!("Performa configuration\n");

    println!("Server:");
    println!("  Host:  {}", config.server.host);
    println!("  Port:  {}", config.server.port);
    println!();

    println!("Artifacts:");
    println!("  Directory:     {}", config.artifacts.dir.display());
    println!("  Model:         {}", config.artifacts.model_file);
    println!("  Scaler:        {}", config.artifacts.scaler_file);
    println!("  Label encoder: {}", config.artifacts.label_encoder_file);
    println!();
}
