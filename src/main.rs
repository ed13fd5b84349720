use chicken_classifier::config::LogFormat;
use chicken_classifier::utils::{error::ArtifactError, logger};
use chicken_classifier::{DriverArgs, PrepareArtifactsStage, Stage, StageRunner};
use clap::Parser;

fn main() {
    let args = DriverArgs::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Compact => {
            if let Err(e) = logger::init_cli_logger(args.verbose, args.log_file.as_deref()) {
                eprintln!("❌ Failed to open log file: {}", e);
                std::process::exit(1);
            }
        }
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("Starting chicken-classifier pipeline");
    if args.verbose {
        tracing::debug!("Driver args: {:?}", args);
    }

    let stages: Vec<Box<dyn Stage>> = vec![Box::new(
        PrepareArtifactsStage::new(&args.config).with_params(&args.params),
    )];

    let runner = StageRunner::new_with_monitoring(args.monitor);
    if let Err(e) = runner.run_all(&stages) {
        eprintln!("❌ {:#}", e);
        if let Some(artifact_error) = e.downcast_ref::<ArtifactError>() {
            eprintln!("❌ {}", artifact_error.user_friendly_message());
            eprintln!("💡 Suggestion: {}", artifact_error.recovery_suggestion());
        }
        std::process::exit(1);
    }

    tracing::info!("✅ All stages completed");
}
