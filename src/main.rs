use clap::{CommandFactory, Parser};
use taskproc::utils::{logger, validation::Validate};
use taskproc::{CliConfig, Command, LocalStorage, PipelineEngine, TaskPipeline};

fn main() {
    let cli = CliConfig::parse();

    let Some(Command::Process(args)) = cli.command else {
        let _ = CliConfig::command().print_help();
        std::process::exit(1);
    };

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting taskproc");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = TaskPipeline::new(storage, args);
    let engine = PipelineEngine::new(pipeline);

    match engine.run() {
        Ok(count) => {
            tracing::info!("✅ Processing completed successfully!");
            println!("✅ Processed {} records", count);
        }
        Err(e) => {
            tracing::error!("❌ Processing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
