use clap::Parser;
use log::{error, info};
use namecert::cli::RenderArgs;
use namecert::{
    names, CertificateRenderer, Cli, Commands, ConsoleReporter, RenderConfig, Result,
};
use std::path::Path;

/// How many names to echo before starting a batch
const NAME_PREVIEW: usize = 5;

fn main() {
    if let Err(e) = run() {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging initialisieren
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Generate {
            csv,
            column,
            render,
        } => {
            info!("Starting batch generation");
            generate(&csv, &column, render)?;
        }

        Commands::Single { name, render } => {
            info!("Generating single certificate");
            let renderer = CertificateRenderer::new(render.resolve()?)?;
            let path = renderer.render_one(&name)?;
            println!("✓ Certificate created: {}", path.display());
        }

        Commands::Example { output } => {
            info!("Generating example configuration");
            generate_example(&output)?;
            println!("✓ Example file created: {}", output.display());
        }
    }

    Ok(())
}

fn generate(csv: &Path, column: &str, render: RenderArgs) -> Result<()> {
    let config = render.resolve()?;

    println!("Current directory: {}", std::env::current_dir()?.display());
    println!();
    println!("Checking files:");
    println!("Template exists: {}", config.template_path.exists());
    println!("Font exists: {}", config.font_path.exists());
    println!("CSV exists: {}", csv.exists());

    println!();
    println!("Reading names from {}...", csv.display());
    println!("CSV columns: {:?}", names::csv_columns(csv)?);
    let names = names::read_names_from_csv(csv, column)?;

    if names.is_empty() {
        println!("No names found in the CSV file.");
        return Ok(());
    }

    let preview: Vec<&String> = names.iter().take(NAME_PREVIEW).collect();
    println!("Found {} names: {:?}...", names.len(), preview);

    println!();
    println!("Creating certificate renderer...");
    let renderer = CertificateRenderer::new(config)?;

    let result = renderer.render_batch_with(&names, &mut ConsoleReporter::stdout());
    info!(
        "Batch finished: {} of {} certificates written",
        result.successful,
        result.total()
    );

    Ok(())
}

fn generate_example(output: &Path) -> Result<()> {
    let example = RenderConfig::new("template.png", "GreatVibes-Regular.ttf");
    std::fs::write(output, example.to_json_pretty()?)?;
    Ok(())
}
