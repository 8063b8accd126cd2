use clap::Parser;
use tracing_subscriber::EnvFilter;
use xml_form_renderer::cli::commands::{cmd_fill, cmd_sample, cmd_show};
use xml_form_renderer::cli::config::{Cli, Commands, load_config, log_filter, resolve_format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // RUST_LOG > -v flags > config > default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose, &config)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Show { source, format } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_show(&source, &format)?;
        }
        Commands::Fill {
            source,
            script,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            let submitted = cmd_fill(&source, &script, &format, output.as_deref(), cli.verbose)?;
            if !submitted {
                std::process::exit(1);
            }
        }
        Commands::Sample => cmd_sample(),
    }

    Ok(())
}
