use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::domain::QuoteBreakdown;

#[derive(Parser)]
#[command(name = "quotedesk-core")]
#[command(about = "QuoteDesk - project quotes and order confirmation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Database management commands
    #[command(subcommand)]
    Db(DbCommands),

    /// Configuration validation
    Config,

    /// Price a brief without storing it
    Quote(QuoteArgs),
}

#[derive(Subcommand)]
pub enum DbCommands {
    /// Apply the orders schema
    Migrate,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Raw project type key (website, software, it_solution, consultation, ...)
    #[arg(short, long)]
    pub project_type: String,

    /// Project description
    #[arg(short, long)]
    pub description: String,

    /// Desired timeline; mentioning "urgent" adds the rush fee
    #[arg(short, long)]
    pub timeline: Option<String>,
}

pub async fn handle_db_migrate(config: &Config) -> anyhow::Result<()> {
    let options = crate::db::connect_options(config)?;

    tracing::info!("Running database migrations...");
    crate::db::run_migrations(&options).await?;

    println!("✓ Database migrations completed");
    Ok(())
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    crate::db::connect_options(config)?;

    println!("Configuration:");
    println!("  Bind Address: {}", config.bind_address());
    println!("  Database URL: {}", config.database_url);
    println!("  Log Format: {:?}", config.log_format);
    println!("  Run Migrations: {}", config.run_migrations);

    println!("✓ Configuration is valid");
    Ok(())
}

pub fn handle_quote(args: &QuoteArgs) -> anyhow::Result<()> {
    let rendered = render_quote(args);
    println!("{}", rendered);
    Ok(())
}

fn render_quote(args: &QuoteArgs) -> String {
    let breakdown =
        QuoteBreakdown::calculate(&args.project_type, &args.description, args.timeline.as_deref());

    format!(
        "Base price:  ${}\nComplexity:  {:?} (x{}%)\nRush fee:    ${}\nQuote:       ${}",
        breakdown.base_price,
        breakdown.complexity,
        breakdown.complexity.percent(),
        breakdown.rush_fee,
        breakdown.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_quote_subcommand() {
        let cli = Cli::try_parse_from([
            "quotedesk-core",
            "quote",
            "--project-type",
            "software",
            "--description",
            "ERP integration",
            "--timeline",
            "urgent",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Quote(args)) => {
                assert_eq!(args.project_type, "software");
                assert_eq!(args.timeline.as_deref(), Some("urgent"));
                assert!(render_quote(&args).ends_with("Quote:       $16500"));
            }
            _ => panic!("expected quote subcommand"),
        }
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["quotedesk-core"]).unwrap();
        assert!(cli.command.is_none());
    }
}
