mod config;
mod export;
mod report;

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use report::models::{find_project, PROJECTS};
use report::ReportService;

#[derive(Parser, Debug)]
#[command(name = "cvcrm-reservas", version, about = "Relatório de reservas CVCRM")]
struct Cli {
    /// Empreendimento id (see --list)
    #[arg(short, long)]
    project: Option<u32>,

    /// Report month (1-12)
    #[arg(short, long)]
    month: Option<u32>,

    /// Report year
    #[arg(short, long)]
    year: Option<i32>,

    /// Print the known empreendimentos and exit
    #[arg(long)]
    list: bool,

    /// Print the normalized rows as JSON instead of writing a spreadsheet
    #[arg(long)]
    json: bool,

    /// Output path (defaults to reservas_<id>_<MM>_<YYYY>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list {
        for project in PROJECTS {
            println!("{:>3}  {}", project.id, project.nome);
        }
        return Ok(());
    }

    let (Some(project_id), Some(month), Some(year)) = (cli.project, cli.month, cli.year) else {
        bail!("--project, --month and --year are required (or use --list)");
    };

    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12");
    }

    let Some(project) = find_project(project_id) else {
        bail!("unknown empreendimento id {project_id}; use --list to see the catalog");
    };

    let cfg = Config::from_env()?;
    let service = ReportService::new(cfg);

    let rows = service.generate(project.id, month, year).await?;

    if rows.is_empty() {
        warn!(project = project.nome, month, year, "No reservations found for the period");
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\n==============================");
    println!("{}: {} reservas", project.nome, rows.len());
    println!("==============================\n");

    for row in &rows {
        println!(
            "{}  {}",
            row.unidade.as_deref().unwrap_or("-"),
            row.cliente.as_deref().unwrap_or("-"),
        );
    }

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(export::xlsx::report_filename(project.id, month, year)));

    let bytes = export::xlsx::to_spreadsheet(&rows)?;
    tokio::fs::write(&path, &bytes).await?;

    info!(path = %path.display(), rows = rows.len(), "Report written");

    Ok(())
}
