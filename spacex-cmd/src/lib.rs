//! Command implementations for the launch dashboard CLI.
//!
//! Every command loads the launch CSV once, up front; a missing or
//! malformed file ends the command with an error before any output.

use anyhow::Context;
use clap::Subcommand;
use spacex_db::Database;
use std::path::{Path, PathBuf};

pub mod report;
pub mod serve;

#[derive(Subcommand)]
pub enum Command {
    /// Print launch and success totals per site
    Summary {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,
    },

    /// Print the success pie chart for a site selection as JSON
    Pie {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,

        /// Launch site name, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,
    },

    /// Print the payload scatter chart for a site selection and payload range as JSON
    Scatter {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,

        /// Launch site name, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lower payload bound in kg (defaults to the smallest payload)
        #[arg(long)]
        low: Option<f64>,

        /// Upper payload bound in kg (defaults to the largest payload)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Serve the chart handlers as JSON and, optionally, a built dashboard bundle
    Serve {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: PathBuf,

        /// Directory produced by `dx build` for dash-launch-records
        #[arg(short = 'd', long)]
        dist: Option<PathBuf>,

        /// Address to listen on
        #[arg(short = 'a', long, default_value = "127.0.0.1:8050")]
        addr: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv } => {
            let db = load_database(&csv)?;
            print!("{}", report::summary_table(&db)?);
            Ok(())
        }
        Command::Pie { csv, site } => {
            let db = load_database(&csv)?;
            println!("{}", report::pie_json(&db, &site)?);
            Ok(())
        }
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => {
            let db = load_database(&csv)?;
            println!("{}", report::scatter_json(&db, &site, low, high)?);
            Ok(())
        }
        Command::Serve { csv, dist, addr } => {
            let db = load_database(&csv)?;
            serve::run_server(db, dist, &addr).await
        }
    }
}

/// Read and load the launch CSV at `path`.
pub fn load_database(path: &Path) -> anyhow::Result<Database> {
    let csv_data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read launch CSV {}", path.display()))?;
    let db = Database::from_csv(&csv_data)
        .with_context(|| format!("failed to load launch CSV {}", path.display()))?;
    log::info!(
        "Loaded {} launch records from {}",
        db.query_launch_count()?,
        path.display()
    );
    Ok(db)
}
