//! specflow: ejecuta las suites de aprendizaje y reporta los resultados.
//!
//! Códigos de salida: 0 si todos los ejemplos pasan, 1 si alguno falla o da
//! error, 2 si la suite o la configuración están mal formadas.
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use specflow_rust::config::{ReportFormat, RunnerConfig};
use specflow_rust::errors::AppError;
use specflow_rust::runner;

#[derive(Parser, Debug)]
#[command(name = "specflow", version, about = "Runner de especificaciones por ejemplos", long_about = None)]
struct Args {
    /// Formato del reporte
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Directorio de fixtures (por defecto SPECFLOW_FIXTURE_DIR o `fixtures`)
    #[arg(long)]
    fixture_dir: Option<PathBuf>,

    /// Filtro de log por defecto; RUST_LOG tiene prioridad
    #[arg(long)]
    log: Option<String>,

    /// Lista los ejemplos sin ejecutarlos
    #[arg(short, long)]
    list: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match RunnerConfig::from_env() {
        Ok(cfg) => cfg.with_overrides(args.fixture_dir, args.format, args.log),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();
    runner::install_panic_hook();
    debug!("config: {config:?}");

    match run(&config, args.list) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(config: &RunnerConfig, list_only: bool) -> Result<bool, AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if list_only {
        runner::list_examples(config, &mut out)?;
        return Ok(true);
    }
    let report = runner::execute(config, &mut out)?;
    Ok(report.is_success())
}
