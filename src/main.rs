use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use hostwatch::app::App;
use hostwatch::config::{self, Config};
use hostwatch::report::MonitorReporter;
use hostwatch::report::logfile::LogSink;
use hostwatch::system::sampler::{SystemSampler, primary_mount};

#[derive(Parser)]
#[command(
    name = "hostwatch",
    about = "Periodic host resource monitor with a console display and a file log"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds between sampling cycles
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Log file path, opened in append mode
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    let interval = Duration::from_secs(config.monitor.effective_interval_secs());

    let sampler = SystemSampler::new(primary_mount());
    let info = sampler.system_info();

    let sink = LogSink::open(&config.monitor.log_file)?;
    let mut reporter = MonitorReporter::new(sink);
    reporter.log_startup(&info)?;

    let mut app = App::new(sampler, reporter, interval);
    app.run(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if let Some(secs) = cli.interval {
        config.monitor.interval_secs = secs;
    }
    if let Some(ref path) = cli.log {
        config.monitor.log_file = path.clone();
    }

    config
}
