use sliding_average::{
    config::DemoConfig,
    error::AverageError,
    logging::{init_json_logging, init_logging},
    report::Report,
};
use std::io::Write;
use tracing::info;

const ENV_CONFIG_PATH: &str = "SLIDING_AVERAGE_CONFIG";
const ENV_LOG_JSON: &str = "SLIDING_AVERAGE_LOG_JSON";

fn main() -> Result<(), AverageError> {
    match std::env::var_os(ENV_LOG_JSON) {
        Some(_) => init_json_logging(),
        None => init_logging(),
    }

    let config = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) => {
            info!(%path, "loading demo config");
            DemoConfig::load(path)?
        }
        Err(_) => DemoConfig::default(),
    };

    let report = Report::new(config.precision);
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    let comparison = report.write_demo(&mut sink, &config)?;
    writeln!(sink)?;
    report.summary_table(&comparison).print(&mut sink)?;
    sink.flush()?;

    Ok(())
}
