use std::io;

use tracing::{debug, info, warn};

use tno_logger::{LoggerConfig, critical, new_logger, with_color, with_log_level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Default logger: info level, no color
    let logger = new_logger([]);
    logger.in_scope(|| info!("application started"));

    // 2) Debug logger with color
    let logger = new_logger([with_log_level("debug"), with_color(true)]);
    logger.in_scope(|| debug!(component = "database", "connection established"));

    // 3) Production logger (warn level), installed process-wide
    let logger = new_logger([with_log_level("warn")]);
    logger.install()?;
    info!("suppressed below warn");

    let err = io::Error::other("connection reset");
    warn!(error = %err, "retrying failed operation");

    // 4) Concurrent emitters share the installed logger
    let workers: Vec<_> = (0..4)
        .map(|worker| {
            tokio::spawn(async move {
                warn!(worker, "worker saw a slow response");
            })
        })
        .collect();
    for worker in workers {
        worker.await?;
    }

    // 5) Config embedded in an application config, critical label only
    let cfg = LoggerConfig::default().with_level("critical").with_color(true);
    cfg.build().in_scope(|| critical!(device = "sda", "disk full"));

    warn!("still running after a critical record");
    Ok(())
}
