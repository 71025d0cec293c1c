//! Recurring scheduled runs of the full pipeline.

use std::sync::Arc;

use scout_core::AppConfig;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::pipeline;

/// Registers the pipeline on the configured cron schedule and blocks until
/// a shutdown signal arrives.
///
/// A failing run is logged and does not stop the schedule; the next firing
/// starts fresh.
pub(crate) async fn run_scheduled(config: AppConfig) -> anyhow::Result<()> {
    let config = Arc::new(config);
    let mut scheduler = JobScheduler::new().await?;

    let job_config = Arc::clone(&config);
    let job = Job::new_async(config.schedule_cron.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&job_config);
        Box::pin(async move {
            tracing::info!("scheduler: starting scout run");
            match pipeline::run_pipeline(&config).await {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "scheduler: scout run complete");
                }
                Err(e) => {
                    tracing::error!(error = %e, "scheduler: scout run failed");
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(cron = %config.schedule_cron, "scheduler started; press ctrl-c to stop");

    shutdown_signal().await;
    scheduler.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install signal handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping scheduler");
}
