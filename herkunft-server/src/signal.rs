use std::future;

#[cfg(target_family = "unix")]
use tokio::signal::unix::{self, SignalKind};

#[cfg(target_family = "unix")]
async fn unix_signal(kind: SignalKind) {
    match unix::signal(kind) {
        Ok(mut signal) => {
            signal.recv().await;
        }
        Err(error) => {
            error!(?error, ?kind, "failed to install signal handler");
            future::pending::<()>().await;
        }
    }
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(?error, "failed to listen for ctrl-c");
        future::pending::<()>().await;
    }
}

/// Resolves once the process is asked to shut down
pub async fn shutdown() {
    #[cfg(target_family = "unix")]
    let second_signal = async {
        tokio::select! {
            () = unix_signal(SignalKind::terminate()) => (),
            () = unix_signal(SignalKind::quit()) => (),
        }
    };
    #[cfg(not(target_family = "unix"))]
    let second_signal = future::pending::<()>();

    tokio::select! {
        () = ctrl_c() => (),
        () = second_signal => (),
    }

    info!("shutdown signal received");
}
