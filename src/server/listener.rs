use crate::config::Config;
use crate::http::connection::Connection;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    validate_doc_root(cfg)?;

    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("binding to {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Accept failed, continuing");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let static_config = cfg.static_files.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, static_config);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

/// The document root must exist and be a directory; startup fails hard
/// otherwise.
fn validate_doc_root(cfg: &Config) -> anyhow::Result<()> {
    let root = &cfg.static_files.doc_root;
    let meta = std::fs::metadata(root)
        .with_context(|| format!("document root {:?} does not exist", root))?;
    anyhow::ensure!(meta.is_dir(), "document root {:?} is not a directory", root);
    Ok(())
}
