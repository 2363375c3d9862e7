use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, Site};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}, serving {}", cfg.listen_addr, cfg.root.display());

    serve(listener, Arc::new(Site::from_config(cfg))).await
}

/// Accepts connections forever, one spawned task per connection.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, site).run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            info!("Closed connection from {}", peer);
        });
    }
}
