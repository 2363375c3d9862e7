use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::debug;

use crate::config::Config;
use crate::http::mime::{ContentTypeOracle, ExtensionOracle};
use crate::http::parser::parse_request;
use crate::http::placeholder::Placeholders;
use crate::http::request::Request;
use crate::http::response::decide;
use crate::http::writer::{write_content, write_headers};

/// Read-only settings shared by every connection.
#[derive(Clone)]
pub struct Site {
    pub root: PathBuf,
    pub server_name: String,
    pub oracle: Arc<dyn ContentTypeOracle>,
}

impl Site {
    pub fn new(
        root: impl Into<PathBuf>,
        server_name: impl Into<String>,
        oracle: Arc<dyn ContentTypeOracle>,
    ) -> Self {
        Self {
            root: root.into(),
            server_name: server_name.into(),
            oracle,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.root.clone(), cfg.server_name.clone(), Arc::new(ExtensionOracle))
    }
}

pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    state: ConnectionState,
}

/// Lifecycle of one connection. States only move forward.
#[derive(Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Accepted,
    Parsing,
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::Accepted,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Handles the single request on this connection.
    ///
    /// Consumes the connection: the stream is closed when this returns,
    /// whether the response completed or a transport error cut it short.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted => {
                    self.state = ConnectionState::Parsing;
                }

                ConnectionState::Parsing => {
                    let request = {
                        let mut reader = BufReader::new(&mut self.stream);
                        parse_request(&mut reader).await
                    };
                    self.state = ConnectionState::Responding(request);
                }

                ConnectionState::Responding(request) => {
                    self.respond(&request).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    async fn respond(&mut self, request: &Request) -> anyhow::Result<()> {
        let target = request.locate(&self.site.root);
        let decision = decide(target.as_deref(), self.site.oracle.as_ref()).await;
        debug!(
            path = ?request.path,
            status = decision.status.as_u16(),
            content_type = %decision.content_type,
            "Responding"
        );

        {
            let mut out = BufWriter::new(&mut self.stream);
            write_headers(&mut out, &decision, &self.site.server_name).await?;
            write_content(&mut out, &decision, target.as_deref(), Placeholders::current).await?;
            out.flush().await?;
        }

        self.stream.shutdown().await?;
        Ok(())
    }
}
