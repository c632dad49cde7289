use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

use crate::config::StaticFilesConfig;
use crate::http::line::LineReader;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::resolve::{self, Resolved};

/// One client connection, driven as a state machine.
///
/// Each iteration in `AwaitingRequest` re-arms the read timeout, so a
/// keep-alive peer gets a fresh window for every request rather than one
/// deadline for the connection's lifetime.
pub struct Connection {
    reader: LineReader<OwnedReadHalf>,
    writer: ResponseWriter<OwnedWriteHalf>,
    config: StaticFilesConfig,
    state: ConnectionState,
}

pub enum ConnectionState {
    /// Waiting for the next request, bounded by the read timeout.
    AwaitingRequest,
    /// A response is ready; the bool is whether to keep the connection
    /// open after writing it.
    Responding(Response, bool),
    /// Terminal. The socket closes when the handler returns.
    Closing,
}

impl Connection {
    pub fn new(stream: TcpStream, config: StaticFilesConfig) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: LineReader::new(read_half),
            writer: ResponseWriter::new(write_half),
            config,
            state: ConnectionState::AwaitingRequest,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closing) {
                ConnectionState::AwaitingRequest => {
                    self.state = self.await_request().await;
                }

                ConnectionState::Responding(response, keep_alive) => {
                    self.writer.write(&response).await?;

                    self.state = if keep_alive {
                        // Go back for the next request on the same connection.
                        ConnectionState::AwaitingRequest
                    } else {
                        ConnectionState::Closing
                    };
                }

                ConnectionState::Closing => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Runs one timeout-bounded read of the next request and classifies
    /// the outcome.
    async fn await_request(&mut self) -> ConnectionState {
        self.reader.begin_request();

        let outcome = timeout(
            self.config.read_timeout(),
            parser::read_request(&mut self.reader),
        )
        .await;

        match outcome {
            // Timeout. Mid-request means the framing is lost: answer 400.
            // An idle connection closes silently.
            Err(_elapsed) => {
                if self.reader.bytes_received() {
                    tracing::debug!("read timed out mid-request");
                    ConnectionState::Responding(Response::bad_request(), false)
                } else {
                    tracing::debug!("read timed out on idle connection");
                    ConnectionState::Closing
                }
            }

            Ok(Ok(request)) => {
                let response = self.respond_to(&request).await;
                let keep_alive = request.keep_alive();
                ConnectionState::Responding(response, keep_alive)
            }

            // Peer close or transport failure: same silent-or-400 split as
            // a timeout.
            Ok(Err(err)) if err.is_transport() => {
                if self.reader.bytes_received() {
                    tracing::debug!(error = %err, "stream ended mid-request");
                    ConnectionState::Responding(Response::bad_request(), false)
                } else {
                    ConnectionState::Closing
                }
            }

            // Malformed request.
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "request rejected");
                ConnectionState::Responding(Response::bad_request(), false)
            }
        }
    }

    async fn respond_to(&self, request: &Request) -> Response {
        match resolve::resolve(&self.config.doc_root, &request.url).await {
            Resolved::Found { path, meta } => {
                tracing::info!(url = %request.url, path = %path.display(), "200");
                Response::ok(request, path, &meta)
            }
            Resolved::NotFound => {
                tracing::info!(url = %request.url, "404");
                Response::not_found(request)
            }
        }
    }
}
