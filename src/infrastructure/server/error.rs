use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Failures while bringing up or running the REST listener
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not bind the REST listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("the REST server stopped unexpectedly: {0}")]
    Serve(#[from] io::Error),
}
