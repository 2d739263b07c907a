use crate::err::{AppliesTo, IoErrorExt};
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

/// Accepts the next connection, retrying past errors that only concern the
/// connection being accepted. Listener-level errors are the caller's
/// problem.
pub async fn accept(listener: &TcpListener) -> Result<(TcpStream, SocketAddr), io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => match stream.set_nodelay(true) {
                Ok(()) => return Ok((stream, addr)),
                Err(e) => match e.applies_to() {
                    AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                    AppliesTo::Server => return Err(e),
                },
            },
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Server => return Err(e),
            },
        }
    }
}
