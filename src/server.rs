use crate::handler;
use crate::resolve::ServedRoot;
use crate::tcp;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
use std::sync::Arc;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::Semaphore;

static ACTIVE: AtomicUsize = AtomicUsize::new(0);

/// Backpressure policy for the accept loop. `None` spawns a task per
/// connection with no cap.
#[derive(Clone, Copy, Debug, Default)]
pub struct Limits {
    pub max_connections: Option<usize>,
}

pub struct Server {
    listener: TcpListener,
    root: Arc<ServedRoot>,
    limit: Option<Arc<Semaphore>>,
}

impl Server {
    /// Binds the listening socket. `addr` may be a `host:port` pair that
    /// needs resolving, so `localhost` works.
    pub async fn bind(
        addr: impl ToSocketAddrs,
        root: ServedRoot,
        limits: Limits,
    ) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            root: Arc::new(root),
            limit: limits
                .max_connections
                .map(|n| Arc::new(Semaphore::new(n))),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one task per connection. Only
    /// listener-level failures end the loop; everything scoped to a single
    /// connection is logged and dropped.
    pub async fn serve(self) -> Result<(), io::Error> {
        loop {
            let permit = match &self.limit {
                Some(semaphore) => Arc::clone(semaphore).acquire_owned().await.ok(),
                None => None,
            };

            let (stream, peer) = tcp::accept(&self.listener).await?;

            let root = Arc::clone(&self.root);
            log::debug!("Spawning ({} active)", ACTIVE.fetch_add(1, Relaxed) + 1);
            tokio::spawn(async move {
                handler::handle(stream, peer, &root).await;
                log::debug!("Closing ({} active)", ACTIVE.fetch_sub(1, Relaxed) - 1);
                drop(permit);
            });
        }
    }
}
