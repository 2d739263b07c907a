use crate::err::{AppliesTo, IoErrorExt};
use crate::listing;
use crate::request;
use crate::resolve::{self, ResolvedTarget, ServedRoot};
use crate::response::{HttpResponse, Status};
use std::net::SocketAddr;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Serves a single request then closes the connection: read, parse,
/// resolve, respond. Nothing that goes wrong in here outlives this one
/// connection.
pub async fn handle(mut stream: TcpStream, peer: SocketAddr, root: &ServedRoot) {
    let request = match request::read_request(&mut stream).await {
        Ok(request) => request,
        Err(e) => {
            // unparseable requests get no response, just a hangup
            log::debug!("{} -> [unparseable request] {}", peer, e);
            return;
        }
    };

    let response = respond_to(&request.path, root).await;

    match response.status {
        Status::Ok => log::info!("200 {} from {}", request.path, peer),
        Status::NotFound => log::warn!("404 {} from {}", request.path, peer),
    }

    if let Err(e) = stream.write_all(&response.to_bytes()).await {
        match e.applies_to() {
            AppliesTo::Connection => log::debug!("{} -> [write failed] {}", peer, e),
            AppliesTo::Server => log::error!("{} -> [write failed] {}", peer, e),
        }
    }
    // dropping the stream closes it: one request per connection
}

async fn respond_to(url_path: &str, root: &ServedRoot) -> HttpResponse {
    match resolve::resolve(url_path, root).await {
        ResolvedTarget::Missing => HttpResponse::not_found(),
        ResolvedTarget::Directory { entries, .. } => {
            let display_name = listing::display_name(url_path);
            HttpResponse::directory(listing::render(&display_name, &entries))
        }
        ResolvedTarget::File { path, .. } => match fs::read(&path).await {
            Ok(bytes) => HttpResponse::file(bytes, url_path),
            // the target disappeared between stat and read
            Err(_) => HttpResponse::not_found(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn served_root(dir: &tempfile::TempDir) -> ServedRoot {
        ServedRoot::new(dir.path()).expect("served root")
    }

    #[tokio::test]
    async fn files_come_back_with_their_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        std_fs::write(dir.path().join("page.html"), "<p>hi</p>").expect("write");

        let response = respond_to("/page.html", &served_root(&dir)).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/html");
        assert_eq!(response.body, b"<p>hi</p>");
    }

    #[tokio::test]
    async fn directories_come_back_as_listings() {
        let dir = tempfile::tempdir().expect("tempdir");
        std_fs::create_dir(dir.path().join("docs")).expect("mkdir");
        std_fs::write(dir.path().join("docs/a.txt"), "12345").expect("write");

        let response = respond_to("/docs", &served_root(&dir)).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/html");
        let html = String::from_utf8(response.body).expect("utf-8 page");
        assert!(html.contains("href=\"/docs/a.txt\""));
        assert!(html.contains("5.00B"));
    }

    #[tokio::test]
    async fn misses_come_back_as_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");

        let response = respond_to("/nothing-here", &served_root(&dir)).await;
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.content_type, "text/html; charset=UTF-8");
    }
}
