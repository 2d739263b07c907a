use quickserve::err::DisplayError;
use quickserve::resolve::ServedRoot;
use quickserve::server::{Limits, Server};

mod opt;

#[tokio::main]
async fn main() -> Result<(), DisplayError> {
    let opt::Options {
        verbose,
        address,
        port,
        max_connections,
        root,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let root = ServedRoot::new(&root)?;
    log::info!("Serving {}", root.as_path().display());

    let server = Server::bind((address.as_str(), port), root, Limits { max_connections }).await?;
    log::info!("Listening on {}", server.local_addr()?);

    server.serve().await?;

    Ok(())
}
