use axum::{routing::post, Extension, Router};
use book_catalogue::api::handlers::{
    handle_get_book_by_id, handle_get_books, handle_get_genres, handle_get_stats, handle_health,
    handle_root,
};
use book_catalogue::catalogue::store::Catalogue;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut data_path = PathBuf::from("data/books.csv");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <books.csv>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8000 --data data/books.csv", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Load the catalogue. Fatal if the file is missing or a row is bad;
    // the process must not serve without it.
    tracing::info!("Loading catalogue from {}", data_path.display());
    let catalogue = Arc::new(Catalogue::load(&data_path)?);
    tracing::info!(
        "Catalogue initialized with {} books, {} genres",
        catalogue.len(),
        catalogue.all_genres().len()
    );

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", post(handle_root))
        .route("/health", post(handle_health))
        .route("/api/v1/books", post(handle_get_books))
        .route("/api/v1/books/by-id", post(handle_get_book_by_id))
        .route("/api/v1/genres", post(handle_get_genres))
        .route("/api/v1/stats", post(handle_get_stats))
        .layer(Extension(catalogue));

    // 3. Serve:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
