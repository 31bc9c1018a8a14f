#[tokio::main]
async fn main() {
    if let Err(e) = eventsync::run().await {
        eprintln!("eventsync failed to start: {}", e);
        std::process::exit(1);
    }
}
