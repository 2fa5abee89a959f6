#[tokio::main]
async fn main() {
    if let Err(e) = vaidya::run().await {
        eprintln!("vaidya: {e}");
        std::process::exit(1);
    }
}
