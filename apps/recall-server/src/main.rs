#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recall_server::run().await
}
