use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    readit::run().await
}
