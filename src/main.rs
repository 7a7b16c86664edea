#[tokio::main]
async fn main() {
    restaurant_backend::run().await;
}
