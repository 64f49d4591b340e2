#[cfg(feature = "cli")]
#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    regform::run_cli(args).await;
}

#[cfg(not(feature = "cli"))]
fn main() {
    println!("CLI feature is not enabled.");
}
