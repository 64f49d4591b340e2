use std::env;

use regform::run_cli;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    run_cli(args).await;
}
