//! Standalone mock CEC HAL binary
//!
//! Serves the same router as `cec-harness mock`; useful when the harness
//! and the device stand-in should run as separate processes.

use cec_harness::mock;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let port: u16 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5000);

    let addr = format!("127.0.0.1:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Mock CEC HAL listening at http://{}", addr);
    if let Err(e) = mock::serve(listener).await {
        eprintln!("Mock CEC HAL stopped: {}", e);
        std::process::exit(1);
    }
}
