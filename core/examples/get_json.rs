//! Decodes a JSON object from a GET and prints it.
//!
//! ```text
//! RUST_LOG=debug cargo run --example get_json -- https://httpbin.org/get
//! ```

use std::collections::HashMap;
use std::process::ExitCode;

use requests_core::{with_header, Client};

fn main() -> ExitCode {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/get".to_string());

    match run(&url) {
        Ok(value) => {
            println!("{value:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{url}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(url: &str) -> Result<HashMap<String, serde_json::Value>, Box<dyn std::error::Error>> {
    let client = Client::new();
    let mut resp = client.get(url, vec![with_header("Accept", "application/json")])?;
    if !resp.is_success() {
        return Err(format!("expected 2xx, got {}", resp.status).into());
    }
    Ok(resp.json()?)
}
