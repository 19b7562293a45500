//! Prints the method, URL and status of a GET.
//!
//! ```text
//! cargo run --example get -- https://httpbin.org/get
//! ```

use requests_core::Client;

fn main() -> Result<(), requests_core::Error> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/get".to_string());

    let client = Client::new();
    let resp = client.get(&url, Vec::new())?;
    println!("{} {} {}", resp.request.method, resp.request.url, resp.status.code);
    Ok(())
}
