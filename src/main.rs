// Interactive Star Wars character search client
//
// Connects to the search server, prompts for character names, and
// streams the paginated results back to the terminal. The server
// address comes from the first argument, then the SWSEARCH_SERVER
// environment variable, then the built-in default.

use anyhow::Result;

use swsearch::{SearchClient, TcpConfig, TcpTransport, console};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SWSEARCH_SERVER").ok())
        .map_or_else(TcpConfig::default, TcpConfig::from);

    log::debug!("swsearch {} connecting to {}", swsearch::VERSION, config.addr);

    console::banner();

    let transport = TcpTransport::new(config);
    let mut client = SearchClient::new(transport);
    client.run().await?;

    // The pending blocking stdin read would otherwise hold runtime
    // shutdown until the next line of input.
    std::process::exit(0)
}
