//! Command-line front end: issues a single request and prints the decoded
//! JSON body.
//!
//! ```text,no_run
//! $ endpoint-client https://api.example.com /games -q page=2 -H "Accept: application/json"
//! {
//!   "count": 1,
//!   "results": [
//!     {
//!       "id": 1,
//!       "name": "Game"
//!     }
//!   ]
//! }
//! ```
//!
//! Set `RUST_LOG=endpoint_client=debug` to trace the request on stderr.

use anyhow::{Context, Result};
use clap::{App, Arg};
use endpoint_client::{ApiClient, ClientConfig, Endpoint, Method, ReqwestApiClient};
use reqwest::Url;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("endpoint-client")
        .version(VERSION)
        .about("Requests an endpoint and prints the decoded JSON response")
        .author("Brian Payne")
        .arg(
            Arg::with_name("BASE_URL")
                .required(true)
                .index(1)
                .help("The base URL, for example https://api.example.com"),
        )
        .arg(
            Arg::with_name("PATH")
                .required(true)
                .index(2)
                .help("The absolute path of the endpoint, replaces any path on the base URL"),
        )
        .arg(
            Arg::with_name("METHOD")
                .short("X")
                .long("method")
                .possible_values(&["GET", "POST", "PUT", "PATCH", "DELETE"])
                .default_value("GET")
                .help("The HTTP method"),
        )
        .arg(
            Arg::with_name("HEADER")
                .short("H")
                .long("header")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(is_valid_header)
                .help("A request header as NAME:VALUE, may be repeated"),
        )
        .arg(
            Arg::with_name("QUERY")
                .short("q")
                .long("query")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(is_valid_query)
                .help("A query parameter as KEY=VALUE, may be repeated"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Controls the use of certificate validation."),
        )
        .usage("endpoint-client [OPTIONS] <BASE_URL> <PATH>")
        .get_matches();

    let base_url = matches.value_of("BASE_URL").unwrap_or_default();
    let path = matches.value_of("PATH").unwrap_or_default();
    let method: Method = matches.value_of("METHOD").unwrap_or("GET").parse()?;
    let ignore_certificates = matches.is_present("ACCEPT_INVALID_CERT");

    let base_url =
        Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
    let mut endpoint = Endpoint::new(base_url, path, method);
    for header in matches.values_of("HEADER").into_iter().flatten() {
        if let Some((name, value)) = split_header(header) {
            endpoint = endpoint.with_header(name, value);
        }
    }
    for query in matches.values_of("QUERY").into_iter().flatten() {
        if let Some((key, value)) = query.split_once('=') {
            endpoint = endpoint.with_parameter(key, value);
        }
    }

    let client = ReqwestApiClient::<Endpoint>::create(ClientConfig::new(!ignore_certificates))?;
    let response: serde_json::Value = client
        .request(&endpoint)
        .await
        .with_context(|| format!("Error requesting {} {}", method, path))?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn split_header(header: &str) -> Option<(&str, &str)> {
    let (name, value) = header.split_once(':')?;
    Some((name.trim(), value.trim_start()))
}

fn is_valid_header(val: String) -> Result<(), String> {
    match split_header(&val) {
        Some((name, _)) if !name.is_empty() => Ok(()),
        _ => Err(String::from("Header must be given as NAME:VALUE")),
    }
}

fn is_valid_query(val: String) -> Result<(), String> {
    match val.split_once('=') {
        Some((key, _)) if !key.is_empty() => Ok(()),
        _ => Err(String::from("Query parameter must be given as KEY=VALUE")),
    }
}
