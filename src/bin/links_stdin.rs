//! Reads HTML from stdin and prints the link report as JSON on stdout.
//!
//! Set `BASE_URL` in the environment to resolve relative hrefs against a
//! known page URL:
//!
//! ```sh
//! BASE_URL=https://example.com/news curl -s https://example.com/news | links_stdin
//! ```

use std::io::{self, Read};

use linkharvest::{extract_links_report, Options};

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read HTML from stdin");
        std::process::exit(1);
    }

    let options = Options {
        base_url: std::env::var("BASE_URL").ok(),
        ..Options::default()
    };

    let report = extract_links_report(&html, &options);
    println!("{}", serde_json::to_string(&report).unwrap_or_default());
}
