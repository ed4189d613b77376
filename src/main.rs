//! Interactive console front end for the extraction engine.
//!
//! Prompts for one URL at a time, normalizes the scheme, runs the pipeline
//! and prints the report. Every pipeline error is caught here and the loop
//! keeps prompting; `exit` (or EOF) terminates.

use std::io::{self, BufRead, Write};

use tracing::error;

use shopscrape::rules::SITE_RULES;
use shopscrape::{normalize_url, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("shopscrape=debug,info")
        .with_target(false)
        .init();

    let sites: Vec<&str> = SITE_RULES.iter().map(|rule| rule.name).collect();
    println!("Welcome to the Interactive Product Scraper!");
    println!(
        "Configured site patterns: {} (plus a generic fallback for static pages).",
        sites.join(", ")
    );

    let stdin = io::stdin();
    loop {
        print!("\nEnter the URL to scrape (or type 'exit' to quit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("failed to read input: {e}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        let url = normalize_url(input);
        println!("\nAttempting to fetch: {url}");
        match run(&url) {
            Ok(report) => println!("{report}"),
            Err(e) => error!("{e}"),
        }
    }

    println!("\nExiting the scraper. Goodbye!");
}
