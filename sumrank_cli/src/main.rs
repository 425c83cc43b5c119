use std::env;
use std::process;

use anyhow::Result;
use dotenvy::dotenv;
use getopts::Options;

use sumrank_cli::input::{parse_percentage, read_text, validate_text};
use sumrank_core::client::SummarizeClient;
use sumrank_core::helpers::dto::DEFAULT_PERCENTAGE;

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [OPTIONS]", program);
    print!("{}", opts.usage(&brief));
    println!("\nOptions:");
    println!("  -f, --file FILE        Read the text from FILE instead of stdin");
    println!("  -p, --percentage VAL   Summary length fraction, 0.1-0.9 in steps of 0.1");
    println!("  -h, --help             Show this help message");
    println!("\nEnvironment variables:");
    println!("  BACKEND_URL       Summarization service base URL (default http://localhost:8000)");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt(
        "f",
        "file",
        "Read the text from FILE instead of stdin",
        "FILE",
    );
    opts.optopt(
        "p",
        "percentage",
        "Summary length fraction, 0.1-0.9 in steps of 0.1",
        "VAL",
    );
    opts.optflag("h", "help", "Show this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Error parsing arguments: {}", f);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") || matches.opt_present("help") {
        print_usage(&program, opts);
        return Ok(());
    }

    let percentage = match matches.opt_str("p") {
        Some(raw) => match parse_percentage(&raw) {
            Ok(value) => value,
            Err(message) => {
                eprintln!("Error: {}", message);
                process::exit(1);
            }
        },
        None => DEFAULT_PERCENTAGE,
    };

    let text = read_text(matches.opt_str("f").as_deref())?;

    if let Err(message) = validate_text(&text) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    let client = SummarizeClient::from_env();

    match client.summarize(&text, percentage).await {
        Ok(summary) => {
            for sentence in summary {
                println!("{}", sentence);
            }
        }
        Err(e) => {
            log::error!("summarize request to {} failed: {}", client.base_url(), e);
            eprintln!("An error occurred while summarizing. Please try again.");
            process::exit(1);
        }
    }

    Ok(())
}
