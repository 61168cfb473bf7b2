//! Request snippet command.

use anyhow::Result;
use clap::Args;
use quire_codegen::{generate_all, generate_snippet, CodeGenOptions, HttpMethod};

#[derive(Args)]
pub struct SnippetArgs {
    /// Target language: curl, javascript, python or go
    #[arg(short, long, default_value = "curl")]
    lang: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    method: HttpMethod,

    /// API base URL
    #[arg(short, long)]
    base_url: String,

    /// Endpoint path
    path: String,

    /// Request header as "Name: Value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Pre-serialized request body
    #[arg(short, long)]
    data: Option<String>,

    /// Print the snippet for every language
    #[arg(long)]
    all: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: Value\", got {:?}", raw))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

/// Run the snippet command.
pub fn run(args: SnippetArgs) -> Result<()> {
    let mut opts = CodeGenOptions::new(args.method, args.base_url, args.path);
    for (name, value) in args.headers {
        opts = opts.header(name, value);
    }
    opts.body = args.data;

    if args.all {
        for (lang, code) in generate_all(&opts) {
            println!("// {}\n{}\n", lang.label(), code);
        }
    } else {
        println!("{}", generate_snippet(&args.lang, &opts));
    }

    Ok(())
}
