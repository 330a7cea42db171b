mod debug_report;

use std::io::{self, IsTerminal, Read};

use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use voxtract::{
    Context, Error, Locale, NumberOptions, Resolution, extract_datetime_verbose, extract_duration,
    extract_number_spans, normalize,
};

#[derive(Parser)]
#[command(name = "voxtract", version)]
#[command(about = "Pull numbers, durations and date/times out of short English utterances")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Locale of the input text.
    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    /// Force ANSI color output.
    #[arg(long, global = true, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log extraction steps (overridden by VOXTRACT_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// First number in the text.
    Number(NumberArgs),
    /// Every number in the text.
    Numbers(NumberArgs),
    /// Sum of the duration phrases in the text.
    Duration {
        /// fixed, calendar, seconds, minutes, hours or days.
        #[arg(long, default_value = "fixed")]
        resolution: Resolution,
        text: Vec<String>,
    },
    /// Moment named by the text.
    Datetime {
        /// YYYY-MM-DDTHH:MM:SS or plain English ("yesterday 5pm"). Default: now.
        #[arg(long, value_parser = parse_reference)]
        reference: Option<NaiveDateTime>,
        /// Skip contraction and number-word normalization.
        #[arg(long)]
        raw: bool,
        text: Vec<String>,
    },
    /// Expand contractions and number words.
    Normalize {
        #[arg(long)]
        keep_articles: bool,
        text: Vec<String>,
    },
}

#[derive(Args)]
struct NumberArgs {
    /// Read ordinal words as ranks instead of fractions.
    #[arg(long)]
    ordinals: bool,
    /// Long scale: billion = 10^12.
    #[arg(long)]
    long_scale: bool,
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("VOXTRACT_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();

    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
    let report = debug_report::Report::new(color);

    if let Err(err) = run(cli.command, cli.locale, &report) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

fn run(command: Command, locale: Locale, report: &debug_report::Report) -> Result<(), String> {
    match command {
        Command::Number(args) => {
            let input = read_input(args.text)?;
            let matches = extract_number_spans(&input, &number_options(args.ordinals, args.long_scale, locale));
            report.numbers(&input, &matches[..matches.len().min(1)]);
        }
        Command::Numbers(args) => {
            let input = read_input(args.text)?;
            let matches = extract_number_spans(&input, &number_options(args.ordinals, args.long_scale, locale));
            report.numbers(&input, &matches);
        }
        Command::Duration { resolution, text } => {
            let input = read_input(text)?;
            let (value, leftover) = extract_duration(&input, resolution).map_err(|err| err.to_string())?;
            report.duration(&input, resolution, &value, &leftover);
        }
        Command::Datetime { reference, raw, text } => {
            let input = read_input(text)?;
            let reference_time = reference.unwrap_or_else(|| Local::now().naive_local());
            let context = Context { reference_time, locale };
            let text = if raw { input.clone() } else { normalize(&input, true) };
            let details = extract_datetime_verbose(&text, &context);
            report.datetime(&input, &context, &details);
        }
        Command::Normalize { keep_articles, text } => {
            let input = read_input(text)?;
            report.normalized(&input, &normalize(&input, !keep_articles));
        }
    }
    Ok(())
}

fn number_options(ordinals: bool, long_scale: bool, locale: Locale) -> NumberOptions {
    NumberOptions { ordinals, short_scale: !long_scale, locale }
}

/// Joined positional words, or stdin when there are none.
fn read_input(words: Vec<String>) -> Result<String, String> {
    let input = if words.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|err| format!("failed to read stdin: {err}"))?;
        buffer
    } else {
        words.join(" ")
    };
    if input.trim().is_empty() {
        return Err("no input provided".to_string());
    }
    Ok(input)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, Error> {
    if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(t);
    }
    chrono_english::parse_date_string(value, Local::now(), chrono_english::Dialect::Us)
        .map(|t| t.naive_local())
        .map_err(|err| Error::InvalidReference(format!("{value} ({err})")))
}
