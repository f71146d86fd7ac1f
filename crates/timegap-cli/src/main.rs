//! Command-line front end for timegap: how much time until, or since, a
//! date.
//!
//! One date prints its offset from now ("in a day", "3 years ago"); adding
//! `--to` switches to the undirected distance between two dates. A date
//! expression may span several shell words, so everything is joined and
//! re-split before parsing.

use clap::Parser;
use timegap::Timegap;

/// Human-readable time offsets and distances between dates.
#[derive(Parser, Debug)]
#[command(name = "timegap", version, about, long_about = None)]
struct Cli {
    /// Date expression to describe relative to now.
    #[arg(value_name = "DATE", required_unless_present = "from")]
    date: Vec<String>,

    /// Date to measure from, usually in the past.
    #[arg(short, long, num_args = 1.., value_name = "DATE")]
    from: Vec<String>,

    /// Date to measure to; switches to the distance between the two dates.
    #[arg(short, long, num_args = 1.., value_name = "DATE")]
    to: Vec<String>,

    /// The single granularity to print.
    #[arg(
        short,
        long,
        default_value = "day",
        value_parser = ["second", "hour", "day", "week", "month", "year"],
    )]
    granularity: String,

    /// Print every granularity, one per line.
    #[arg(short, long)]
    long: bool,

    /// Print the whole result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let timegap = Timegap::new();

    let from = if cli.from.is_empty() { &cli.date } else { &cli.from };
    let result = if cli.to.is_empty() {
        timegap.offset_from_now(from)?
    } else {
        timegap.distance_between(from, &cli.to)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if cli.long {
        for frame in result.timeframes() {
            println!("{}", frame.phrase);
        }
    } else {
        match result.timeframe(&cli.granularity) {
            Some(frame) => println!("{}", frame.phrase),
            None => println!("Invalid granularity [{}], try [day] instead", cli.granularity),
        }
    }

    Ok(())
}
