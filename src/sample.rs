//! Picks from a config many times and compares how often each activity came up with its weight
use activity_picker::pick_tester::{max_deviation, sample_frequencies, DEFAULT_PASSES};
use activity_picker::{Configuration, Picker};
use clap::Parser;
use std::error::Error;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[arg(short, long, default_value_t = DEFAULT_PASSES)]
    passes: usize,
    #[arg(short('x'), long, value_delimiter = ',')]
    exclude: Vec<String>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = Configuration::from_file(&args.config_file)?;
    let picker = Picker::with_blacklist(&config, &args.exclude)?;

    let start = Instant::now();
    let frequencies = sample_frequencies(&picker, args.passes, &mut rand::thread_rng());
    let elapsed = start.elapsed();

    println!("Activity\tExpected\tObserved");
    for frequency in frequencies.iter() {
        println!(
            "{}\t{:>5.1}%\t{:>5.1}%",
            frequency.name,
            frequency.expected * 100.0,
            frequency.observed * 100.0
        );
    }
    println!("---");
    println!(
        "{} picks in {:.2} seconds, max deviation {:.3}",
        args.passes,
        elapsed.as_secs_f64(),
        max_deviation(&frequencies)
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
