//! Picks a random activity from the config, or prints every activity's chance of being picked
use activity_picker::{Configuration, Picker};
use clap::Parser;
use std::error::Error;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file with the list of activities
    #[arg(short, long, default_value = "activities.json")]
    config: String,

    /// Print activities' probabilities of being picked instead of picking one
    #[arg(short, long)]
    weights: bool,

    /// Activities to leave out
    #[arg(short('x'), long, value_delimiter = ',')]
    exclude: Vec<String>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn format_weight(name: &str, weight: f64) -> String {
    format!("{}: {:.1}%", name, weight * 100.0)
}

fn output_lines(args: &Args) -> Result<Vec<String>, Box<dyn Error>> {
    let config = Configuration::from_file(&args.config)?;
    let picker = Picker::with_blacklist(&config, &args.exclude)?;
    if args.weights {
        Ok(picker
            .weights_by_name()
            .into_iter()
            .map(|(name, weight)| format_weight(name, weight))
            .collect())
    } else {
        Ok(vec![picker.pick().to_string()])
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    for line in output_lines(args)? {
        println!("{}", line);
    }
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
