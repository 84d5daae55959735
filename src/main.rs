use dispatchgen::{catalogue, driver::Generator};
use env_logger::Env;
use log::{debug, error, info, Level};
use std::{path::PathBuf, process};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dispatchgen",
    about = "Generates template dispatch fragments for the ARM and Thumb instruction handlers.",
    author
)]
struct CommandLine {
    /// The minimum level of debugging messages to print to the console.
    /// Options in increasing level of detail are: Error, Warn, Info, Debug,
    /// Trace.  Can be overridden by setting the RUST_LOG environment variable
    /// to one of the aforementioned values.
    #[structopt(short, long, default_value = "Warn")]
    log_level: Level,
    /// The directory whither to write the generated fragments.  The directory
    /// must already exist.
    #[structopt(short, long, default_value = "src/", parse(from_os_str))]
    output_dir: PathBuf,
    /// Compare the fragments on disk against freshly generated ones instead of
    /// writing them, failing if any is missing or out of date.
    #[structopt(long, conflicts_with = "list")]
    check: bool,
    /// Print every instruction family along with its number of clauses
    /// without writing anything.
    #[structopt(long)]
    list: bool,
}

fn main() {
    // Initialise logging and read command line arguments.
    let args = CommandLine::from_args();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.to_string())).init();
    info!("Launching dispatchgen from command line now.");
    debug!("Arguments: {:?}", args);

    let groups = match catalogue::groups() {
        Ok(groups) => groups,
        Err(e) => {
            error!("Invalid instruction family catalogue: {}", e);
            process::exit(1);
        }
    };

    if args.list {
        for group in &groups {
            println!("{:<36} {:>4} clauses  {}", group.output_name(), group.combination_count(), group);
        }
        return;
    }

    let generator = Generator::new(&args.output_dir);
    let outcome = if args.check {
        generator.check_all(&groups).map(|stale| {
            for output in &stale {
                error!("{} is missing or out of date", generator.output_dir().join(output).display());
            }
            stale.is_empty()
        })
    } else {
        generator.generate_all(&groups).map(|clauses| {
            info!(
                "Generated {} clauses across {} fragments in {}",
                clauses,
                groups.len(),
                generator.output_dir().display()
            );
            true
        })
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(failures) => {
            for failure in &failures {
                error!("Failed to process {}: {}", failure.output, failure.error);
            }
            process::exit(1);
        }
    }
}
