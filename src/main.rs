use lc3dis::cli::{self, Args, Command, Source};
use lc3dis::config::Config;
use lc3dis::disassembler::{BlankLines, Disassembler};
use lc3dis::Error;
use log::debug;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lc3dis");

    if let Err(e) = run(program, args.get(1..).unwrap_or(&[])) {
        eprintln!("{}: {}", program, e);
        if e.is_usage() {
            eprintln!("Usage: {} {}", program, cli::USAGE);
            eprintln!("Type '{} -h' for help", program);
        }
        std::process::exit(1);
    }
}

fn run(program: &str, args: &[String]) -> Result<(), Error> {
    let args = match Args::parse(args)? {
        Command::Help => {
            print!("{}", cli::help(program));
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let options = args.output_options(&config);
    debug!("Output options: {:?}", options);

    let mut disassembler = Disassembler::new(options);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.source {
        Source::Stdin => {
            debug!("Reading words from standard input");
            let stdin = io::stdin();
            disassembler.run(stdin.lock(), &mut out, BlankLines::Stop)?;
        }
        Source::File(path) => {
            debug!("Reading words from {}", path.display());
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            disassembler.run(BufReader::new(file), &mut out, BlankLines::Skip)?;
        }
    }

    Ok(())
}
