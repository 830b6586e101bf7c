use bamghoster::cli::{Args, SAFETY_WARNING};
use bamghoster::commands::ghost;
use bamghoster::config::Config;
use clap::Parser;
use env_logger::Env;

fn init_log(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_log(args.verbose);

    eprintln!("{}", SAFETY_WARNING);

    if let Err(e) = args.validate() {
        e.exit();
    }

    let result = Config::load().and_then(|config| ghost::run(&args.ghost_options(&config)));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
