use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use openpr::git::GitCli;
use openpr::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_LOOKUP: i32 = 1;
const EXIT_BROWSER: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "openpr")]
#[command(about = "Find pull request from given commit hash and open it in a Web browser.", long_about = None)]
#[command(version)]
struct Cli {
    /// Revision string of the target commit
    revision: String,

    /// Branch against which pull requests are merged (default: detect by remote HEAD if
    /// present, or use "master" otherwise)
    #[arg(short, long, value_name = "BRANCH")]
    base_branch: Option<String>,

    /// Remote name against which pull requests are created (default: origin)
    #[arg(short, long)]
    remote: Option<String>,

    /// Print pull request url instead of opening it
    #[arg(short, long)]
    print_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/openpr/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false).init();
}

fn fail(message: &str, code: i32) -> ! {
    eprintln!("{}", output::format_error(message, output::should_color_errors()));
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match openpr::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => fail(&format!("Config error: {:#}", e), EXIT_CONFIG),
    };

    let lookup = openpr::Lookup {
        revision: cli.revision,
        remote: config.remote(cli.remote),
        base_branch: config.base_branch(cli.base_branch),
    };
    log::debug!("{:?}", lookup);

    let link = match openpr::find_pull_request(&GitCli::current(), &lookup) {
        Ok(link) => link,
        Err(e) => fail(&e.to_string(), EXIT_LOOKUP),
    };

    if cli.print_only {
        println!("{}", link.url);
    } else {
        if let Err(e) = openpr::browser::open_url(&link.url) {
            fail(&format!("{:#}", e), EXIT_BROWSER);
        }
        println!("{}", output::format_opening(&link, output::should_use_colors()));
    }

    std::process::exit(EXIT_SUCCESS);
}
