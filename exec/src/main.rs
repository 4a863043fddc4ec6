// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate bnet;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate serde_yaml;
extern crate env_logger;
#[macro_use]
extern crate clap;
extern crate prettytable;
extern crate itertools;
extern crate rayon;
extern crate time;

use std::path::Path;

use bnet::prelude::*;
use errors::*;
use helper::*;

mod errors;
mod input;
mod helper;
mod commands;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);
        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut timer = Timer::start();

    let app_m = clap_app!(bnet =>
        (about: "Exact inference over boolean Bayesian networks by variable elimination")
        (@arg network: -n +required +takes_value "network file (yaml or json)")
        (@arg settings: -c +takes_value "settings file")
        (@subcommand show =>
            (about: "Print the conditional probability table of every node")
        )
        (@subcommand query =>
            (about: "Compute P(query | evidence)")
            (@arg query: -q +required +takes_value "query variables, e.g: Fraud or a,b")
            (@arg evidence: -e +takes_value "evidence, e.g: FP=true,IP=false")
            (@arg order: -o +takes_value "elimination order of the hidden variables, e.g: Trav,OC. [default: order of appearance]")
            (@arg brute_force: -b "use brute-force enumeration instead of variable elimination")
            (@arg plain: -p "print one line per entry instead of a table")
        )
        (@subcommand batch =>
            (about: "Answer a list of queries in parallel")
            (@arg query_file: -f +required +takes_value "yaml file with a list of queries")
        )
    ).get_matches();

    let settings = match app_m.value_of("settings") {
        Some(fsettings) => Settings::from_file(Path::new(fsettings))
            .chain_err(|| format!("Cannot load settings from {}", fsettings))?,
        None => Settings::default()
    };
    debug!("Current settings: {:?}", settings);

    let fnetwork = app_m.value_of("network").ok_or("Missing network file")?;
    let network = BayesNetwork::from_file(Path::new(fnetwork))
        .chain_err(|| format!("Cannot load network from {}", fnetwork))?;
    info!("Loaded network '{}' with {} nodes", network.name(), network.nodes().len());

    match app_m.subcommand() {
        ("show", Some(_)) => {
            commands::show(&network, &settings)?;
        },
        ("query", Some(sub_m)) => {
            let query_args = QueryArgs {
                query: parse_variables(sub_m.value_of("query").unwrap_or("")),
                evidence: parse_evidence(sub_m.value_of("evidence").unwrap_or(""))?,
                order: sub_m.value_of("order").map(parse_variables),
                brute_force: sub_m.is_present("brute_force"),
            };
            let result = commands::run_query(&network.factors()?, &settings, &query_args)?;
            if sub_m.is_present("plain") {
                print!("{}", result.display(&settings.display));
            } else {
                commands::print_factor(&query_args.describe(), &result, &settings);
            }
        },
        ("batch", Some(sub_m)) => {
            let fqueries = sub_m.value_of("query_file").ok_or("Missing query file")?;
            let batch = input::BatchInput::from_file(Path::new(fqueries))?;
            commands::run_batch(&network, &settings, &batch)?;
        },
        _ => bail!("No subcommand provided")
    }

    timer.lap_and_report("Finish the program");
    Ok(())
}
