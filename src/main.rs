use std::env;
use std::process::exit;

use getopts::Options;
#[allow(unused_imports)]
use log::{debug, error, info, LevelFilter, trace, warn};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use chainparams::blockchain::pow::bundled_hasher;
use chainparams::blockchain::{PowHasher, Sha256dHasher};
use chainparams::{to_hex, Context, PowAlgo, Settings, LOG_TARGET_MAIN, SETTINGS_FILENAME};

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "Print this help menu");
    opts.optflag("v", "verbose", "Show more debug messages");
    opts.optflag("d", "debug", "Show trace messages, more than debug");
    opts.optflag("j", "json", "Print all parameters of the network as JSON and exit");
    opts.optflag("m", "mine", "Mine a new genesis block for the network");
    opts.optopt("c", "config", "Path to config file", "FILE");
    opts.optopt("n", "chain", "Network to use: main, test, testnet4, signet or regtest", "NAME");

    let opt_matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}", f);
            exit(1);
        }
    };

    if opt_matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
        return;
    }

    let mut level = LevelFilter::Info;
    if opt_matches.opt_present("v") {
        level = LevelFilter::Debug;
    }
    if opt_matches.opt_present("d") {
        level = LevelFilter::Trace;
    }
    let config_name = match opt_matches.opt_str("c") {
        None => { SETTINGS_FILENAME.to_owned() }
        Some(path) => { path }
    };
    setup_logger(level);
    info!(target: LOG_TARGET_MAIN, "Starting chainparams {}", env!("CARGO_PKG_VERSION"));

    let mut settings = match Settings::load(&config_name) {
        Ok(settings) => settings,
        Err(e) => {
            error!(target: LOG_TARGET_MAIN, "Error loading {}: {}", &config_name, e);
            exit(1);
        }
    };
    if let Some(chain) = opt_matches.opt_str("n") {
        settings.chain = chain;
    }
    debug!(target: LOG_TARGET_MAIN, "Loaded settings: {:?}", &settings);

    let context = match Context::new(env!("CARGO_PKG_VERSION").to_owned(), settings) {
        Ok(context) => context,
        Err(e) => {
            error!(target: LOG_TARGET_MAIN, "{}", e);
            exit(1);
        }
    };

    if opt_matches.opt_present("j") {
        match serde_json::to_string_pretty(context.get_params()) {
            Ok(json) => println!("{}", json),
            Err(e) => error!(target: LOG_TARGET_MAIN, "Error serializing params: {}", e)
        }
        return;
    }

    let params = context.get_params();
    info!(target: LOG_TARGET_MAIN, "Network: {}", params.chain_type);
    info!(target: LOG_TARGET_MAIN, "Genesis hash: {}", params.genesis_hash());
    info!(target: LOG_TARGET_MAIN, "Merkle root: {}", params.genesis.merkle_root());
    info!(target: LOG_TARGET_MAIN, "Message start: {}, default port {}", to_hex(&params.message_start), params.default_port);
    info!(target: LOG_TARGET_MAIN, "Average block interval: {} seconds", params.avg_target_spacing(0));

    if opt_matches.opt_present("m") {
        mine_genesis(&context);
    }
}

fn setup_logger(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Unable to initialize logger!\n{}", e);
    }
}

fn mine_genesis(context: &Context) {
    let params = context.get_params();
    let mut genesis = params.genesis_params.clone();
    let hasher: Box<dyn PowHasher> = match bundled_hasher(genesis.core_algo) {
        Some(hasher) => hasher,
        None => {
            warn!(target: LOG_TARGET_MAIN, "No {} hasher available, mining with {} instead", genesis.core_algo, PowAlgo::Sha256d);
            genesis.core_algo = PowAlgo::Sha256d;
            Box::new(Sha256dHasher)
        }
    };

    let miner = context.miner();
    match miner.mine(&genesis, hasher.as_ref(), &params.consensus.pow_limit_neoscrypt) {
        Ok(mined) => {
            info!(target: LOG_TARGET_MAIN, "Mined genesis block in {} attempts", mined.attempts);
            println!("time: {}", mined.time);
            println!("nonce: {}", mined.nonce);
            println!("hash: {}", mined.hash);
            println!("merkle root: {}", mined.merkle_root);
            println!("pow hash: {}", mined.pow_hash);
        }
        Err(e) => {
            error!(target: LOG_TARGET_MAIN, "{}", e);
            exit(1);
        }
    }
}
