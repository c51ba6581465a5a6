use clap::Parser;
use log::error;

use glimmer::Config;

fn main() {
    if let Err(e) = glimmer::run(Config::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
