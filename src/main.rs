use std::io;
use std::process;

use log::error;

use native_hello::{CNative, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    if let Err(err) = run(&CNative, &mut stdout.lock()) {
        error!("{:#}", err);
        process::exit(1);
    }
}
