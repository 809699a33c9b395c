//! Playable console front end.
//!
//! Set `RACE21_SEED` to replay a session deterministically; otherwise the
//! seed comes from entropy. Logging is off by default, enable with e.g.
//! `RUST_LOG=race21=debug`.

use race21::session::Session;
use race21::table::ConsoleTable;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::var("RACE21_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    tracing::info!(seed, "starting session");

    let mut session = Session::new(ConsoleTable::new(), seed);
    if let Err(err) = session.run() {
        eprintln!("game aborted: {err}");
        std::process::exit(1);
    }
}
