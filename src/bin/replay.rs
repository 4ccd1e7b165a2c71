// Replay CLI: re-run the decision engine over a recorded JSONL debug log
// and report where the current engine disagrees with the recorded moves.
//
// Usage: replay <debug_log.jsonl> [--verbose]

use std::env;
use std::process;

use fieldsnake::config::Config;
use fieldsnake::replay::ReplayEngine;

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <debug_log.jsonl> [--verbose]", args[0]);
        process::exit(2);
    }

    let log_path = &args[1];
    let verbose = args.iter().any(|a| a == "--verbose");

    let config = Config::load_or_default();
    let engine = ReplayEngine::new(config, verbose);

    match engine.replay_log_file(log_path) {
        Ok(stats) => {
            println!(
                "Replayed {} turns: {} matches, {} mismatches ({:.1}% agreement)",
                stats.total_turns,
                stats.matches,
                stats.mismatches,
                stats.match_rate * 100.0
            );
            if stats.mismatches > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Replay failed: {}", e);
            process::exit(2);
        }
    }
}
