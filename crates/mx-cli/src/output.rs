//! Terminal output shared by the subcommands. With `--json` the human
//! chatter on stderr is silenced and only the stdout JSON remains.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

static JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(on: bool) {
    JSON.store(on, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

fn human(line: &str) {
    if !is_json() {
        eprintln!("{line}");
    }
}

pub fn success(msg: &str) {
    human(&msg.green().to_string());
}

pub fn warn(msg: &str) {
    human(&msg.yellow().to_string());
}

pub fn info(msg: &str) {
    human(msg);
}

pub fn label(key: &str, val: &str) {
    human(&format!("{} {val}", format!("{key}:").bold()));
}

/// Machine-readable result. Always goes to stdout, JSON mode or not.
pub fn json_output(value: serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(&value).unwrap());
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap()
        .tick_strings(&["·  ", "·· ", "···", " ··", "  ·", "   "]);
    let pb = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
