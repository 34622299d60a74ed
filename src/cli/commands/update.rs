//! Update command: one-shot index pass, optionally followed by watch mode.

use crate::config::Settings;
use crate::index::{CATEGORIES, update_all};
use crate::watcher::IndexWatcher;

/// Run the update pass over all targets, then optionally keep watching.
pub fn run(config: &Settings, watch: bool) {
    let categories: Vec<String> = CATEGORIES.iter().map(|c| format!("{}/", c.dir)).collect();
    println!("metadex starting");
    println!("Categories: {}", categories.join(", "));
    println!("Index targets: {}", config.targets.join(", "));

    update_all(config).log();

    if watch {
        let watcher = match IndexWatcher::new(config.clone()) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Failed to start watcher: {e}");
                std::process::exit(1);
            }
        };

        if let Err(e) = watcher.watch() {
            eprintln!("Watcher stopped: {e}");
            std::process::exit(1);
        }
    } else {
        println!("Single pass complete. Run with --watch to keep indexes current.");
    }
}
