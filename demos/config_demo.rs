//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use lockstep_diff::config::Config;
use lockstep_diff::differ::Side;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Lockstep Diff Configuration Demo ===\n");

    // Load or create default config
    let config = Config::load()?;
    let preview = &config.settings.preview;

    println!("Current settings:");
    println!("  Algorithm: {:?}", config.settings.algorithm);
    println!("  Margins: {} x {}", preview.x_margin, preview.y_margin);
    for side in [Side::Lhs, Side::Rhs] {
        let palette = preview.palette(side);
        println!(
            "  {:?} padding colour: {:?}",
            side,
            palette.padding.to_array()
        );
    }

    println!("\nConfig file: {}", Config::config_path()?.display());
    println!("You can modify the config file manually or use Config::save() to persist changes.");

    Ok(())
}
