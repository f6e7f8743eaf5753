//! Emit config-file and command-line snippets for a theme
//!
//! Loads a starting theme from a config file when one exists, otherwise
//! falls back to the default light preset, then prints both output
//! artifacts a user would paste into their setup.

use std::path::Path;
use std::process;

use theme_colors::{load_initial_theme, ThemeColor};

fn main() {
    let path = Path::new(".streamlit/config.toml");

    let theme = match load_initial_theme(path) {
        Ok(Some(theme)) => {
            eprintln!("Loaded theme from {}", path.display());
            theme
        }
        Ok(None) => ThemeColor::default_light(),
        Err(error) => {
            eprintln!("Error: {}", error.user_message());
            process::exit(1);
        }
    };

    println!("# Config file ({})", path.display());
    println!("{}", theme.to_config_toml());
    println!("# Command line");
    print!("{}", theme.to_cli_args("streamlit run app.py"));
}
