//! Command-line interface for theme_colors
//!
//! Basic CLI tool for exercising scheme generation, contrast checks, and
//! hex/HLS conversion without a front-end.

use std::{env, process};

use theme_colors::{
    contrast_ratio, generate_color_scheme, parse_hex, rgb_to_hls, SchemeGenerator, ThemeColor,
    WcagLevel,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help(&args[0]);
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => {
            let theme = match parse_seed(&args[2..]) {
                Ok(Some(seed)) => SchemeGenerator::from_seed(seed).generate(),
                Ok(None) => generate_color_scheme(),
                Err(msg) => {
                    eprintln!("Error: {}", msg);
                    process::exit(1);
                }
            };
            print_theme(&theme);
        }
        "contrast" => {
            if args.len() != 4 {
                eprintln!("Usage: {} contrast <hex> <hex>", args[0]);
                process::exit(1);
            }
            let a = parse_or_exit(&args[2]);
            let b = parse_or_exit(&args[3]);
            let ratio = contrast_ratio(a, b);
            println!("{:.2}:1 ({})", ratio, WcagLevel::classify(ratio));
        }
        "convert" => {
            if args.len() != 3 {
                eprintln!("Usage: {} convert <hex>", args[0]);
                process::exit(1);
            }
            let color = parse_or_exit(&args[2]);
            let hls = rgb_to_hls(color);
            println!("{}  H {}°  L {}%  S {}%", color, hls.h, hls.l, hls.s);
        }
        "--help" | "-h" => {
            print_help(&args[0]);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    }
}

fn parse_seed(args: &[String]) -> Result<Option<u64>, String> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--seed" => value
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid seed {:?}", value)),
        _ => Err("expected: generate [--seed N]".to_string()),
    }
}

fn parse_or_exit(hex: &str) -> theme_colors::Rgb {
    match parse_hex(hex) {
        Ok(color) => color,
        Err(error) => {
            eprintln!("Error: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_theme(theme: &ThemeColor) {
    for pair in theme.contrast_report() {
        println!("{:<30} {:.2}:1 ({})", pair.label, pair.ratio, pair.level);
    }
    println!();
    print!("{}", theme.to_config_toml());
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <command> [args]", program_name);
    eprintln!();
    eprintln!("Explore color themes from the command line.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate [--seed N]     Generate a random color scheme");
    eprintln!("  contrast <hex> <hex>    WCAG contrast ratio between two colors");
    eprintln!("  convert <hex>           Show the HLS slider values for a color");
    eprintln!("  --help, -h              Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} generate --seed 42", program_name);
    eprintln!("  {} contrast \"#31333f\" \"#ffffff\"", program_name);
    eprintln!("  {} convert \"#ff4b4b\"", program_name);
}
