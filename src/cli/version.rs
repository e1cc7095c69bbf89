//! `--version` output.

/// Version read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("hrbuddie {}", VERSION)
}

/// Print the version and exit.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}
