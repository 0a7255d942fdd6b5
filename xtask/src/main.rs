//! Build automation tasks for the wifi-news project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for wifi-news", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: cross-build lib, run host tests, build the demo, generate docs
    CheckAll,
    /// Cross-build the library for a microcontroller target
    Build {
        #[arg(long, default_value = "cortex-m0")]
        target: Target,
        /// Build without defmt logging
        #[arg(long)]
        no_defmt: bool,
    },
    /// Run the terminal scrolling demo
    Demo {
        /// Text to scroll
        text: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Target {
    CortexM0,
    CortexM33,
    Riscv,
}

impl Target {
    const fn triple(self) -> &'static str {
        match self {
            Self::CortexM0 => "thumbv6m-none-eabi",
            Self::CortexM33 => "thumbv8m.main-none-eabihf",
            Self::Riscv => "riscv32imac-unknown-none-elf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { target, no_defmt } => build_lib(target, !no_defmt),
        Commands::Demo { text } => run_demo(text.as_deref()),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    for target in [Target::CortexM0, Target::CortexM33] {
        println!(
            "{}",
            format!("==> Building library for {}...", target.triple()).cyan()
        );
        if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
            "build",
            "--lib",
            "--target",
            target.triple(),
            "--features",
            "defmt",
        ])) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Running host tests...".cyan());
    let mut test_cmd = Command::new("cargo");
    test_cmd.current_dir(&workspace_root).arg("test");
    if let Some(target) = host_target() {
        println!(
            "  {}",
            format!("Using host target: {target}").bright_black()
        );
        test_cmd.arg("--target").arg(target);
    } else {
        println!(
            "{}",
            "  Unable to detect host target; relying on cargo default.".bright_black()
        );
    }
    if !run_command(&mut test_cmd) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building demo...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--example",
        "console_scroll",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--no-deps",
        "--target",
        Target::CortexM0.triple(),
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(target: Target, defmt: bool) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!(
            "Building library for {} ({})",
            target.triple(),
            if defmt { "defmt" } else { "no logging" }
        )
        .cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["build", "--lib", "--target", target.triple()]);
    if defmt {
        cmd.args(["--features", "defmt"]);
    }

    if run_command(&mut cmd) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_demo(text: Option<&str>) -> ExitCode {
    let workspace_root = workspace_root();
    let mut cmd = Command::new("cargo");
    cmd.current_dir(&workspace_root)
        .args(["run", "--example", "console_scroll"]);
    if let Some(text) = text {
        cmd.args(["--", text]);
    }

    if run_command(&mut cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
