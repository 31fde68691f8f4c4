//! claude-pattern-audit - Post-edit pattern auditor for Claude Code
//!
//! Scans the edited file against fixed regex rule tables and prints a
//! severity-categorized report to stderr. Always exits 0; the check is
//! informational and never fails the invoking process.
//!
//! # Usage
//!
//! ```bash
//! # As a Claude Code PostToolUse hook (path from the environment)
//! CLAUDE_FILE_PATH=src/app.ts claude-pattern-audit
//!
//! # Or with the hook JSON on stdin
//! echo '{"tool_name":"Edit","tool_input":{"file_path":"src/app.ts"}}' | claude-pattern-audit
//! ```

use std::env;
use std::io::{self, BufRead};
use std::path::Path;

use claude_pattern_audit::{
    auditor::PatternAuditor,
    config::Config,
    input,
    report,
    runlog::RunLogger,
};

/// Print version information
fn print_version() {
    println!("claude-pattern-audit {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"claude-pattern-audit - Post-edit pattern auditor for Claude Code

USAGE:
    claude-pattern-audit [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file

ENVIRONMENT:
    CLAUDE_FILE_PATH           Path of the edited file to audit
    PATTERN_AUDIT_DISABLED=1   Skip all checks

The report goes to stderr and the exit code is always 0: findings are
advisory and never block the edit.

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PostToolUse": [{{
          "type": "command",
          "command": "~/.claude/pattern-audit/claude-pattern-audit",
          "tools": ["Edit", "Write"]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// Resolve the target file: environment variable first, then hook JSON
/// from stdin. No target means nothing to audit.
fn resolve_target() -> Option<String> {
    if let Some(path) = input::target_from_env() {
        return Some(path);
    }

    let stdin = io::stdin();
    let mut input_json = String::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => input_json.push_str(&line),
            Err(_) => break,
        }
    }

    input::target_from_hook_json(&input_json)
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Disabled via environment: nothing to do, still exit 0
    if input::is_disabled() {
        return;
    }

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    if !config.general.enabled {
        return;
    }

    // No target or missing file: exit silently, nothing to audit
    let target = match resolve_target() {
        Some(target) => target,
        None => return,
    };

    let path = Path::new(&target);
    if !path.exists() {
        return;
    }

    // Run the audit
    let auditor = PatternAuditor::new(config.clone());
    let result = auditor.audit_file(path);

    // Log the run
    let log_path = config.run_log_path();
    let mut logger = RunLogger::new(log_path.as_deref());
    if let Err(e) = logger.log_run(&target, &result) {
        eprintln!("Warning: Failed to write run log: {}", e);
    }

    // Report findings to stderr; the advisory line marks critical results
    if !result.issues.is_empty() {
        eprintln!("{}", report::format_report(&target, &result.issues));
    }

    if !result.passed {
        eprintln!("{}", report::advisory_line());
    }

    // Exit code is always 0: findings never block the edit
}
