// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};
use std::io::Read;
use std::path::Path;

use crate::check::{check_commits, check_message, CheckReport};
use crate::config::{example_config, Settings, DEFAULT_CONFIG_FILE};
use crate::error::{ConfigError, PolicyError, Result, ResultExt};
use crate::policy::{vocabulary, CommitType, LintConfig, RuleConfig, Severity};
use crate::render::render;

use super::args::{CheckIgnoreArgs, Cli, Commands, ExportArgs, InitArgs, OutputFormat, ShowArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // `init` and `version` run without loading the policy file
    match cli.effective_command() {
        Commands::Show(args) => run_show(&cli, &load_settings(&cli)?, args),
        Commands::Export(args) => run_export(&load_settings(&cli)?, args),
        Commands::Init(args) => run_init(args),
        Commands::CheckIgnore(args) => run_check_ignore(&cli, &load_settings(&cli)?, args),
        Commands::Version => run_version(),
    }
}

/// Load the effective policy and apply its output settings.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = if let Some(config_path) = &cli.config {
        Settings::load_from(config_path)?
    } else {
        Settings::load()?
    };

    if !settings.output.color {
        console::set_colors_enabled(false);
    }

    Ok(settings)
}

/// Run the show command.
fn run_show(cli: &Cli, settings: &Settings, args: ShowArgs) -> Result<()> {
    tracing::debug!("Running show command with args: {:?}", args);

    let policy = &settings.policy;

    if let Some(name) = args.rule {
        let rule = policy
            .rule(&name)
            .ok_or_else(|| ConfigError::UnknownRule { name: name.clone() })?;

        match cli.format {
            Some(OutputFormat::Json) => {
                let single: std::collections::BTreeMap<&str, &RuleConfig> =
                    [(name.as_str(), rule)].into();
                print_json(&single)?
            }
            _ => println!("{}", format_rule(&name, rule)),
        }
        return Ok(());
    }

    match cli.format {
        Some(OutputFormat::Json) => print_json(policy)?,
        _ => print_policy(settings),
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize policy")?;
    println!("{}", json);
    Ok(())
}

fn print_policy(settings: &Settings) {
    let policy = &settings.policy;

    match settings.source {
        Some(ref path) => println!("{} {}", style("source:").dim(), path.display()),
        None => println!("{} built-in policy", style("source:").dim()),
    }
    println!(
        "{} {}",
        style("parser preset:").dim(),
        style(&policy.parser_preset).cyan()
    );

    println!();
    println!("{}", style("Rules").bold());
    for (name, rule) in &policy.rules {
        println!("  {}", format_rule(name, rule));
    }

    println!();
    println!("{}", style("Ignores").bold());
    if policy.ignores.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for predicate in &policy.ignores {
        println!("  {} {}", style("•").dim(), predicate);
    }

    print_types(policy);
}

/// Describe the allowed types when the allowlist uses the standard ones.
fn print_types(policy: &LintConfig) {
    let Some(value) = policy
        .rule(vocabulary::TYPE_ENUM)
        .and_then(|rule| rule.value.as_ref())
    else {
        return;
    };

    println!();
    println!("{}", style("Types").bold());
    for tag in value.as_tags() {
        match tag.parse::<CommitType>() {
            Ok(commit_type) => println!(
                "  {} {}",
                style(format!("{:<10}", tag)).green(),
                style(commit_type.description()).dim()
            ),
            Err(()) => println!("  {}", style(tag).green()),
        }
    }
}

fn format_rule(name: &str, rule: &RuleConfig) -> String {
    let padded = format!("{:<7}", rule.severity.as_str());
    let severity = match rule.severity {
        Severity::Error => style(padded).red().bold(),
        Severity::Warning => style(padded).yellow().bold(),
        Severity::Off => style(padded).dim(),
    };

    let mut line = format!(
        "{:<22} {} {:<6}",
        name,
        severity,
        rule.applicability.as_str()
    );
    if let Some(ref value) = rule.value {
        line.push_str(&format!(" {}", value));
    }
    if !vocabulary::is_known_rule(name) {
        line.push_str(&format!(" {}", style("(unknown to commitlint)").yellow()));
    }
    line
}

/// Run the export command.
fn run_export(settings: &Settings, args: ExportArgs) -> Result<()> {
    tracing::debug!("Running export command with args: {:?}", args);

    let rendered = render(&settings.policy, args.target)?;

    match args.output {
        Some(path) => {
            ensure_writable(&path, args.force)?;
            std::fs::write(&path, rendered).context("write export")?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    ensure_writable(config_path, args.force)?;

    std::fs::write(config_path, example_config()).context("init")?;

    println!("✓ Created {}", DEFAULT_CONFIG_FILE);

    Ok(())
}

/// Refuse to clobber an existing file unless forced or confirmed.
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if Term::stderr().is_term() {
        let overwrite = dialoguer::Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if overwrite {
            return Ok(());
        }
        return Err(PolicyError::Cancelled);
    }

    Err(ConfigError::AlreadyExists {
        path: path.to_path_buf(),
    }
    .into())
}

/// Run the check-ignore command.
fn run_check_ignore(cli: &Cli, settings: &Settings, args: CheckIgnoreArgs) -> Result<()> {
    tracing::debug!("Running check-ignore command with args: {:?}", args);

    let policy = &settings.policy;

    let report = if let Some(ref message) = args.message {
        CheckReport {
            checks: vec![check_message(policy, message)],
        }
    } else if let Some(ref path) = args.file {
        let message = read_message_file(path)?;
        CheckReport {
            checks: vec![check_message(policy, &message)],
        }
    } else {
        check_commits(policy, &args.target)?
    };

    report.print(cli.format);
    if cli.format != Some(OutputFormat::Json) {
        eprintln!("{}", report.summary());
    }

    report.into_result()
}

fn read_message_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut message = String::new();
        std::io::stdin()
            .read_to_string(&mut message)
            .context("read message from stdin")?;
        return Ok(message);
    }

    std::fs::read_to_string(path).context(format!("read {}", path.display()))
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commitrc {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
