use anyhow::Result;
use brewkit::{Client, Prefix};
use colored::Colorize;

use crate::Context;
use crate::ui;

struct Issue {
    summary: String,
    fix: Option<String>,
    fix_cmd: Option<String>,
}

/// Everything doctor found, before printing.
struct Report {
    rows: Vec<(&'static str, String)>,
    issues: Vec<Issue>,
}

pub fn run(ctx: &Context) -> Result<()> {
    let client = Client::new();
    let report = inspect(&client);

    ui::header("Homebrew");
    for (key, value) in &report.rows {
        ui::kv(key, value);
    }

    println!();
    if report.issues.is_empty() {
        if !ctx.quiet {
            ui::success("Homebrew is ready");
        }
        return Ok(());
    }

    for issue in &report.issues {
        ui::warn(&issue.summary);
        if let Some(fix) = &issue.fix {
            println!("      {} {}", "Fix:".cyan(), fix);
        }
        if let Some(cmd) = &issue.fix_cmd {
            println!("      {} {}", "$".dimmed(), cmd.bold());
        }
    }

    Ok(())
}

fn inspect(client: &Client) -> Report {
    let host = client.host();
    let mut rows = vec![
        ("system", host.sysname.clone()),
        ("machine", host.machine.clone()),
    ];
    let mut issues = Vec::new();

    let native = match client.prefix(false, true) {
        Ok(prefix) => prefix,
        Err(e) => {
            issues.push(Issue {
                summary: e.to_string(),
                fix: Some("Homebrew runs on macOS and Linux only".to_string()),
                fix_cmd: None,
            });
            return Report { rows, issues };
        }
    };

    let installed = prefix_row(client, &mut rows, "brew", &native, false);
    if !installed {
        issues.push(Issue {
            summary: format!("Homebrew not found at {}", native.as_path().display()),
            fix: Some("Add `- install-brew: true` to your config, or run the installer".to_string()),
            fix_cmd: client.install_script(false).ok().map(|inv| inv.to_string()),
        });
    }

    if host.is_apple_silicon()
        && let Ok(intel) = client.prefix(true, true)
    {
        prefix_row(client, &mut rows, "brew (force-intel)", &intel, true);
    }

    Report { rows, issues }
}

fn prefix_row(
    client: &Client,
    rows: &mut Vec<(&'static str, String)>,
    key: &'static str,
    prefix: &Prefix,
    force_intel: bool,
) -> bool {
    let installed = client.brew_exists(force_intel).unwrap_or(false);
    rows.push((key, format!("{prefix} (installed: {})", ui::yes_no(installed))));
    installed
}
