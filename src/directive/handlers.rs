//! Directive handlers
//!
//! Every handler attempts all of its targets, reports each one and returns
//! the AND of the per-target results. Skipped targets count as success.

use anyhow::Result;
use brewkit::{Action, PackageKind};
use std::collections::HashSet;

use super::Context;
use super::data::InstallData;
use super::options::Options;

/// `install-brew`: run the upstream installer unless brew is present.
pub(super) fn install_brew(ctx: &Context, data: InstallData, options: &Options) -> Result<bool> {
    let install = match data {
        InstallData::Flag(install) => install,
        InstallData::Options => options.install,
    };

    if !install {
        ctx.reporter.info("Skipping Homebrew installation");
        return Ok(true);
    }

    if ctx.brew.brew_exists(options.force_intel)? && !options.force {
        ctx.reporter.info("Homebrew is already installed");
        return Ok(true);
    }

    ctx.reporter.info("Installing Homebrew");
    let installer = ctx.brew.install_script(options.force_intel)?;
    if ctx.brew.run(&[installer], &options.streams, ctx.base_directory)? == 0 {
        ctx.reporter.info("Homebrew installed");
        Ok(true)
    } else {
        ctx.reporter.error("Error installing Homebrew");
        Ok(false)
    }
}

/// `brew` and `cask`: install what is missing, reinstall on `force`.
pub(super) fn packages(
    ctx: &Context,
    kind: PackageKind,
    names: &[String],
    options: &Options,
) -> Result<bool> {
    let mut installed: HashSet<String> = if names.is_empty() {
        HashSet::new()
    } else {
        ctx.brew
            .list_installed(kind, options.force_intel)?
            .into_iter()
            .collect()
    };

    let mut all_success = true;
    for name in names {
        let action = if !installed.contains(name) {
            ctx.reporter.info(&format!("Installing {name}"));
            Action::Install(kind, name.clone())
        } else if options.force {
            ctx.reporter.info(&format!("Reinstalling {name}"));
            Action::Reinstall(kind, name.clone())
        } else {
            ctx.reporter.info(&format!("{name} is already installed"));
            continue;
        };

        if run_action(ctx, &action, options)? {
            ctx.reporter.info(&format!("{name} installed"));
            installed.insert(name.clone());
        } else {
            ctx.reporter.error(&format!("Error installing {name}"));
            all_success = false;
        }
    }

    let noun = match kind {
        PackageKind::Formula => "packages",
        PackageKind::Cask => "casks",
    };
    if all_success {
        ctx.reporter
            .info(&format!("All {noun} installed successfully"));
    } else {
        ctx.reporter.error(&format!("Some {noun} failed to install"));
    }

    Ok(all_success)
}

/// `tap`: tap every entry, no installed-state check.
pub(super) fn taps(ctx: &Context, taps: &[String], options: &Options) -> Result<bool> {
    let mut all_success = true;
    for tap in taps {
        ctx.reporter.info(&format!("Tapping {tap}"));
        if run_action(ctx, &Action::Tap(tap.clone()), options)? {
            ctx.reporter.info(&format!("{tap} tapped"));
        } else {
            ctx.reporter.error(&format!("Error tapping {tap}"));
            all_success = false;
        }
    }

    if all_success {
        ctx.reporter.info("All taps were successful");
    } else {
        ctx.reporter.error("Some taps failed");
    }

    Ok(all_success)
}

/// `brewfile`: `brew bundle` every file, relative to the base directory.
pub(super) fn brewfiles(ctx: &Context, brewfiles: &[String], options: &Options) -> Result<bool> {
    let mut all_success = true;
    for brewfile in brewfiles {
        ctx.reporter
            .info(&format!("Installing packages and casks from {brewfile}"));
        if run_action(ctx, &Action::Bundle(brewfile.clone()), options)? {
            ctx.reporter
                .info(&format!("Installed packages and casks from {brewfile}"));
        } else {
            ctx.reporter
                .error(&format!("Error installing packages and casks from {brewfile}"));
            all_success = false;
        }
    }

    if all_success {
        ctx.reporter.info("All Brewfiles were successful");
    } else {
        ctx.reporter.error("Some Brewfiles failed");
    }

    Ok(all_success)
}

fn run_action(ctx: &Context, action: &Action, options: &Options) -> Result<bool> {
    let invocation = ctx.brew.invocation(action, options.force_intel)?;
    Ok(ctx.brew.run(&[invocation], &options.streams, ctx.base_directory)? == 0)
}
