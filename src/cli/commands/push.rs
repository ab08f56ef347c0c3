//! push command - Push repository state to a remote
//!
//! # Design
//!
//! The handler layers configuration (flags over local over project over
//! global), wires the result into a [`PushTask`], and either prints the
//! resolved plan (`--dry-run`) or executes the push over the libgit2
//! transport. Dry-run performs no transport call and no prompting.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::auth::{self, TerminalPrompt};
use crate::cli::Context;
use crate::config::Config;
use crate::git::Git;
use crate::task::credentials::{self, CredentialsHandle};
use crate::task::{PushTask, DEFAULT_REMOTE};
use crate::transport::{self, Libgit2Transport, PushRequest, Transport};
use crate::ui::{self, Verbosity};

/// Arguments to the push command.
#[derive(Debug, Default)]
pub struct PushArgs {
    /// Remote from `--remote`.
    pub remote: Option<String>,
    /// `--tags` flag.
    pub push_tags: bool,
    /// `--all` flag.
    pub push_all: bool,
    /// `--force` flag.
    pub force: bool,
    /// Username from `--username`.
    pub username: Option<String>,
    /// Password from `--password`.
    pub password: Option<String>,
    /// `--dry-run` flag.
    pub dry_run: bool,
    /// `--json` flag (dry-run only).
    pub json: bool,
}

/// Run the push command.
pub fn push(ctx: &Context, args: PushArgs) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let cwd = match &ctx.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let git = Git::open(&cwd).context("failed to open repository")?;

    let config =
        Config::load(git.workdir(), Some(git.git_dir())).context("failed to load configuration")?;

    // Flags beat config; config beats TTY detection.
    let interactive = ctx
        .interactive
        .or_else(|| config.interactive())
        .unwrap_or_else(|| std::io::stdin().is_terminal());

    let remote_name = args
        .remote
        .clone()
        .or_else(|| config.remote())
        .unwrap_or_else(|| DEFAULT_REMOTE.to_string());

    let mut task = PushTask::new();
    task.set_remote(remote_name.clone());
    task.set_push_tags(args.push_tags || config.push_tags());
    task.set_push_all(args.push_all || config.push_all());
    task.set_force(args.force || config.force());

    if let Some(credentials) = config.credentials() {
        task.credentials(|c| {
            c.username = credentials.username.clone();
            c.password = credentials.password.clone();
        });
    }
    if let Some(username) = args.username {
        task.credentials(|c| c.username = Some(username));
    }
    if let Some(password) = args.password {
        task.credentials(|c| c.password = Some(password));
    }

    if args.dry_run {
        let request = task.resolve().context("failed to resolve push configuration")?;
        let current_branch = if request.push_all {
            String::new()
        } else {
            git.current_branch()
                .context("failed to determine current branch")?
        };
        let plan = PushPlan::new(&request, &current_branch);

        // The plan is the command's product; it prints even under --quiet.
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            println!("{}", plan.render());
        }
        return Ok(());
    }

    // Non-interactive with no explicit credentials: the only remaining
    // source is the environment, which is worth flagging before a long
    // transport call fails on authentication.
    if !interactive && credentials::resolve(task.stored_credentials()) == CredentialsHandle::Interactive
    {
        ui::output::warn(
            format!(
                "no explicit credentials configured; if '{}' requires authentication, set {} and {}",
                remote_name,
                auth::USERNAME_ENV,
                auth::PASSWORD_ENV
            ),
            verbosity,
        );
    }

    let prompt = Arc::new(TerminalPrompt::new(interactive));
    let transport = Libgit2Transport::new(git, prompt);
    ui::output::debug(
        format!("pushing to '{}' via {} transport", remote_name, transport.name()),
        verbosity,
    );
    task.run(&transport)?;

    ui::output::success(format!("Pushed to {}.", remote_name), verbosity);
    Ok(())
}

/// Resolved push plan for dry-run output.
#[derive(Debug, Serialize)]
pub struct PushPlan {
    /// Destination remote name.
    remote: String,
    /// Exact refspecs the transport would send.
    refspecs: Vec<String>,
    /// Whether non-fast-forward updates are allowed.
    force: bool,
    /// Credential strategy label; never the secret values.
    credentials: &'static str,
}

impl PushPlan {
    /// Build a plan from a resolved request.
    fn new(request: &PushRequest, current_branch: &str) -> Self {
        Self {
            remote: request.remote.clone(),
            refspecs: transport::refspecs(request, current_branch),
            force: request.force,
            credentials: request.credentials.strategy(),
        }
    }

    /// Human-readable rendering for terminal output.
    fn render(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(out, "push plan");
        let _ = writeln!(out, "  remote:      {}", self.remote);
        for (i, spec) in self.refspecs.iter().enumerate() {
            if i == 0 {
                let _ = writeln!(out, "  refspecs:    {}", spec);
            } else {
                let _ = writeln!(out, "               {}", spec);
            }
        }
        let _ = writeln!(out, "  force:       {}", self.force);
        let _ = write!(out, "  credentials: {}", self.credentials);
        out
    }
}
