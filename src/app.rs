use crate::changeset::build_change_set;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::console::{self, RunOutcome};
use crate::model::AppError;
use crate::rewriter::TitleRewriter;
use crate::standards::StandardTable;
use crate::storage::{self, FamilyStore};
use std::future::Future;
use std::io::{self, Write};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub assume_yes: bool,
    pub dry_run: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            assume_yes: cli.yes,
            dry_run: cli.dry_run,
        }
    }
}

/// Connects, analyzes and, after confirmation on the terminal, updates.
pub async fn run(config: &AppConfig, options: RunOptions) -> Result<RunOutcome, AppError> {
    let mut store = storage::connect(config).await?;
    let table = StandardTable::builtin();
    info!("Loaded {} ISO/DIN mappings", table.len());
    let rewriter = TitleRewriter::new(table);
    let mut stdout = io::stdout();
    process_families(&mut store, &rewriter, options, &mut stdout, prompt_stdin).await
}

/// Reads the answer on a blocking thread so the runtime is not stalled.
async fn prompt_stdin(question: String) -> Result<bool, AppError> {
    let answer = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        console::confirm(&mut stdin.lock(), &mut io::stdout(), &question)
    })
    .await??;
    Ok(answer)
}

/// One full pass: fetch, rewrite, preview, confirm, commit.
pub async fn process_families<S, W, F, Fut>(
    store: &mut S,
    rewriter: &TitleRewriter,
    options: RunOptions,
    out: &mut W,
    confirm: F,
) -> Result<RunOutcome, AppError>
where
    S: FamilyStore,
    W: Write,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    info!("Fetching candidate families...");
    let records = store.fetch_candidates().await?;

    let set = build_change_set(&records, rewriter);
    info!(
        "Analyzed {} families: {} to update, {} unchanged, {} unresolved",
        set.analyzed,
        set.changes.len(),
        set.unchanged,
        set.unresolved
    );

    let outcome = if set.is_empty() {
        RunOutcome::NothingToChange
    } else {
        console::print_preview(out, &set)?;
        if options.dry_run {
            RunOutcome::DryRun
        } else if options.assume_yes
            || confirm(format!("Apply {} title update(s)?", set.changes.len())).await?
        {
            match store.apply_updates(&set.changes).await {
                Ok(count) => RunOutcome::Updated(count),
                Err(e) => {
                    error!("Update failed, all changes rolled back: {}", e);
                    return Err(e.into());
                }
            }
        } else {
            info!("Update declined by operator.");
            RunOutcome::Declined
        }
    };

    console::print_summary(out, &set, outcome)?;
    Ok(outcome)
}
