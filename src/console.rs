// Operator-facing output: change preview, confirmation prompt, run summary.
use crate::changeset::ChangeSet;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, BufRead, Write};

/// How a run ended, as reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Updated(usize),
    NothingToChange,
    Declined,
    DryRun,
}

pub fn print_preview<W: Write>(out: &mut W, set: &ChangeSet) -> io::Result<()> {
    writeln!(
        out,
        "{} {} proposed change(s), analysis at {}",
        "\u{25B6}".if_supports_color(Stdout, |t| t.cyan()),
        set.changes.len(),
        set.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )?;

    for change in &set.changes {
        writeln!(out)?;
        writeln!(
            out,
            "  Family {}",
            change.family_id.if_supports_color(Stdout, |t| t.bold())
        )?;
        writeln!(
            out,
            "    {} {}",
            "-".if_supports_color(Stdout, |t| t.red()),
            change.original_title.if_supports_color(Stdout, |t| t.dimmed())
        )?;
        writeln!(
            out,
            "    {} {}",
            "+".if_supports_color(Stdout, |t| t.green()),
            change.proposed_title.if_supports_color(Stdout, |t| t.bold())
        )?;
    }
    Ok(())
}

/// Asks a yes/no question; only `y`/`yes` (any case) confirms.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool> {
    write!(out, "\n  {} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

pub fn print_summary<W: Write>(out: &mut W, set: &ChangeSet, outcome: RunOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  Analyzed:   {}", set.analyzed)?;
    writeln!(out, "  Unchanged:  {}", set.unchanged)?;
    writeln!(
        out,
        "  Skipped:    {}",
        set.unresolved.if_supports_color(Stdout, |t| t.yellow())
    )?;

    match outcome {
        RunOutcome::Updated(count) => writeln!(
            out,
            "  {} {} title(s) updated",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            count
        ),
        RunOutcome::NothingToChange => writeln!(
            out,
            "  {} No changes made: all titles already consistent",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        ),
        RunOutcome::Declined => writeln!(
            out,
            "  {} No changes made: update declined",
            "\u{2718}".if_supports_color(Stdout, |t| t.yellow())
        ),
        RunOutcome::DryRun => writeln!(
            out,
            "  {} No changes made: dry run, {} title(s) would be updated",
            "\u{2139}".if_supports_color(Stdout, |t| t.cyan()),
            set.changes.len()
        ),
    }
}
