use crate::model::{FamilyRecord, RewriteResult};
use crate::rewriter::{Outcome, TitleRewriter};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Result of rewriting one batch of candidates, held until the operator decides.
#[derive(Debug, Clone)]
pub struct ChangeSet {
    pub changes: Vec<RewriteResult>,
    pub analyzed: usize,
    pub unchanged: usize,
    pub unresolved: usize,
    pub analyzed_at: DateTime<Utc>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Runs the rewriter over every record in order. Unresolved titles are
/// counted and logged; they never stop the batch.
pub fn build_change_set(records: &[FamilyRecord], rewriter: &TitleRewriter) -> ChangeSet {
    let mut changes = Vec::new();
    let mut unchanged = 0;
    let mut unresolved = 0;

    for record in records {
        let rewrite = rewriter.rewrite(&record.title);
        if let Outcome::Unresolved(reason) = &rewrite.outcome {
            warn!("Skipping family {} \"{}\": {}", record.id, record.title, reason);
            unresolved += 1;
            continue;
        }

        match rewrite.proposed_change(&record.title) {
            Some(proposed) => {
                debug!("Family {}: \"{}\" -> \"{}\"", record.id, record.title, proposed);
                changes.push(RewriteResult {
                    family_id: record.id,
                    original_title: record.title.clone(),
                    proposed_title: proposed.to_string(),
                });
            }
            None => unchanged += 1,
        }
    }

    ChangeSet {
        changes,
        analyzed: records.len(),
        unchanged,
        unresolved,
        analyzed_at: Utc::now(),
    }
}
