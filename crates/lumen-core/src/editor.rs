//! Editing session for one open decision.
//!
//! The session keeps a working copy that reflects every edit immediately.
//! Prose edits reach the store through a [`Debouncer`], so a burst of
//! keystrokes costs one write. Status transitions and assistant merges are
//! written at once and take any pending prose with them.
//!
//! Closing or dropping a session flushes the pending write, so switching to
//! another decision never loses the last edit.

use std::{sync::Arc, time::Duration};

use log::{debug, warn};

use crate::{
    assistant::AssistantOutput,
    debounce::Debouncer,
    error::{JournalError, Result},
    models::{Decision, DecisionField, DecisionId, DecisionStatus},
    store::{lock_store, SharedStore},
    templates::DecisionTemplate,
};

/// Idle time after the last edit before it is written through.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

pub struct EditorSession {
    store: SharedStore,
    working: Decision,
    debouncer: Debouncer<Decision>,
}

impl EditorSession {
    /// Opens a session on the stored decision `id`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DecisionNotFound` if the store has no such
    /// decision.
    pub fn open(store: SharedStore, id: &DecisionId, delay: Duration) -> Result<Self> {
        let working = lock_store(&store)
            .get(id)
            .cloned()
            .ok_or_else(|| JournalError::DecisionNotFound { id: id.clone() })?;

        let sink_store = Arc::clone(&store);
        let debouncer = Debouncer::new(delay, move |decision: Decision| {
            write_through(&sink_store, decision);
        });

        debug!("Opened editor for {id}");
        Ok(Self {
            store,
            working,
            debouncer,
        })
    }

    /// The working copy, including edits not yet written.
    pub fn decision(&self) -> &Decision {
        &self.working
    }

    pub fn id(&self) -> &DecisionId {
        &self.working.id
    }

    /// Whether an edit is waiting on the debounce timer.
    pub fn has_pending_write(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Updates one text field and schedules the write-through.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidInput` for the actual outcome and
    /// reflections while the decision is still pending.
    pub fn set_field(&mut self, field: DecisionField, value: impl Into<String>) -> Result<()> {
        if field.is_review_field() && !self.working.is_reviewed() {
            return Err(JournalError::invalid_input(field.as_str())
                .with_reason("only editable once the decision is reviewed"));
        }

        self.working.set_field(field, value.into());
        self.schedule();
        Ok(())
    }

    /// Overwrites the pre-review fields from `template`.
    pub fn apply_template(&mut self, template: &DecisionTemplate) {
        self.working.apply_template(template);
        self.schedule();
    }

    /// Moves the decision from pending to reviewed and persists it at once.
    pub fn mark_reviewed(&mut self) -> Result<()> {
        self.transition(DecisionStatus::Pending, DecisionStatus::Reviewed)
    }

    /// Moves the decision back to pending and persists it at once.
    ///
    /// The review fields are hidden but kept.
    pub fn mark_pending(&mut self) -> Result<()> {
        self.transition(DecisionStatus::Reviewed, DecisionStatus::Pending)
    }

    /// Merges assistant content and persists it at once.
    pub fn apply_assistant_output(&mut self, output: AssistantOutput) -> Result<()> {
        self.working.merge_assistant_output(output);
        self.write_now()
    }

    /// Writes any pending edit immediately. Returns whether one was pending.
    pub fn flush(&mut self) -> bool {
        self.debouncer.flush()
    }

    /// Drops a pending edit without writing it.
    pub(crate) fn discard(&mut self) {
        self.debouncer.cancel();
    }

    /// Flushes and ends the session.
    pub fn close(mut self) {
        self.flush();
    }

    fn transition(&mut self, from: DecisionStatus, to: DecisionStatus) -> Result<()> {
        if self.working.status != from {
            return Err(JournalError::invalid_input("status").with_reason(format!(
                "decision is already {}",
                self.working.status.as_str()
            )));
        }

        self.working.status = to;
        self.write_now()?;
        debug!("Decision {} is now {}", self.working.id, to.as_str());
        Ok(())
    }

    fn schedule(&mut self) {
        self.debouncer.schedule(self.working.clone());
    }

    /// Replaces any pending write with the full working copy.
    fn write_now(&mut self) -> Result<()> {
        self.debouncer.cancel();
        lock_store(&self.store).update(self.working.clone())
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        if self.debouncer.flush() {
            debug!("Flushed pending edit for {}", self.working.id);
        }
    }
}

fn write_through(store: &SharedStore, decision: Decision) {
    let id = decision.id.clone();
    if let Err(e) = lock_store(store).update(decision) {
        warn!("Dropped edit for {id}: {e}");
    }
}
