//! Selection, deletion and assistant flow over a decision store.
//!
//! [`Journal`] is what a front end drives. It tracks which decision is open,
//! owns that decision's [`EditorSession`] and [`AssistantPanel`], and gates
//! deletion behind an explicit confirmation.
//!
//! # Deletion
//!
//! Deleting is a two-step exchange: [`Journal::request_delete`] arms the gate
//! for the open decision, then [`Journal::confirm_delete`] or
//! [`Journal::cancel_delete`] resolves it. Changing the selection disarms
//! the gate. [`Journal::delete_with`] runs both steps against a blocking
//! [`Confirm`] prompt.
//!
//! # Assistant requests
//!
//! [`Journal::begin_assistant`] captures the inputs from the working copy and
//! hands out an [`AssistantTicket`] tagged with the target decision and the
//! selection generation. The response comes back through
//! [`Journal::finish_assistant`]; a ticket issued before the selection changed
//! is discarded rather than merged into whatever decision is open now.

use std::{sync::Arc, time::Duration};

use log::{debug, info, warn};

use crate::{
    assistant::{
        AssistantAction, AssistantClient, AssistantOutput, AssistantPanel, AssistantRequest,
        ReasoningBackend,
    },
    editor::{EditorSession, DEFAULT_DEBOUNCE},
    error::{AssistantError, JournalError, Result},
    models::{Decision, DecisionField, DecisionId},
    params::{DecisionSeed, DeleteDecision},
    store::{lock_store, DecisionStore, SharedStore},
    templates::DecisionTemplate,
};

/// A synchronous yes/no prompt.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// An assistant request in flight, bound to the decision it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantTicket {
    decision_id: DecisionId,
    generation: u64,
    request: AssistantRequest,
}

impl AssistantTicket {
    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn request(&self) -> &AssistantRequest {
        &self.request
    }

    pub fn action(&self) -> AssistantAction {
        self.request.action()
    }
}

/// How a finished assistant request was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantOutcome {
    /// The output was merged into the open decision and persisted
    Applied(AssistantAction),
    /// The request failed; the message is shown on the panel
    Failed(AssistantError),
    /// The selection changed while the request was in flight
    Discarded,
}

pub struct Journal {
    store: SharedStore,
    session: Option<EditorSession>,
    panel: AssistantPanel,
    pending_delete: Option<DecisionId>,
    generation: u64,
    debounce: Duration,
}

impl Journal {
    pub fn new(store: DecisionStore) -> Self {
        Self::from_shared(store.into_shared())
    }

    pub fn from_shared(store: SharedStore) -> Self {
        Self {
            store,
            session: None,
            panel: AssistantPanel::default(),
            pending_delete: None,
            generation: 0,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Sets the idle delay for sessions opened from now on.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Snapshot of the stored collection, newest first.
    pub fn decisions(&self) -> Vec<Decision> {
        lock_store(&self.store).decisions().to_vec()
    }

    pub fn selected_id(&self) -> Option<&DecisionId> {
        self.session.as_ref().map(EditorSession::id)
    }

    /// Working copy of the open decision.
    pub fn selected(&self) -> Option<&Decision> {
        self.session.as_ref().map(EditorSession::decision)
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn panel(&self) -> &AssistantPanel {
        &self.panel
    }

    /// Creates a decision and opens it.
    pub fn new_decision(&mut self, seed: Option<&DecisionSeed>) -> Result<Decision> {
        self.close_session();
        let decision = lock_store(&self.store).create(seed);
        self.open_session(&decision.id)?;
        info!("Created decision {}", decision.id);
        Ok(decision)
    }

    /// Opens `id`, flushing the edits of the previously open decision.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DecisionNotFound` for an unknown id; the
    /// previous selection stays open.
    pub fn select(&mut self, id: &DecisionId) -> Result<()> {
        if self.selected_id() == Some(id) {
            return Ok(());
        }
        if lock_store(&self.store).get(id).is_none() {
            return Err(JournalError::DecisionNotFound { id: id.clone() });
        }

        self.close_session();
        self.open_session(id)
    }

    /// Flushes and closes the open decision.
    pub fn close_editor(&mut self) {
        self.close_session();
    }

    /// Flushes the open decision's pending edit, if any.
    pub fn flush(&mut self) -> bool {
        self.session.as_mut().is_some_and(EditorSession::flush)
    }

    pub fn set_field(&mut self, field: DecisionField, value: impl Into<String>) -> Result<()> {
        self.session_mut()?.set_field(field, value)
    }

    pub fn apply_template(&mut self, template: &DecisionTemplate) -> Result<()> {
        self.session_mut()?.apply_template(template);
        Ok(())
    }

    pub fn mark_reviewed(&mut self) -> Result<()> {
        self.session_mut()?.mark_reviewed()
    }

    pub fn mark_pending(&mut self) -> Result<()> {
        self.session_mut()?.mark_pending()
    }

    /// Arms the deletion gate for the open decision.
    pub fn request_delete(&mut self) -> Result<&DecisionId> {
        let id = self.selected_id().cloned().ok_or(JournalError::NoSelection)?;
        Ok(self.pending_delete.insert(id))
    }

    /// Decision awaiting delete confirmation, if the gate is armed.
    pub fn pending_delete(&self) -> Option<&DecisionId> {
        self.pending_delete.as_ref()
    }

    /// Disarms the gate without touching any decision.
    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            debug!("Cancelled deletion of {id}");
        }
    }

    /// Deletes the decision the gate is armed for and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidInput` if no deletion was requested.
    pub fn confirm_delete(&mut self) -> Result<Option<Decision>> {
        let id = self.pending_delete.take().ok_or_else(|| {
            JournalError::invalid_input("delete")
                .with_reason("no deletion is awaiting confirmation")
        })?;

        self.drop_session();
        let removed = lock_store(&self.store).delete(&id);
        info!("Deleted decision {id}");
        Ok(removed)
    }

    /// Asks `prompt` before deleting the open decision.
    ///
    /// Returns the deleted decision, or `None` when the user declined.
    pub fn delete_with(&mut self, prompt: &mut impl Confirm) -> Result<Option<Decision>> {
        self.request_delete()?;
        let title = self
            .selected()
            .map(|d| d.title.clone())
            .unwrap_or_default();

        if prompt.confirm(&format!("Delete '{title}'? This cannot be undone.")) {
            self.confirm_delete()
        } else {
            self.cancel_delete();
            Ok(None)
        }
    }

    /// Deletes a decision by id once `params.confirmed` is set.
    ///
    /// The selection is cleared only when it points at the deleted decision.
    /// Unknown ids are a no-op and return `None`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidInput` without confirmation.
    pub fn delete(&mut self, params: &DeleteDecision) -> Result<Option<Decision>> {
        if !params.confirmed {
            return Err(JournalError::invalid_input("confirmed")
                .with_reason("deletion requires explicit confirmation"));
        }

        let id = DecisionId::new(params.id.as_str());
        if self.selected_id() == Some(&id) {
            self.drop_session();
        }
        if self.pending_delete.as_ref() == Some(&id) {
            self.pending_delete = None;
        }
        Ok(lock_store(&self.store).delete(&id))
    }

    /// Validates and starts an assistant request for the open decision.
    ///
    /// Precondition failures are recorded on the panel and returned without
    /// any request being sent.
    ///
    /// # Errors
    ///
    /// `JournalError::NoSelection`, `JournalError::AssistantBusy` while
    /// another request of the panel is running, or the precondition's
    /// `AssistantError`.
    pub fn begin_assistant(&mut self, action: AssistantAction) -> Result<AssistantTicket> {
        let decision = self.selected().ok_or(JournalError::NoSelection)?;
        if self.panel.is_busy() {
            return Err(JournalError::AssistantBusy);
        }

        let request = request_for(decision, action);
        let decision_id = decision.id.clone();
        if let Err(e) = request.validate() {
            self.panel.reject(e.to_string());
            return Err(e.into());
        }

        self.panel.start(action);
        debug!("Started {action} for {decision_id}");
        Ok(AssistantTicket {
            decision_id,
            generation: self.generation,
            request,
        })
    }

    /// Applies the result of a request started with `begin_assistant`.
    pub fn finish_assistant(
        &mut self,
        ticket: AssistantTicket,
        result: std::result::Result<AssistantOutput, AssistantError>,
    ) -> AssistantOutcome {
        if ticket.generation != self.generation || self.selected_id() != Some(&ticket.decision_id)
        {
            debug!(
                "Discarding stale {} response for {}",
                ticket.action(),
                ticket.decision_id
            );
            return AssistantOutcome::Discarded;
        }

        let action = ticket.action();
        let output = match result {
            Ok(output) => output,
            Err(e) => {
                warn!("{action} failed: {e}");
                self.panel.fail(action, e.to_string());
                return AssistantOutcome::Failed(e);
            }
        };

        self.panel.succeed(&output);
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.apply_assistant_output(output) {
                warn!("Could not persist {action} for {}: {e}", ticket.decision_id);
            }
        }
        AssistantOutcome::Applied(action)
    }

    /// Runs one assistant request end to end.
    pub async fn run_assistant<B: ReasoningBackend>(
        &mut self,
        client: &AssistantClient<B>,
        action: AssistantAction,
    ) -> Result<AssistantOutcome> {
        let ticket = self.begin_assistant(action)?;
        let result = client.execute(ticket.request()).await;
        Ok(self.finish_assistant(ticket, result))
    }

    pub fn dismiss_error(&mut self) {
        self.panel.dismiss_error();
    }

    fn session_mut(&mut self) -> Result<&mut EditorSession> {
        self.session.as_mut().ok_or(JournalError::NoSelection)
    }

    fn open_session(&mut self, id: &DecisionId) -> Result<()> {
        let session = EditorSession::open(Arc::clone(&self.store), id, self.debounce)?;
        self.generation += 1;
        self.panel = AssistantPanel::for_decision(session.decision());
        self.pending_delete = None;
        self.session = Some(session);
        Ok(())
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.close();
        }
        self.reset_selection();
    }

    /// Ends the session without writing its pending edit.
    fn drop_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.discard();
        }
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.generation += 1;
        self.panel = AssistantPanel::default();
        self.pending_delete = None;
    }
}

fn request_for(decision: &Decision, action: AssistantAction) -> AssistantRequest {
    let situation = decision.situation.clone();
    match action {
        AssistantAction::AnalyzeReasoning => AssistantRequest::AnalyzeReasoning {
            situation,
            reasoning: decision.reasoning.clone(),
        },
        AssistantAction::BrainstormOptions => AssistantRequest::BrainstormOptions { situation },
        AssistantAction::FollowUpQuestions => AssistantRequest::FollowUpQuestions {
            situation,
            reasoning: decision.reasoning.clone(),
            analysis: decision.ai_analysis.clone().unwrap_or_default(),
        },
        AssistantAction::SuggestResources => AssistantRequest::SuggestResources {
            situation,
            choice: decision.choice.clone(),
        },
    }
}
