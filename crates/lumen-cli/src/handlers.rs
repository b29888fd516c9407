//! Command handlers.
//!
//! Each handler drives the [`Journal`] the way the interactive editor would:
//! select a decision, apply edits, flush, then render the result.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use lumen_core::{
    display::{
        CreateResult, DecisionList, DecisionSummary, DeleteResult, OperationStatus,
        TemplateCatalog, UpdateResult,
    },
    params::DecisionSeed,
    templates::{self, DecisionTemplate},
    AssistantAction, AssistantClient, AssistantOutcome, Confirm, Decision, DecisionId,
    DeleteDecision, GeminiBackend, GeminiConfig, Journal, JournalError,
};
use log::debug;

use crate::{
    cli::{
        AssistArgs, DecisionIdArg, DeleteDecisionArgs, EditDecisionArgs, NewDecisionArgs,
        ShowDecisionArgs,
    },
    renderer::TerminalRenderer,
};

/// Yes/no prompt on the terminal. Anything but `y`/`yes` declines.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

pub struct Cli {
    journal: Journal,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(journal: Journal, renderer: TerminalRenderer) -> Self {
        Self { journal, renderer }
    }

    pub fn list(&self) -> Result<()> {
        self.renderer.render(DecisionList(self.journal.decisions()));
        Ok(())
    }

    pub fn templates(&self) -> Result<()> {
        self.renderer.render(TemplateCatalog::builtin());
        Ok(())
    }

    pub fn new_decision(&mut self, args: NewDecisionArgs) -> Result<()> {
        let overrides: DecisionSeed = args.fields.into();
        let seed = match args.template.as_deref() {
            Some(title) => {
                let mut seed = DecisionSeed::from_template(&find_template(title)?);
                seed.title = overrides.title.or(seed.title);
                seed.situation = overrides.situation.or(seed.situation);
                seed.choice = overrides.choice.or(seed.choice);
                seed.reasoning = overrides.reasoning.or(seed.reasoning);
                seed.expected_outcome = overrides.expected_outcome.or(seed.expected_outcome);
                seed
            }
            None => overrides,
        };

        let decision = self
            .journal
            .new_decision(Some(&seed))
            .context("Failed to create decision")?;
        self.renderer.render(CreateResult::new(decision));
        Ok(())
    }

    pub fn show(&self, args: ShowDecisionArgs) -> Result<()> {
        let decision = self.find(&args.id)?;
        if args.summary {
            self.renderer.render(DecisionSummary(&decision));
        } else {
            self.renderer.render(&decision);
        }
        Ok(())
    }

    pub fn edit(&mut self, args: EditDecisionArgs) -> Result<()> {
        let id = DecisionId::new(args.id.as_str());
        self.journal.select(&id)?;

        let mut changes = Vec::new();
        if let Some(title) = args.template.as_deref() {
            let template = find_template(title)?;
            self.journal.apply_template(&template)?;
            changes.push(format!("Applied template '{}'", template.title));
        }

        for (field, value) in args.edits() {
            self.journal
                .set_field(field, value)
                .with_context(|| format!("Failed to update {field}"))?;
            changes.push(format!("Updated {field}"));
        }
        if changes.is_empty() {
            bail!("Nothing to change; pass at least one field or --template");
        }

        self.journal.flush();
        let decision = self.selected()?;
        self.renderer.render(UpdateResult::with_changes(decision, changes));
        Ok(())
    }

    pub fn review(&mut self, args: DecisionIdArg) -> Result<()> {
        self.journal.select(&DecisionId::new(args.id.as_str()))?;
        self.journal.mark_reviewed()?;

        let decision = self.selected()?;
        self.renderer.render(OperationStatus::success(format!(
            "Marked '{}' as reviewed",
            decision.title
        )));
        Ok(())
    }

    pub fn reopen(&mut self, args: DecisionIdArg) -> Result<()> {
        self.journal.select(&DecisionId::new(args.id.as_str()))?;
        self.journal.mark_pending()?;

        let decision = self.selected()?;
        self.renderer.render(OperationStatus::success(format!(
            "Moved '{}' back to pending",
            decision.title
        )));
        Ok(())
    }

    pub fn delete(&mut self, args: DeleteDecisionArgs) -> Result<()> {
        let removed = if args.confirm {
            self.journal.delete(&DeleteDecision::from(&args))?
        } else {
            self.journal.select(&DecisionId::new(args.id.as_str()))?;
            self.journal.delete_with(&mut TerminalConfirm)?
        };

        match removed {
            Some(decision) => self.renderer.render(DeleteResult::new(decision)),
            None if args.confirm => {
                return Err(JournalError::DecisionNotFound {
                    id: DecisionId::new(args.id),
                }
                .into())
            }
            None => self
                .renderer
                .render(OperationStatus::failure("Deletion cancelled")),
        }
        Ok(())
    }

    pub async fn assist(&mut self, args: AssistArgs) -> Result<()> {
        self.journal.select(&DecisionId::new(args.id.as_str()))?;
        let action: AssistantAction = args.action.into();

        // Preconditions are checked before any backend is built
        let ticket = self.journal.begin_assistant(action)?;
        debug!("Sending {action} for {}", ticket.decision_id());

        let config = GeminiConfig::from_env()
            .with_api_key(args.api_key)
            .with_model(args.model);
        let result = match GeminiBackend::new(config) {
            Ok(backend) => AssistantClient::new(backend).execute(ticket.request()).await,
            Err(e) => Err(e),
        };

        match self.journal.finish_assistant(ticket, result) {
            AssistantOutcome::Applied(action) => {
                debug!("{action} applied");
                self.renderer.render(self.journal.panel());
                Ok(())
            }
            AssistantOutcome::Failed(e) => Err(e).context(format!("{action} failed")),
            AssistantOutcome::Discarded => bail!("The decision changed while waiting for {action}"),
        }
    }

    fn find(&self, id: &str) -> Result<Decision> {
        let id = DecisionId::new(id);
        self.journal
            .decisions()
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| JournalError::DecisionNotFound { id }.into())
    }

    fn selected(&self) -> Result<Decision> {
        self.journal
            .selected()
            .cloned()
            .ok_or_else(|| JournalError::NoSelection.into())
    }
}

fn find_template(title: &str) -> Result<DecisionTemplate> {
    templates::find(title)
        .with_context(|| format!("No template named '{title}'; run `lumen templates` to list them"))
}
