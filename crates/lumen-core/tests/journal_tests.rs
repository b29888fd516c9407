mod common;

use std::time::Duration;

use common::{memory_journal, TEST_DEBOUNCE};
use lumen_core::{
    models::{AiState, DecisionField},
    storage::DECISIONS_SLOT,
    templates, AssistantAction, AssistantError, AssistantOutcome, AssistantOutput, DecisionSeed,
    DecisionStatus, DeleteDecision, JournalError,
};

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_produce_one_write_with_final_value() {
    let (storage, mut journal) = memory_journal();
    journal.new_decision(None).unwrap();
    let writes_before = storage.write_count();

    for text in ["C", "Ch", "Cho", "Choosing"] {
        journal.set_field(DecisionField::Situation, text).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(storage.write_count(), writes_before);

    tokio::time::sleep(TEST_DEBOUNCE * 2).await;
    assert_eq!(storage.write_count(), writes_before + 1);

    let slot = storage.slot(DECISIONS_SLOT).unwrap();
    assert!(slot.contains("\"situation\":\"Choosing\""));
    assert!(!slot.contains("\"situation\":\"Cho\""));
}

#[tokio::test(start_paused = true)]
async fn test_switching_decisions_flushes_pending_edit() {
    let (storage, mut journal) = memory_journal();
    let first = journal.new_decision(None).unwrap();
    journal.set_field(DecisionField::Title, "Move to Lisbon?").unwrap();

    let second = journal.new_decision(None).unwrap();
    assert_eq!(journal.selected_id(), Some(&second.id));

    let stored: Vec<_> = journal.decisions();
    let first_stored = stored.iter().find(|d| d.id == first.id).unwrap();
    assert_eq!(first_stored.title, "Move to Lisbon?");
    assert!(storage.slot(DECISIONS_SLOT).unwrap().contains("Move to Lisbon?"));
}

#[tokio::test(start_paused = true)]
async fn test_close_editor_flushes_and_clears_selection() {
    let (_storage, mut journal) = memory_journal();
    journal.new_decision(None).unwrap();
    journal.set_field(DecisionField::Choice, "Stay").unwrap();

    journal.close_editor();
    assert_eq!(journal.selected_id(), None);
    assert_eq!(journal.decisions()[0].choice, "Stay");
}

#[tokio::test(start_paused = true)]
async fn test_select_unknown_keeps_previous_selection() {
    let (_storage, mut journal) = memory_journal();
    let decision = journal.new_decision(None).unwrap();

    let err = journal.select(&"decision-missing".into()).unwrap_err();
    assert!(matches!(err, JournalError::DecisionNotFound { .. }));
    assert_eq!(journal.selected_id(), Some(&decision.id));
}

#[tokio::test(start_paused = true)]
async fn test_status_toggle_preserves_review_fields() {
    let (_storage, mut journal) = memory_journal();
    journal.new_decision(None).unwrap();

    journal.mark_reviewed().unwrap();
    journal
        .set_field(DecisionField::ActualOutcome, "Got the job.\n  Loved it.")
        .unwrap();
    journal
        .set_field(DecisionField::Reflections, "Trust the data ✓")
        .unwrap();
    journal.mark_pending().unwrap();

    let stored = journal.decisions()[0].clone();
    assert_eq!(stored.status, DecisionStatus::Pending);
    assert_eq!(stored.actual_outcome, "Got the job.\n  Loved it.");
    assert_eq!(stored.reflections, "Trust the data ✓");

    journal.mark_reviewed().unwrap();
    let stored = journal.decisions()[0].clone();
    assert_eq!(stored.actual_outcome, "Got the job.\n  Loved it.");
    assert_eq!(stored.reflections, "Trust the data ✓");
}

#[tokio::test(start_paused = true)]
async fn test_status_change_is_written_immediately() {
    let (storage, mut journal) = memory_journal();
    journal.new_decision(None).unwrap();
    let writes_before = storage.write_count();

    journal.mark_reviewed().unwrap();
    assert_eq!(storage.write_count(), writes_before + 1);
    assert!(storage
        .slot(DECISIONS_SLOT)
        .unwrap()
        .contains("\"status\":\"Reviewed\""));
}

#[tokio::test(start_paused = true)]
async fn test_template_with_title_and_situation_clears_other_fields() {
    let (_storage, mut journal) = memory_journal();
    journal
        .new_decision(Some(&DecisionSeed {
            choice: Some("Old choice".to_string()),
            reasoning: Some("Old reasoning".to_string()),
            expected_outcome: Some("Old outcome".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let template = templates::DecisionTemplate {
        title: "Adopting a Pet",
        situation: "Thinking about adopting a dog.",
        choice: None,
        reasoning: None,
        expected_outcome: None,
    };
    journal.apply_template(&template).unwrap();
    journal.flush();

    let stored = journal.decisions()[0].clone();
    assert_eq!(stored.title, "Adopting a Pet");
    assert_eq!(stored.situation, "Thinking about adopting a dog.");
    assert_eq!(stored.choice, "");
    assert_eq!(stored.reasoning, "");
    assert_eq!(stored.expected_outcome, "");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_delete_changes_nothing() {
    let (storage, mut journal) = memory_journal();
    let decision = journal.new_decision(None).unwrap();
    let writes_before = storage.write_count();

    let mut prompts = Vec::new();
    let removed = journal
        .delete_with(&mut |prompt: &str| {
            prompts.push(prompt.to_string());
            false
        })
        .unwrap();

    assert_eq!(removed, None);
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Untitled Decision"));
    assert_eq!(journal.selected_id(), Some(&decision.id));
    assert_eq!(journal.pending_delete(), None);
    assert_eq!(journal.decisions().len(), 1);
    assert_eq!(storage.write_count(), writes_before);
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_delete_clears_selection() {
    let (_storage, mut journal) = memory_journal();
    let keep = journal.new_decision(None).unwrap();
    let doomed = journal.new_decision(None).unwrap();

    assert_eq!(journal.request_delete().unwrap(), &doomed.id);
    let removed = journal.confirm_delete().unwrap().unwrap();

    assert_eq!(removed.id, doomed.id);
    assert_eq!(journal.selected_id(), None);
    let ids: Vec<_> = journal.decisions().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

#[tokio::test(start_paused = true)]
async fn test_delete_discards_pending_edit_of_deleted_decision() {
    let (storage, mut journal) = memory_journal();
    journal.new_decision(None).unwrap();
    journal.set_field(DecisionField::Title, "Never saved").unwrap();

    journal.delete_with(&mut |_: &str| true).unwrap();
    tokio::time::sleep(TEST_DEBOUNCE * 2).await;

    assert!(journal.decisions().is_empty());
    assert_eq!(storage.slot(DECISIONS_SLOT).as_deref(), Some("[]"));
}

#[tokio::test(start_paused = true)]
async fn test_deleting_other_decision_keeps_selection() {
    let (_storage, mut journal) = memory_journal();
    let other = journal.new_decision(None).unwrap();
    let selected = journal.new_decision(None).unwrap();

    let removed = journal
        .delete(&DeleteDecision {
            id: other.id.to_string(),
            confirmed: true,
        })
        .unwrap();

    assert_eq!(removed.map(|d| d.id), Some(other.id));
    assert_eq!(journal.selected_id(), Some(&selected.id));
}

#[tokio::test(start_paused = true)]
async fn test_deleting_selected_by_id_clears_selection() {
    let (_storage, mut journal) = memory_journal();
    let selected = journal.new_decision(None).unwrap();

    journal
        .delete(&DeleteDecision {
            id: selected.id.to_string(),
            confirmed: true,
        })
        .unwrap();
    assert_eq!(journal.selected_id(), None);
}

#[tokio::test(start_paused = true)]
async fn test_selection_change_disarms_delete_gate() {
    let (_storage, mut journal) = memory_journal();
    let first = journal.new_decision(None).unwrap();
    journal.new_decision(None).unwrap();

    journal.request_delete().unwrap();
    journal.select(&first.id).unwrap();

    assert_eq!(journal.pending_delete(), None);
    assert!(journal.confirm_delete().is_err());
    assert_eq!(journal.decisions().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_discarded() {
    let (_storage, mut journal) = memory_journal();
    let first = journal
        .new_decision(Some(&DecisionSeed {
            situation: Some("Choosing between job A and B".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let ticket = journal
        .begin_assistant(AssistantAction::BrainstormOptions)
        .unwrap();
    let second = journal.new_decision(None).unwrap();

    let outcome = journal.finish_assistant(ticket, Ok(AssistantOutput::Options(vec![])));
    assert_eq!(outcome, AssistantOutcome::Discarded);
    assert_eq!(journal.selected_id(), Some(&second.id));

    let stored = journal.decisions();
    assert!(stored.iter().all(|d| d.ai_options.is_none()));
    assert!(stored.iter().any(|d| d.id == first.id));
}

#[tokio::test(start_paused = true)]
async fn test_response_after_reselecting_same_decision_is_discarded() {
    let (_storage, mut journal) = memory_journal();
    let first = journal
        .new_decision(Some(&DecisionSeed {
            reasoning: Some("It feels right".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let ticket = journal
        .begin_assistant(AssistantAction::AnalyzeReasoning)
        .unwrap();
    journal.close_editor();
    journal.select(&first.id).unwrap();

    let outcome =
        journal.finish_assistant(ticket, Ok(AssistantOutput::Analysis("Late".to_string())));
    assert_eq!(outcome, AssistantOutcome::Discarded);
    assert_eq!(journal.selected().unwrap().ai_analysis, None);
    assert!(!journal.panel().is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_applied_analysis_is_persisted_and_clears_follow_ups() {
    let (storage, mut journal) = memory_journal();
    journal
        .new_decision(Some(&DecisionSeed {
            reasoning: Some("It feels right".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let ticket = journal
        .begin_assistant(AssistantAction::AnalyzeReasoning)
        .unwrap();
    let outcome = journal.finish_assistant(
        ticket,
        Ok(AssistantOutput::Analysis("Possible confirmation bias.".to_string())),
    );
    assert_eq!(outcome, AssistantOutcome::Applied(AssistantAction::AnalyzeReasoning));
    assert!(storage
        .slot(DECISIONS_SLOT)
        .unwrap()
        .contains("Possible confirmation bias."));

    let ticket = journal
        .begin_assistant(AssistantAction::FollowUpQuestions)
        .unwrap();
    let questions = vec!["One?".to_string(), "Two?".to_string(), "Three?".to_string()];
    journal.finish_assistant(ticket, Ok(AssistantOutput::FollowUpQuestions(questions)));
    assert!(journal.selected().unwrap().ai_follow_up_questions.is_some());

    let ticket = journal
        .begin_assistant(AssistantAction::AnalyzeReasoning)
        .unwrap();
    journal.finish_assistant(ticket, Ok(AssistantOutput::Analysis("Fresh take.".to_string())));

    let stored = journal.decisions()[0].clone();
    assert_eq!(stored.ai_analysis.as_deref(), Some("Fresh take."));
    assert_eq!(stored.ai_follow_up_questions, None);
    assert_eq!(journal.panel().follow_up, AiState::NotRequested);
}

#[tokio::test(start_paused = true)]
async fn test_failed_request_leaves_prior_ai_content() {
    let (_storage, mut journal) = memory_journal();
    journal
        .new_decision(Some(&DecisionSeed {
            reasoning: Some("It feels right".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let ticket = journal
        .begin_assistant(AssistantAction::AnalyzeReasoning)
        .unwrap();
    journal.finish_assistant(ticket, Ok(AssistantOutput::Analysis("First".to_string())));

    let ticket = journal
        .begin_assistant(AssistantAction::AnalyzeReasoning)
        .unwrap();
    let outcome = journal.finish_assistant(
        ticket,
        Err(AssistantError::Transport("connection reset".to_string())),
    );

    assert!(matches!(outcome, AssistantOutcome::Failed(_)));
    assert_eq!(journal.decisions()[0].ai_analysis.as_deref(), Some("First"));
    assert!(journal.panel().error().unwrap().contains("connection reset"));
    assert_eq!(
        journal.panel().analysis.succeeded().map(String::as_str),
        Some("First")
    );
    assert!(journal.panel().can_ask_follow_up());

    journal.dismiss_error();
    assert_eq!(journal.panel().error(), None);
}
