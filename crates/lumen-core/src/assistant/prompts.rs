//! Prompt text and response schemas for each assistant operation.

use serde_json::{json, Value};

pub(crate) fn analyze_reasoning(situation: &str, reasoning: &str) -> String {
    format!(
        "Analyze the following decision-making process.

**The Situation:**
{situation}

**The User's Reasoning:**
{reasoning}

---

As a critical thinking coach, please perform the following analysis:
1.  **Identify Potential Cognitive Biases:** Point out any common biases (like confirmation bias, availability heuristic, sunk cost fallacy, etc.) that might be influencing this reasoning.
2.  **Uncover Unstated Assumptions:** What hidden assumptions is the user making that could be false?
3.  **Find Potential Blind Spots:** What important factors or alternative outcomes might the user be overlooking?
4.  **Ask Clarifying Questions:** Pose 2-3 powerful questions that would help the user think more deeply about their choice.

Provide your analysis in a constructive, helpful tone. Use markdown for formatting (bolding, bullet points).
"
    )
}

pub(crate) fn brainstorm_options(situation: &str) -> String {
    format!(
        "Given the following situation, brainstorm 3-4 diverse and creative options to resolve it.
For each option, list 2-3 potential pros and 2-3 potential cons.

**Situation:**
{situation}
"
    )
}

pub(crate) fn follow_up_questions(situation: &str, reasoning: &str, analysis: &str) -> String {
    format!(
        "A user is making a decision. Here is the context:

**Original Situation:**
{situation}

**User's Reasoning:**
{reasoning}

**My Initial AI Analysis of their Reasoning:**
{analysis}

---
Based on all of this context, please generate exactly 3 deeper, more specific follow-up questions to help the user reflect further. The questions should be probing, open-ended, and encourage critical thinking about the blind spots or biases identified in the analysis. Output only the questions.
"
    )
}

pub(crate) fn suggest_resources(situation: &str, choice: &str) -> String {
    let choice = if choice.trim().is_empty() {
        "Not yet decided."
    } else {
        choice
    };
    format!(
        "A user is trying to make a decision. Here is the context:

**The Situation:**
{situation}

**Their Current Choice/Leaning:**
{choice}

---
Based on this context, please find and summarize helpful and high-quality online resources (e.g., articles, tools, reputable websites) that could help the user gather more information or evaluate their options. Your summary should be helpful and informative. The verified source links will be displayed separately.
"
    )
}

pub(crate) fn options_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "option": {
                    "type": "STRING",
                    "description": "A distinct course of action or choice."
                },
                "pros": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "The potential positive outcomes or advantages of this option."
                },
                "cons": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "The potential negative outcomes or disadvantages of this option."
                }
            },
            "required": ["option", "pros", "cons"]
        }
    })
}

pub(crate) fn questions_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "STRING",
            "description": "A single, probing follow-up question."
        }
    })
}
