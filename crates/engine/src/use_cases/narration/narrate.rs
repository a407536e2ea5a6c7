//! Narrate scene use case.
//!
//! Sends a narration payload to the LLM under the fixed narrator instruction
//! and returns the generated prose. One request, no retry, no history.

use std::sync::Arc;

use regex_lite::Regex;

use crate::infrastructure::ports::{ChatMessage, LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::DEFAULT_NARRATOR_SYSTEM_PROMPT;

use super::NarrationPayload;

pub const NARRATION_TEMPERATURE: f32 = 1.0;
pub const NARRATION_MAX_TOKENS: u32 = 1024;
/// Full probability mass; nucleus sampling is effectively off.
pub const NARRATION_TOP_P: f32 = 1.0;
pub const NARRATION_FREQUENCY_PENALTY: f32 = 0.0;
pub const NARRATION_PRESENCE_PENALTY: f32 = 0.0;

/// Stand-ins for an exit name the model repeated despite instructions, in
/// order of preference. The first one that is not itself a withheld name wins.
pub const EXIT_NAME_REPLACEMENTS: [&str; 4] = ["passage", "way", "opening", "exit"];

/// Render a location payload as second-person narration.
pub struct NarrateScene {
    llm: Arc<dyn LlmPort>,
}

impl NarrateScene {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// The exact request sent for a payload.
    pub fn build_request(payload: &NarrationPayload) -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user(payload.json.clone())])
            .with_system_prompt(DEFAULT_NARRATOR_SYSTEM_PROMPT)
            .with_temperature(NARRATION_TEMPERATURE)
            .with_max_tokens(Some(NARRATION_MAX_TOKENS))
            .with_top_p(NARRATION_TOP_P)
            .with_penalties(NARRATION_FREQUENCY_PENALTY, NARRATION_PRESENCE_PENALTY)
    }

    pub async fn execute(&self, payload: &NarrationPayload) -> Result<String, LlmError> {
        let response = self.llm.generate(Self::build_request(payload)).await?;

        tracing::info!(
            location_id = %payload.request.id,
            finish_reason = ?response.finish_reason,
            completion_tokens = response.usage.as_ref().map(|u| u.completion_tokens),
            "Narration generated"
        );

        let (text, scrubbed) =
            scrub_exit_names(&response.content, payload.request.withheld_exit_names()).map_err(
                |e| LlmError::InvalidResponse(format!("Cannot filter exit names: {e}")),
            )?;
        if scrubbed > 0 {
            tracing::warn!(
                location_id = %payload.request.id,
                occurrences = scrubbed,
                "Narration repeated withheld exit names; replaced them"
            );
        }

        Ok(text)
    }
}

/// Replace every whole-word, ASCII-case-insensitive occurrence of each name
/// in `text`.
///
/// All names are matched in one pass over the original text, longest first,
/// so a replacement is never matched again. Returns the cleaned text and how
/// many replacements were made.
pub fn scrub_exit_names(
    text: &str,
    names: &[String],
) -> Result<(String, usize), regex_lite::Error> {
    let Some(pattern) = exit_name_pattern(names)? else {
        return Ok((text.to_string(), 0));
    };

    for replacement in EXIT_NAME_REPLACEMENTS {
        let (cleaned, count) = replace_all_counted(&pattern, text, replacement);
        if count == 0 || !pattern.is_match(&cleaned) {
            return Ok((cleaned, count));
        }
    }

    // Every stand-in is itself withheld: drop the names outright. Each pass
    // removes at least one non-empty match, so this terminates.
    let (mut cleaned, mut count) = replace_all_counted(&pattern, text, "");
    while pattern.is_match(&cleaned) {
        let (next, more) = replace_all_counted(&pattern, &cleaned, "");
        cleaned = next;
        count += more;
    }
    Ok((cleaned, count))
}

/// One alternation over all names, longest first, anchored on word
/// boundaries wherever the name starts or ends with a word character.
fn exit_name_pattern(names: &[String]) -> Result<Option<Regex>, regex_lite::Error> {
    let mut names: Vec<&str> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return Ok(None);
    }
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();

    let alternatives: Vec<String> = names
        .iter()
        .map(|name| {
            let lead = if name.starts_with(is_word_char) { r"\b" } else { "" };
            let trail = if name.ends_with(is_word_char) { r"\b" } else { "" };
            format!("{lead}{}{trail}", regex_lite::escape(name))
        })
        .collect();

    Regex::new(&format!("(?i)(?:{})", alternatives.join("|"))).map(Some)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn replace_all_counted(pattern: &Regex, text: &str, replacement: &str) -> (String, usize) {
    let mut cleaned = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;

    for found in pattern.find_iter(text) {
        cleaned.push_str(&text[last..found.start()]);
        cleaned.push_str(replacement);
        last = found.end();
        count += 1;
    }
    cleaned.push_str(&text[last..]);

    (cleaned, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{FinishReason, LlmResponse, MessageRole, MockLlmPort};
    use crate::test_fixtures::{cellar_chute, north_door, study, CHUTE_NAME, NORTH_DOOR_NAME};
    use dungeonmaster_domain::NarrationRequest;

    fn payload() -> NarrationPayload {
        let location = study().with_exits(vec![north_door(), cellar_chute()]);
        NarrationPayload::new(NarrationRequest::new(location, Some("dusk".to_string())))
            .expect("payload")
    }

    fn stub_llm(content: &'static str) -> MockLlmPort {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(1).returning(move |_| {
            Ok(LlmResponse {
                content: content.to_string(),
                finish_reason: FinishReason::Stop,
                usage: None,
            })
        });
        llm
    }

    #[test]
    fn request_uses_fixed_instruction_and_sampling() {
        let payload = payload();
        let request = NarrateScene::build_request(&payload);

        assert_eq!(
            request.system_prompt.as_deref(),
            Some(DEFAULT_NARRATOR_SYSTEM_PROMPT)
        );
        assert_eq!(request.temperature, Some(1.0));
        assert_eq!(request.max_tokens, Some(1024));
        assert_eq!(request.top_p, Some(1.0));
        assert_eq!(request.frequency_penalty, Some(0.0));
        assert_eq!(request.presence_penalty, Some(0.0));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, payload.json);
    }

    #[tokio::test]
    async fn returns_generated_text() {
        let use_case = NarrateScene::new(Arc::new(stub_llm(
            "You stand in a cramped study as dusk settles over the shelves.",
        )));

        let text = use_case.execute(&payload()).await.expect("narrate");

        assert_eq!(
            text,
            "You stand in a cramped study as dusk settles over the shelves."
        );
    }

    #[tokio::test]
    async fn withheld_exit_names_never_appear_in_output() {
        let use_case = NarrateScene::new(Arc::new(stub_llm(
            "A heavy oak door, the North Door, leads on. Below, the cellar chute gapes.",
        )));

        let text = use_case.execute(&payload()).await.expect("narrate");

        for name in [NORTH_DOOR_NAME, CHUTE_NAME] {
            assert!(
                !text.to_ascii_lowercase().contains(&name.to_ascii_lowercase()),
                "{name} leaked into {text:?}"
            );
        }
        assert!(text.contains("A heavy oak door"));
    }

    #[tokio::test]
    async fn generation_failure_is_not_retried() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Err(LlmError::RequestFailed("connection refused".to_string())));

        let use_case = NarrateScene::new(Arc::new(llm));
        let result = use_case.execute(&payload()).await;

        assert!(matches!(result, Err(LlmError::RequestFailed(_))));
    }

    #[test]
    fn scrub_is_case_insensitive_and_counts() {
        let names = vec!["North Door".to_string()];
        let (text, count) =
            scrub_exit_names("NORTH DOOR and north door.", &names).expect("scrub");

        assert_eq!(text, "passage and passage.");
        assert_eq!(count, 2);
    }

    #[test]
    fn scrub_prefers_longer_names() {
        let names = vec!["Door".to_string(), "North Door".to_string()];
        let (text, count) = scrub_exit_names("Take the North Door.", &names).expect("scrub");

        assert_eq!(text, "Take the passage.");
        assert_eq!(count, 1);
    }

    #[test]
    fn scrub_leaves_non_ascii_text_intact() {
        let names = vec!["Grille".to_string()];
        let (text, count) =
            scrub_exit_names("Café lights flicker; no exit named here.", &names).expect("scrub");

        assert_eq!(text, "Café lights flicker; no exit named here.");
        assert_eq!(count, 0);
    }

    #[test]
    fn scrub_only_replaces_whole_words() {
        let names = vec!["Door".to_string()];
        let (text, count) =
            scrub_exit_names("You step indoors; the doorway creaks. A door slams.", &names)
                .expect("scrub");

        assert_eq!(text, "You step indoors; the doorway creaks. A passage slams.");
        assert_eq!(count, 1);
    }

    #[test]
    fn scrub_avoids_a_stand_in_that_is_itself_withheld() {
        let names = vec!["Passage".to_string()];
        let (text, count) = scrub_exit_names("A Passage leads east.", &names).expect("scrub");

        assert_eq!(text, "A way leads east.");
        assert_eq!(count, 1);
        assert!(!text.to_ascii_lowercase().contains("passage"));
    }

    #[test]
    fn scrub_never_rematches_its_own_replacement() {
        let names = vec!["North Door".to_string(), "Pass".to_string()];
        let (text, count) = scrub_exit_names("Take the North Door.", &names).expect("scrub");

        assert_eq!(text, "Take the passage.");
        assert_eq!(count, 1);
    }

    #[test]
    fn scrub_drops_names_when_every_stand_in_is_withheld() {
        let names: Vec<String> = EXIT_NAME_REPLACEMENTS.iter().map(|s| s.to_string()).collect();
        let (text, count) =
            scrub_exit_names("The Exit, an opening, a way, a passage.", &names).expect("scrub");

        assert_eq!(text, "The , an , a , a .");
        assert_eq!(count, 4);
    }

    #[test]
    fn scrub_escapes_names_with_punctuation() {
        let names = vec!["Door (West)".to_string()];
        let (text, count) =
            scrub_exit_names("Try the door (west) or the window.", &names).expect("scrub");

        assert_eq!(text, "Try the passage or the window.");
        assert_eq!(count, 1);
    }
}
