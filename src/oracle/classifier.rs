//! Remote intent classification over the oracle.
//!
//! `classify` and `classify_one` never surface errors: input validation
//! failures, transport errors, malformed replies, and unknown categories all
//! degrade to an empty result, which the caller's fallback chain consumes.

use super::client::{ChatRequest, Message, OracleClient, ThinkingBudget};
use super::parse::{parse_reply, parse_single_word};
use crate::config::ClassifierConfig;
use crate::intent::{Category, ClassificationItem};

/// Output-token ceiling for the multi-card call.
const MULTI_MAX_TOKENS: u32 = 128;
/// The single-intent reply is one bare word.
const SINGLE_MAX_TOKENS: u32 = 3;

pub struct RemoteClassifier {
    /// `None` means fallback-only mode: no API key was configured, so no
    /// remote call is ever attempted.
    client: Option<OracleClient>,
    model: String,
}

impl RemoteClassifier {
    /// A missing API key is a construction-time condition, not a per-call
    /// error: the classifier is built in fallback-only mode and every
    /// `classify` call short-circuits to empty.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let client = match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(OracleClient::new(&config.endpoint, key)),
            _ => {
                tracing::warn!("classifier API key not set; operating in fallback-only mode");
                None
            }
        };
        Self {
            client,
            model: config.model.clone(),
        }
    }

    pub fn is_fallback_only(&self) -> bool {
        self.client.is_none()
    }

    /// Multi-card classification: ordered `(lead-in, category)` pairs, or
    /// empty on any failure.
    pub async fn classify(&self, query: &str) -> Vec<ClassificationItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let Some(client) = &self.client else {
            return Vec::new();
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: "/no_think".into(),
                },
                Message {
                    role: "user",
                    content: multi_card_prompt(query),
                },
            ],
            temperature: 0.0,
            top_p: 1.0,
            max_tokens: MULTI_MAX_TOKENS,
            stream: false,
            extra_body: Some(ThinkingBudget::suppressed()),
        };

        let raw = match client.complete(&request).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "multi-card classification call failed");
                return Vec::new();
            }
        };
        tracing::debug!(reply = raw.as_str(), "multi-card oracle reply");

        parse_reply(&raw)
            .into_iter()
            .filter_map(|item| {
                Category::normalize(&item.card)
                    .map(|category| ClassificationItem::new(item.natural, category))
            })
            .collect()
    }

    /// Single-intent classification: exactly one category, or `None`. Used
    /// as the second fallback stage when the multi-card call yields nothing.
    pub async fn classify_one(&self, query: &str) -> Option<Category> {
        if query.trim().is_empty() {
            return None;
        }
        let client = self.client.as_ref()?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: single_intent_system_prompt(),
                },
                Message {
                    role: "user",
                    content: single_intent_prompt(query),
                },
            ],
            temperature: 0.0,
            top_p: 1.0,
            max_tokens: SINGLE_MAX_TOKENS,
            stream: false,
            extra_body: None,
        };

        let raw = match client.complete(&request).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "single-intent classification call failed");
                return None;
            }
        };
        tracing::debug!(reply = raw.as_str(), "single-intent oracle reply");

        let word = parse_single_word(&raw);
        if word.is_empty() || word == "none" {
            return None;
        }
        Category::normalize(&word)
    }
}

/// Instructions for the multi-card call: strict JSON array of
/// `{natural, card}` objects over the closed category set, anchored by a
/// one-shot example.
fn multi_card_prompt(query: &str) -> String {
    let menu = Category::prompt_menu();
    format!(
        "You classify user queries=\"{query}\" for a personal portfolio UI. \
         From this set: {menu} — return which cards to show. \
         STRICTLY JSON OUTPUT, NO NATURAL LANGUAGE. \
         Output EXACTLY a JSON array of objects with keys \
         {{\"natural\": string, \"card\": \"Me|Projects|Skills|Experience|Contact|Resume|Education|Achievements\"}}. \
         Each object's natural must be a short, natural-sounding lead-in that fits the user's phrasing. \
         No explanation, no extra text.\n\nqueries = {{{query}}}\n\nExample:\n\
         [{{\"natural\":\"Okay let me introduce myself\",\"card\":\"Me\"}},\
         {{\"natural\":\"And here are some projects you can try\",\"card\":\"Projects\"}}]"
    )
}

fn single_intent_system_prompt() -> String {
    format!(
        "You classify queries for a personal portfolio. Answer in ONE WORD ONLY from this set: {}. \
         No punctuation, no extra text.",
        Category::prompt_menu()
    )
}

fn single_intent_prompt(query: &str) -> String {
    format!(
        "Answer in one word: What is the user asking for in this query: \"{query}\"? Options: [{}]",
        Category::prompt_menu()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(endpoint: &str, api_key: Option<&str>) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: endpoint.into(),
            api_key: api_key.map(Into::into),
            model: "nvidia/nvidia-nemotron-nano-9b-v2".into(),
        }
    }

    fn oracle_reply(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"content": content}}]
        })
    }

    #[tokio::test]
    async fn classify_parses_object_array_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "temperature": 0.0,
                "top_p": 1.0,
                "max_tokens": 128,
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply(
                r#"[{"natural":"Let me introduce myself","card":"Me"},{"natural":"Here's my work","card":"Projects"}]"#,
            )))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("test-key")));
        let items = classifier.classify("who are you and what do you build?").await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, Category::Me);
        assert_eq!(items[0].lead_in, "Let me introduce myself");
        assert_eq!(items[1].category, Category::Projects);
    }

    #[tokio::test]
    async fn classify_accepts_bare_string_arrays() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(oracle_reply(r#"["skills","contact"]"#)),
            )
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        let items = classifier.classify("skills and contact please").await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, Category::Skills);
        assert!(items[0].lead_in.is_empty());
        assert_eq!(items[1].category, Category::Contact);
    }

    #[tokio::test]
    async fn classify_salvages_prose_wrapped_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply(
                r#"Here you go: [{"natural":"Sure","card":"resume"}] — anything else?"#,
            )))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        let items = classifier.classify("show me the cv").await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Resume);
    }

    #[tokio::test]
    async fn classify_repairs_truncated_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply(
                r#"[{"natural":"x","card":"me"}"#,
            )))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        let items = classifier.classify("hello").await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Me);
    }

    #[tokio::test]
    async fn classify_drops_unknown_categories() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply(
                r#"[{"natural":"a","card":"hobbies"},{"natural":"b","card":"Awards"}]"#,
            )))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        let items = classifier.classify("what do you do for fun?").await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Achievements);
    }

    #[tokio::test]
    async fn classify_uses_reasoning_content_when_content_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {
                    "content": "",
                    "reasoning_content": r#"[{"natural":"ok","card":"education"}]"#
                }}]
            })))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        let items = classifier.classify("where did you study?").await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Education);
    }

    #[tokio::test]
    async fn classify_returns_empty_on_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        assert!(classifier.classify("anything").await.is_empty());
    }

    #[tokio::test]
    async fn classify_returns_empty_without_api_key() {
        let classifier = RemoteClassifier::from_config(&config("https://example.com/v1", None));
        assert!(classifier.is_fallback_only());
        assert!(classifier.classify("anything").await.is_empty());
    }

    #[tokio::test]
    async fn classify_skips_remote_call_for_empty_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply("[]")))
            .expect(0)
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        assert!(classifier.classify("").await.is_empty());
        assert!(classifier.classify("   ").await.is_empty());
    }

    #[tokio::test]
    async fn classify_one_maps_one_word_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"max_tokens": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply("Projects.")))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        assert_eq!(
            classifier.classify_one("what have you built?").await,
            Some(Category::Projects)
        );
    }

    #[tokio::test]
    async fn classify_one_maps_none_and_unknown_to_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(oracle_reply("none")))
            .mount(&server)
            .await;

        let classifier = RemoteClassifier::from_config(&config(&server.uri(), Some("k")));
        assert_eq!(classifier.classify_one("mmm").await, None);
    }

    #[tokio::test]
    async fn classify_one_returns_none_on_transport_failure() {
        // Point at a closed port - connection refused.
        let classifier =
            RemoteClassifier::from_config(&config("http://127.0.0.1:9/v1", Some("k")));
        assert_eq!(classifier.classify_one("resume?").await, None);
    }

    #[test]
    fn multi_card_prompt_embeds_query_and_menu() {
        let prompt = multi_card_prompt("show skills");
        assert!(prompt.contains("show skills"));
        assert!(prompt.contains("Me, Projects, Skills"));
        assert!(prompt.contains("Example:"));
    }
}
