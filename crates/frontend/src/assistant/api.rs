//! Сетевой слой AI-ассистента: REST-вызовы generateContent.
//!
//! Ключ API берётся из localStorage; его отсутствие — не паника, а
//! штатная деградация (карточка N/A, фиксированный ответ чата).

use contracts::shared::assistant::{parse_insights_or_degraded, ChatRole, ChatTurn, Insight};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::window;

const MODEL: &str = "gemini-3-flash-preview";
const API_KEY_STORAGE_KEY: &str = "procuresmart.api_key";

const INSIGHTS_SYSTEM_PROMPT: &str = "You are a professional procurement consultant. \
Based on the following procurement data, provide 3 actionable insights for cost \
reduction or efficiency improvement. Format as JSON with an \"insights\" array of \
objects {title, description, impact} where impact is High, Medium or Low.";

const CHAT_SYSTEM_PROMPT: &str = "You are ProcureSmart AI, a specialist in supply \
chain management and procurement. Help the user with vendor selection, cost \
analysis, and procurement workflows. Be concise and professional.";

fn api_key() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_KEY_STORAGE_KEY).ok().flatten())
        .filter(|k| !k.trim().is_empty())
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn user_content(text: &str) -> Content {
    Content {
        role: Some("user".to_string()),
        parts: vec![Part { text: text.to_string() }],
    }
}

async fn generate(request: &GenerateRequest) -> Result<String, String> {
    let key = api_key().ok_or("未配置 API Key")?;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        MODEL,
        urlencoding::encode(&key)
    );

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let text: String = parsed
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err("模型返回了空结果".to_string());
    }
    Ok(text)
}

/// Запросить рекомендации по сводке закупок. Никогда не возвращает
/// ошибку: любой сбой сведён к единственной карточке N/A.
pub async fn fetch_insights(context: &str) -> Vec<Insight> {
    let request = GenerateRequest {
        contents: vec![user_content(&format!("Data Context: {}", context))],
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: INSIGHTS_SYSTEM_PROMPT.to_string() }],
        },
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
        }),
    };

    match generate(&request).await {
        Ok(body) => parse_insights_or_degraded(Ok(&body)),
        Err(e) => {
            log::warn!("insights request failed: {}", e);
            parse_insights_or_degraded(Err(&e))
        }
    }
}

/// Отправить сообщение в чат с учётом предыдущих реплик.
pub async fn send_chat(history: &[ChatTurn], message: &str) -> Result<String, String> {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|turn| Content {
            role: Some(
                match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                }
                .to_string(),
            ),
            parts: vec![Part { text: turn.content.clone() }],
        })
        .collect();
    contents.push(user_content(message));

    let request = GenerateRequest {
        contents,
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: CHAT_SYSTEM_PROMPT.to_string() }],
        },
        generation_config: None,
    };

    generate(&request).await
}
