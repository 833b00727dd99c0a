//! Типы и разбор ответов AI-ассистента.
//!
//! Сетевой слой живёт во frontend; здесь только чистые структуры и парсинг,
//! чтобы деградация при ошибках была проверяема без wasm.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Уровень влияния рекомендации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
    /// Деградированная карточка при ошибке коллаборатора
    #[serde(rename = "N/A")]
    NA,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
            Impact::NA => "N/A",
        }
    }
}

/// Рекомендация ассистента. Эфемерна: каждый запрос заменяет список целиком.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

impl Insight {
    /// Единственная карточка, показываемая при любом сбое коллаборатора.
    pub fn degraded(detail: &str) -> Self {
        Self {
            title: "加载失败".to_string(),
            description: format!("无法获取 AI 洞察：{detail}"),
            impact: Impact::NA,
        }
    }
}

/// Роль реплики в диалоге.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Одна реплика диалога с ассистентом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Фиксированный ответ чата при недоступном сервисе.
pub const CHAT_UNAVAILABLE: &str = "AI 服务暂时不可用。";

#[derive(Deserialize)]
struct InsightEnvelope {
    insights: Vec<Insight>,
}

/// Разобрать JSON-ответ модели со списком рекомендаций.
pub fn parse_insights(body: &str) -> anyhow::Result<Vec<Insight>> {
    let envelope: InsightEnvelope =
        serde_json::from_str(body).context("insights response is not valid JSON")?;
    Ok(envelope.insights)
}

/// Разбор с деградацией: любой сбой превращается ровно в одну карточку N/A.
pub fn parse_insights_or_degraded(body: Result<&str, &str>) -> Vec<Insight> {
    match body {
        Ok(text) => match parse_insights(text) {
            Ok(insights) if !insights.is_empty() => insights,
            Ok(_) => vec![Insight::degraded("模型返回了空结果")],
            Err(e) => vec![Insight::degraded(&e.to_string())],
        },
        Err(e) => vec![Insight::degraded(e)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_insights() {
        let body = r#"{"insights":[
            {"title":"整合办公用品供应商","description":"合并三家低额供应商可降低约8%成本。","impact":"High"},
            {"title":"提前锁定物流价格","description":"Q4 运费上涨前签订年度合同。","impact":"Medium"}
        ]}"#;
        let insights = parse_insights(body).unwrap();
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].impact, Impact::High);
    }

    #[test]
    fn collaborator_failure_degrades_to_single_na_card() {
        let insights = parse_insights_or_degraded(Err("HTTP 503"));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].impact, Impact::NA);
        assert!(!insights[0].title.is_empty());
    }

    #[test]
    fn malformed_json_degrades_the_same_way() {
        let insights = parse_insights_or_degraded(Ok("not json at all"));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].impact, Impact::NA);
    }

    #[test]
    fn impact_na_serializes_as_slash_string() {
        let json = serde_json::to_string(&Impact::NA).unwrap();
        assert_eq!(json, "\"N/A\"");
    }
}
