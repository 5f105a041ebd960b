//! Built-in demo collections used when the config file provides none.

use super::types::{AiService, AiServiceStatus, MigrationRecord, MigrationState};
use crate::registry::{Component, ComponentStatus};
use chrono::{DateTime, Duration, Utc};

/// Demo component registry, `last_seen` offset back from `now`.
pub fn demo_components(now: DateTime<Utc>) -> Vec<Component> {
    vec![
        Component::new("omnicognitor", "OmniCognitor", "chat", now - Duration::minutes(2))
            .with_status(ComponentStatus::Online)
            .with_url("https://omnicognitor.vercel.app")
            .with_health(98)
            .with_requests_per_hour(234),
        Component::new(
            "ai-agent-dev",
            "AI Agent Development",
            "agent",
            now - Duration::minutes(1),
        )
        .with_status(ComponentStatus::Online)
        .with_url("https://ai-agent-dev.netlify.app")
        .with_health(95)
        .with_requests_per_hour(156),
        Component::new(
            "wellness-companion",
            "Personal Wellness Companion",
            "wellness",
            now - Duration::minutes(3),
        )
        .with_status(ComponentStatus::Online)
        .with_url("https://wellness-companion.vercel.app")
        .with_health(97)
        .with_requests_per_hour(89),
        Component::new(
            "m2-3m-portal",
            "M2-3M Research Portal",
            "research",
            now - Duration::minutes(10),
        ),
        Component::new(
            "telemedicine-hub",
            "Telemedicine Hub",
            "medical",
            now - Duration::minutes(15),
        ),
    ]
}

pub fn demo_ai_services() -> Vec<AiService> {
    vec![
        AiService {
            name: "OpenAI".to_string(),
            status: AiServiceStatus::Active,
            requests_per_hour: 234,
            response_time: 145,
            cost_per_hour: 2.45,
        },
        AiService {
            name: "Anthropic Claude".to_string(),
            status: AiServiceStatus::Active,
            requests_per_hour: 156,
            response_time: 167,
            cost_per_hour: 1.89,
        },
        AiService {
            name: "Google Gemini".to_string(),
            status: AiServiceStatus::Active,
            requests_per_hour: 89,
            response_time: 134,
            cost_per_hour: 0.67,
        },
    ]
}

pub fn demo_migrations() -> Vec<MigrationRecord> {
    let record = |component: &str, target: &str, progress: u8, status: MigrationState| {
        MigrationRecord {
            component: component.to_string(),
            target: target.to_string(),
            progress,
            status,
        }
    };

    vec![
        record("OmniCognitor Frontend", "Vercel", 100, MigrationState::Complete),
        record("OmniCognitor Backend", "Railway", 100, MigrationState::Complete),
        record("AI Agent Development", "Netlify", 75, MigrationState::InProgress),
        record("Wellness Companion", "Vercel", 60, MigrationState::InProgress),
        record("M2-3M Research Portal", "Firebase", 0, MigrationState::Pending),
    ]
}
