use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment status of a component.
///
/// The set is closed: anything else arriving over the API is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// Deployed and reporting in
    Online,
    /// Deployed but not reachable
    Offline,
    /// Not yet deployed
    Pending,
    /// Reachable but not fully healthy
    Degraded,
}

impl ComponentStatus {
    pub const ALL: [ComponentStatus; 4] = [
        ComponentStatus::Online,
        ComponentStatus::Offline,
        ComponentStatus::Pending,
        ComponentStatus::Degraded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Online => "online",
            ComponentStatus::Offline => "offline",
            ComponentStatus::Pending => "pending",
            ComponentStatus::Degraded => "degraded",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(ComponentStatus::Online),
            "offline" => Ok(ComponentStatus::Offline),
            "pending" => Ok(ComponentStatus::Pending),
            "degraded" => Ok(ComponentStatus::Degraded),
            _ => Err(format!(
                "Invalid component status '{}': expected one of online, offline, pending, degraded",
                s
            )),
        }
    }
}

/// A deployed service tracked by the command center.
///
/// # Examples
///
/// ```
/// use command_center::registry::{Component, ComponentStatus};
/// use chrono::Utc;
///
/// let component = Component::new("omnicognitor", "OmniCognitor", "chat", Utc::now())
///     .with_status(ComponentStatus::Online)
///     .with_health(98);
/// assert_eq!(component.health, 98);
/// assert!(component.url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique, stable identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Current deployment status
    pub status: ComponentStatus,
    /// Free-form category tag (chat, agent, wellness, ...)
    #[serde(rename = "type")]
    pub component_type: String,
    /// Last time the component reported in
    pub last_seen: DateTime<Utc>,
    /// Deployment URL, absent until deployed
    pub url: Option<String>,
    /// Health percentage, 0-100
    pub health: u8,
    /// Throughput counter
    pub requests_per_hour: u64,
}

impl Component {
    /// Create a pending, undeployed component with zero health and traffic.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: impl Into<String>,
        last_seen: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ComponentStatus::Pending,
            component_type: component_type.into(),
            last_seen,
            url: None,
            health: 0,
            requests_per_hour: 0,
        }
    }

    pub fn with_status(mut self, status: ComponentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health;
        self
    }

    pub fn with_requests_per_hour(mut self, requests_per_hour: u64) -> Self {
        self.requests_per_hour = requests_per_hour;
        self
    }

    /// True for the conventional "not deployed yet" shape.
    pub fn looks_pending(&self) -> bool {
        self.health == 0 && self.url.is_none()
    }
}

/// A validated partial health update.
///
/// `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthUpdate {
    pub status: Option<ComponentStatus>,
    pub health: Option<u8>,
}

/// Render a last-seen instant as a short recency string relative to `now`.
///
/// ```
/// use command_center::registry::format_last_seen;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// assert_eq!(format_last_seen(now, now), "Just now");
/// assert_eq!(format_last_seen(now - Duration::minutes(2), now), "2 min ago");
/// ```
pub fn format_last_seen(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - last_seen).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hr ago", hours);
    }

    match hours / 24 {
        1 => "1 day ago".to_string(),
        days => format!("{} days ago", days),
    }
}
