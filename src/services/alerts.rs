use crate::dataset::Dataset;
use crate::domain::models::{AlertFeed, AlertView, BroadcastNotice};
use crate::domain::records::{Alert, AlertKind};
use chrono::{DateTime, Utc};

pub fn filter_alerts(dataset: &Dataset, kind: Option<AlertKind>, unread_only: bool) -> Vec<&Alert> {
    let mut out: Vec<&Alert> = dataset
        .alerts
        .iter()
        .filter(|a| kind.map(|k| k == a.kind).unwrap_or(true))
        .filter(|a| !unread_only || !a.is_read)
        .collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
    out
}

pub fn unread_count(dataset: &Dataset) -> usize {
    dataset.alerts.iter().filter(|a| !a.is_read).count()
}

/// "Just now" under an hour, "Nh ago" under a day, else a short date.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        timestamp.format("%b %-d").to_string()
    }
}

pub fn alert_feed(
    dataset: &Dataset,
    kind: Option<AlertKind>,
    unread_only: bool,
    now: DateTime<Utc>,
) -> AlertFeed {
    AlertFeed {
        unread: unread_count(dataset),
        alerts: filter_alerts(dataset, kind, unread_only)
            .into_iter()
            .map(|a| AlertView {
                id: a.id.clone(),
                lake_id: a.lake_id.clone(),
                lake_name: a.lake_name.clone(),
                kind: a.kind,
                title: a.title.clone(),
                message: a.message.clone(),
                timestamp: a.timestamp,
                age: relative_age(a.timestamp, now),
                is_read: a.is_read,
            })
            .collect(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Builds the SMS broadcast notice for a lake's downstream communities.
/// Nothing is sent; there is no gateway behind this.
pub fn broadcast_notice(dataset: &Dataset, lake_id: &str) -> anyhow::Result<BroadcastNotice> {
    let lake = dataset.lake(lake_id)?;
    let message = format!(
        "Emergency SMS broadcast initiated. Alerts being sent to {}+ residents in downstream communities of {}.",
        group_thousands(lake.downstream_population),
        lake.name
    );
    tracing::info!(
        lake = %lake.id,
        recipients = lake.downstream_population,
        "simulated sms broadcast"
    );
    Ok(BroadcastNotice {
        lake_id: lake.id.clone(),
        lake_name: lake.name.clone(),
        recipients: lake.downstream_population,
        message,
        simulated: true,
    })
}
