//! Personal dashboard: my items, claims, keywords and unread notifications.

use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::cli::OutputOptions;
use crate::display::{
    format_claim_status_colored, format_item_line, format_keyword_line, format_notification_line,
};
use crate::error::Result;
use crate::types::ClaimStatus;

/// Rows shown per section before eliding
const SECTION_LIMIT: usize = 5;

pub async fn cmd_dashboard(output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let api = &ctx.client;

    let (user, items, received, sent, keywords, notifications) = futures::try_join!(
        api.me(),
        api.my_items(),
        api.received_claims(),
        api.sent_claims(),
        api.keywords(),
        api.notifications(),
    )?;

    let unread: Vec<_> = notifications.iter().filter(|n| !n.read).collect();
    let pending_received = received
        .iter()
        .filter(|c| c.status == ClaimStatus::Pending)
        .count();

    let json_output = json!({
        "user": user,
        "items": items,
        "claims_received": received,
        "claims_sent": sent,
        "keywords": keywords,
        "unread_notifications": unread,
    });

    let mut text = String::new();
    text.push_str(&format!(
        "{} {}\n",
        "Dashboard for".dimmed(),
        user.name.as_deref().unwrap_or(&user.email).bold()
    ));

    section(&mut text, "My items", items.len());
    for item in items.iter().take(SECTION_LIMIT) {
        text.push_str(&format!("  {}\n", format_item_line(item)));
    }
    elide(&mut text, items.len());

    section(&mut text, "Claims received", received.len());
    if pending_received > 0 {
        text.push_str(&format!(
            "  {}\n",
            format!("{pending_received} awaiting your decision").yellow()
        ));
    }
    for claim in received.iter().take(SECTION_LIMIT) {
        text.push_str(&format!(
            "  #{} on item #{} {}\n",
            claim.id,
            claim.item_id,
            format_claim_status_colored(claim.status)
        ));
    }
    elide(&mut text, received.len());

    section(&mut text, "Claims sent", sent.len());
    for claim in sent.iter().take(SECTION_LIMIT) {
        text.push_str(&format!(
            "  #{} on item #{} {}\n",
            claim.id,
            claim.item_id,
            format_claim_status_colored(claim.status)
        ));
    }
    elide(&mut text, sent.len());

    section(&mut text, "Watch keywords", keywords.len());
    for keyword in keywords.iter().take(SECTION_LIMIT) {
        text.push_str(&format!("  {}\n", format_keyword_line(keyword)));
    }
    elide(&mut text, keywords.len());

    section(&mut text, "Unread notifications", unread.len());
    for notification in unread.iter().take(SECTION_LIMIT) {
        text.push_str(&format!("  {}\n", format_notification_line(notification)));
    }
    elide(&mut text, unread.len());

    CommandOutput::new(json_output)
        .with_text(text.trim_end().to_string())
        .print(output)
}

fn section(text: &mut String, title: &str, count: usize) {
    text.push_str(&format!("\n{} ({count})\n", title.cyan().bold()));
}

fn elide(text: &mut String, total: usize) {
    if total > SECTION_LIMIT {
        text.push_str(&format!(
            "  {}\n",
            format!("... and {} more", total - SECTION_LIMIT).dimmed()
        ));
    }
}
