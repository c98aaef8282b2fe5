use owo_colors::OwoColorize;

use super::interactive::confirm_destructive;
use super::{AppContext, CommandOutput};
use crate::cli::OutputOptions;
use crate::display::format_notification_line;
use crate::error::Result;

pub async fn cmd_notifications_list(unread: bool, output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    let mut notifications = ctx.client.notifications().await?;
    if unread {
        notifications.retain(|n| !n.read);
    }

    let text = if notifications.is_empty() {
        "No notifications.".to_string()
    } else {
        notifications
            .iter()
            .map(format_notification_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(serde_json::to_value(&notifications)?)
        .with_text(text)
        .print(output)
}

pub async fn cmd_notifications_read(id: u64) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    ctx.client.mark_notification_read(id).await?;
    println!("Marked notification {} as read", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_notifications_archive(id: u64) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    ctx.client.archive_notification(id).await?;
    println!("Archived notification {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_notifications_delete(id: u64, yes: bool) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    if !confirm_destructive(&format!("Delete notification #{id}"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.delete_notification(id).await?;
    println!("Deleted notification {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_notifications_read_all() -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    ctx.client.mark_all_notifications_read().await?;
    println!("Marked all notifications as read");
    Ok(())
}
