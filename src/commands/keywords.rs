use owo_colors::OwoColorize;
use serde_json::json;

use super::interactive::confirm_destructive;
use super::{AppContext, CommandOutput};
use crate::cli::OutputOptions;
use crate::display::format_keyword_line;
use crate::error::Result;
use crate::utils::validation::validate_keyword;

pub async fn cmd_keywords_add(keyword: &str, output: OutputOptions) -> Result<()> {
    // Length checks need no network; duplicates need the current list.
    validate_keyword(keyword, &[])?;

    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    let existing = ctx.client.keywords().await?;
    let keyword = validate_keyword(keyword, &existing)?;
    let created = ctx.client.add_keyword(&keyword).await?;

    CommandOutput::new(json!({
        "action": "keyword_added",
        "keyword": created,
    }))
    .with_text(format!("Watching '{}'", created.keyword.green()))
    .print(output)
}

pub async fn cmd_keywords_list(all: bool, output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    let keywords = if all {
        ctx.client.all_keywords().await?
    } else {
        ctx.client.keywords().await?
    };

    let text = if keywords.is_empty() {
        "No watch keywords.".to_string()
    } else {
        keywords
            .iter()
            .map(format_keyword_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(serde_json::to_value(&keywords)?)
        .with_text(text)
        .print(output)
}

pub async fn cmd_keywords_delete(id: u64, yes: bool) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    if !confirm_destructive(&format!("Stop watching keyword #{id}"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.delete_keyword(id).await?;
    println!("Deactivated keyword {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_keywords_reactivate(id: u64) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    ctx.client.reactivate_keyword(id).await?;
    println!("Reactivated keyword {}", format!("#{id}").cyan());
    Ok(())
}
