use owo_colors::OwoColorize;
use serde_json::json;

use super::interactive::confirm_destructive;
use super::{AppContext, CommandOutput};
use crate::cli::OutputOptions;
use crate::display::{format_claim_status_colored, render_claims};
use crate::error::Result;
use crate::types::Claim;
use crate::utils::validation::validate_claim_message;

pub async fn cmd_claims_request(item_id: u64, message: &str, output: OutputOptions) -> Result<()> {
    let message = validate_claim_message(message)?;
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    let claim = ctx.client.request_claim(item_id, &message).await?;

    CommandOutput::new(json!({
        "action": "claim_requested",
        "claim": claim,
    }))
    .with_text(format!(
        "Claim {} on item {} is {}",
        format!("#{}", claim.id).cyan(),
        format!("#{item_id}").cyan(),
        format_claim_status_colored(claim.status)
    ))
    .print(output)
}

pub async fn cmd_claims_approve(id: u64) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    ctx.client.approve_claim(id).await?;
    println!("Approved claim {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_claims_reject(id: u64, yes: bool) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    if !confirm_destructive(&format!("Reject claim #{id}"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.reject_claim(id).await?;
    println!("Rejected claim {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_claims_item(item_id: u64, output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let claims = ctx.client.claims_for_item(item_id).await?;
    print_claims(&claims, "No claims on this item.", output)
}

pub async fn cmd_claims_received(output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let claims = ctx.client.received_claims().await?;
    print_claims(&claims, "No claims received.", output)
}

pub async fn cmd_claims_sent(output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let claims = ctx.client.sent_claims().await?;
    print_claims(&claims, "No claims sent.", output)
}

fn print_claims(claims: &[Claim], empty: &str, output: OutputOptions) -> Result<()> {
    let text = if claims.is_empty() {
        empty.to_string()
    } else {
        render_claims(claims)
    };
    CommandOutput::new(serde_json::to_value(claims)?)
        .with_text(text)
        .print(output)
}
