use owo_colors::OwoColorize;

use super::interactive::read_password;
use super::{AppContext, CommandOutput};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::utils::validation::{validate_email, validate_password};

pub async fn cmd_auth_login(email: &str) -> Result<()> {
    validate_email(email)?;
    let password = read_password()?;

    let ctx = AppContext::load()?;
    ctx.client.sign_in(email.trim(), &password).await?;
    println!("Signed in as {}", email.trim().cyan());
    Ok(())
}

pub async fn cmd_auth_signup(email: &str, name: &str) -> Result<()> {
    validate_email(email)?;
    let password = read_password()?;
    validate_password(&password)?;

    let ctx = AppContext::load()?;
    ctx.client.sign_up(email.trim(), &password, name.trim()).await?;
    println!("Created account {}", email.trim().cyan());
    Ok(())
}

pub async fn cmd_auth_logout() -> Result<()> {
    let ctx = AppContext::load()?;
    if !ctx.session().is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }
    ctx.client.sign_out().await?;
    println!("Signed out");
    Ok(())
}

pub async fn cmd_auth_whoami(output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let user = ctx.client.me().await?;

    let text = match &user.name {
        Some(name) => format!("{} <{}>", name.bold(), user.email),
        None => user.email.clone(),
    };
    CommandOutput::new(serde_json::to_value(&user)?)
        .with_text(text)
        .print(output)
}
