use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use lostfound::cli::{
    AuthAction, ClaimsAction, Cli, Commands, ConfigAction, ItemsAction, KeywordsAction,
    NotificationsAction, generate_completions,
};
use lostfound::commands::{
    ItemsListOptions, RegisterOptions, cmd_auth_login, cmd_auth_logout, cmd_auth_signup,
    cmd_auth_whoami, cmd_browse, cmd_claims_approve, cmd_claims_item, cmd_claims_received,
    cmd_claims_reject, cmd_claims_request, cmd_claims_sent, cmd_config_get, cmd_config_set,
    cmd_config_show, cmd_dashboard, cmd_items_delete, cmd_items_list, cmd_items_mine,
    cmd_items_register, cmd_items_show, cmd_keywords_add, cmd_keywords_delete, cmd_keywords_list,
    cmd_keywords_reactivate, cmd_notifications_archive, cmd_notifications_delete,
    cmd_notifications_list, cmd_notifications_read, cmd_notifications_read_all,
};

const LOG_ENV: &str = "LOSTFOUND_LOG";

/// Log to stderr. The browser owns the terminal, so it only logs when asked to.
fn init_logging(cli: &Cli) {
    let explicit = std::env::var(LOG_ENV).is_ok_and(|v| !v.is_empty());
    if matches!(cli.command, Commands::Browse { .. }) && !explicit {
        return;
    }

    let default = if cli.verbose > 0 { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        Commands::Items { action } => match action {
            ItemsAction::List {
                listing,
                page,
                sort,
                view,
                output,
            } => {
                cmd_items_list(
                    ItemsListOptions {
                        listing,
                        page,
                        sort,
                        view,
                    },
                    output,
                )
                .await
            }
            ItemsAction::Show { id, output } => cmd_items_show(id, output).await,
            ItemsAction::Register {
                name,
                category,
                location,
                found_date,
                description,
                brand,
                image_url,
                output,
            } => {
                cmd_items_register(
                    RegisterOptions {
                        name,
                        category,
                        location,
                        found_date,
                        description,
                        brand,
                        image_url,
                    },
                    output,
                )
                .await
            }
            ItemsAction::Delete { id, yes } => cmd_items_delete(id, yes).await,
            ItemsAction::Mine { output } => cmd_items_mine(output).await,
        },

        Commands::Browse { listing } => cmd_browse(listing).await,

        Commands::Claims { action } => match action {
            ClaimsAction::Request {
                item_id,
                message,
                output,
            } => cmd_claims_request(item_id, &message, output).await,
            ClaimsAction::Approve { id } => cmd_claims_approve(id).await,
            ClaimsAction::Reject { id, yes } => cmd_claims_reject(id, yes).await,
            ClaimsAction::Item { item_id, output } => cmd_claims_item(item_id, output).await,
            ClaimsAction::Received { output } => cmd_claims_received(output).await,
            ClaimsAction::Sent { output } => cmd_claims_sent(output).await,
        },

        Commands::Keywords { action } => match action {
            KeywordsAction::Add { keyword, output } => cmd_keywords_add(&keyword, output).await,
            KeywordsAction::List { all, output } => cmd_keywords_list(all, output).await,
            KeywordsAction::Delete { id, yes } => cmd_keywords_delete(id, yes).await,
            KeywordsAction::Reactivate { id } => cmd_keywords_reactivate(id).await,
        },

        Commands::Notifications { action } => match action {
            NotificationsAction::List { unread, output } => {
                cmd_notifications_list(unread, output).await
            }
            NotificationsAction::Read { id } => cmd_notifications_read(id).await,
            NotificationsAction::Archive { id } => cmd_notifications_archive(id).await,
            NotificationsAction::Delete { id, yes } => cmd_notifications_delete(id, yes).await,
            NotificationsAction::ReadAll => cmd_notifications_read_all().await,
        },

        Commands::Auth { action } => match action {
            AuthAction::Login { email } => cmd_auth_login(&email).await,
            AuthAction::Signup { email, name } => cmd_auth_signup(&email, &name).await,
            AuthAction::Logout => cmd_auth_logout().await,
            AuthAction::Whoami { output } => cmd_auth_whoami(output).await,
        },

        Commands::Dashboard { output } => cmd_dashboard(output).await,

        Commands::Config { action } => match action {
            ConfigAction::Show { output } => cmd_config_show(output),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
