//! Login command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::sync::Arc;

use serde_json::Value;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::{AuthApi, AuthToken, CondoClient};
use crate::error::Result;
use crate::session::MemoryTokenStore;

/// Outcome of a login attempt
#[derive(Debug)]
pub struct LoginSummary {
    pub username: String,
    /// Token now held by the store, if the response carried one
    pub token: Option<AuthToken>,
    /// Raw response body
    pub body: Value,
}

/// Log in through `client`.
///
/// The reported token is the one taken from this response; a token stored by
/// an earlier login is not reported.
pub async fn authenticate<C: AuthApi + ?Sized>(
    client: &C,
    username: &str,
    password: &str,
) -> Result<LoginSummary> {
    let body = client.login(username, password).await?;
    let token = AuthToken::from_login_body(&body);

    if token.is_none() {
        log::warn!("Login response for {} carried no token", username);
    }

    Ok(LoginSummary {
        username: username.to_string(),
        token,
        body,
    })
}

/// Run the login command
///
/// With `no_save` the token is kept in memory only, so the session file is
/// left as it was.
pub async fn run(
    ctx: &CommandContext,
    username: Option<String>,
    password: Option<String>,
    no_save: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(u) => u,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    let summary = if no_save {
        let client =
            CondoClient::with_base_url(ctx.client.base_url(), Arc::new(MemoryTokenStore::new()))?
                .missing_token_header(ctx.missing_token);
        authenticate(&client, &username, &password).await?
    } else {
        authenticate(&ctx.client, &username, &password).await?
    };
    let saved_to = (!no_save).then(|| ctx.store.path().display().to_string());

    match ctx.format {
        OutputFormat::Json => crate::output::print_value(&summary.body, ctx.format)?,
        OutputFormat::Table => {
            for line in summary_lines(&summary, saved_to.as_deref()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Human-readable result lines for table output
pub fn summary_lines(summary: &LoginSummary, saved_to: Option<&str>) -> Vec<String> {
    match &summary.token {
        Some(token) => vec![
            format!(
                "{} Logged in as {}",
                "✓".green(),
                summary.username.bold()
            ),
            format!("  Token: {}", token.masked()),
            match saved_to {
                Some(path) => format!("  Saved to {}", path.cyan()),
                None => "  Not saved (--no-save)".dimmed().to_string(),
            },
        ],
        None => vec![
            format!(
                "{} Login succeeded for {} but no token was returned",
                "⚠".yellow(),
                summary.username.bold()
            ),
            "  Authorized requests will be sent without a valid token".to_string(),
        ],
    }
}
