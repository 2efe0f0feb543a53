//! Session commands: login, whoami, logout.

use std::io::BufRead;

use marigold_client::ApiClient;
use marigold_core::Email;
use secrecy::SecretString;

use super::emit;

/// Log in and persist the returned token.
///
/// The password is taken from the `--password` flag when given, otherwise
/// read as one line from stdin (so it can be piped in without ending up in
/// shell history).
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;

    let password = match password {
        Some(password) => password,
        None => read_password_from_stdin()?,
    };

    let response = client
        .login(&email, &SecretString::from(password))
        .await?;

    tracing::info!(
        "Logged in as {} ({})",
        response.user.display_name(),
        response.user.role
    );

    Ok(())
}

/// Show the currently authenticated user.
pub async fn whoami(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let user = client.me().await?;
    emit(&user)
}

/// Clear the persisted token.
pub async fn logout(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    client.logout().await?;
    tracing::info!("Logged out");
    Ok(())
}

fn read_password_from_stdin() -> Result<String, Box<dyn std::error::Error>> {
    tracing::info!("Reading password from stdin");

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let password = line.trim_end_matches(['\r', '\n']).to_owned();
    if password.is_empty() {
        return Err("empty password".into());
    }

    Ok(password)
}
