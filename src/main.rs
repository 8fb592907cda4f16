use std::process::ExitCode;

use clap::Parser;
use login_form::config::{ConfigError, LoginConfig};
use login_form::form::LoginForm;
use login_form::net::api::{FetchError, HttpUserSource};
use login_form::pages::login::LoginSurface;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("login button is disabled; pass a non-empty --username and --password")]
    EmptyCredentials,
}

#[derive(Parser, Debug)]
#[command(name = "login-form", about = "Fill in the login form, submit it once, and print what it renders")]
struct Cli {
    #[arg(long, env = "LOGIN_USERNAME", default_value = "")]
    username: String,

    #[arg(long, env = "LOGIN_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    /// Overrides `LOGIN_USER_ENDPOINT` and the built-in demo URL.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(surface) if surface.error.visible => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "login-form failed");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<LoginSurface, CliError> {
    let config = match cli.endpoint {
        Some(endpoint) => LoginConfig::from_lookup(|_| Some(endpoint.clone()))?,
        None => LoginConfig::from_env()?,
    };
    let source = HttpUserSource::from_config(&config)?;
    tracing::info!(endpoint = source.endpoint(), "login form mounted");

    let form = LoginForm::new(source);
    form.input_username(cli.username);
    form.input_password(cli.password);

    let before = form.surface();
    println!("{before}\n");
    if before.button().disabled {
        return Err(CliError::EmptyCredentials);
    }

    form.submit().await;

    let after = form.surface();
    println!("{after}");
    Ok(after)
}
