// Log in to a Cognito user pool, verify the returned ID token and revoke
// the refresh token. One linear pipeline; the first failure terminates the
// run with a category-specific exit code.

use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use log::info;

use cognito_login::cognito::{AuthRequest, CognitoClient};
use cognito_login::config::Config;
use cognito_login::error::LoginError;
use cognito_login::secret_hash::secret_hash;
use cognito_login::verify;

/// Authenticate against a Cognito user pool and print the verified ID token claims
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Username in the user pool
    username: String,

    /// Password for the user
    password: String,

    /// AWS region override (defaults to the region encoded in POOL_ID)
    #[arg(long)]
    region: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Disable all logging output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Bad invocations report usage on stdout and exit with status 1
            println!("{}", err.render());
            process::exit(1);
        }
    };

    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<(), LoginError> {
    let config = Config::from_env(args.region)?;

    let request = AuthRequest {
        secret_hash: secret_hash(&args.username, &config.client_id, &config.client_secret),
        username: args.username,
        password: args.password,
    };

    let client = CognitoClient::new(&config);
    info!(
        "authenticating '{}' against pool {}",
        request.username, config.pool_id
    );
    let tokens = client.initiate_auth(&config.client_id, &request).await?;

    let jwks = verify::fetch_jwks(client.http(), &config.jwks_url()).await?;
    let claims =
        verify::verify_id_token(&tokens.id_token, &jwks, &config.client_id, &config.issuer())?;
    verify::check_expiration(&claims)?;
    info!("ID token verified for subject {}", claims.sub);

    let output = serde_json::to_string_pretty(&claims).map_err(|e| LoginError::Output {
        reason: e.to_string(),
    })?;
    println!("{}", output);

    client.revoke_token(&tokens.refresh_token, &config).await?;
    info!("refresh token revoked");

    Ok(())
}
