use anyhow::{Context, Result, bail};
use berkas_lib::{
    ApiResponse, AppConfig, AppState, init_logging,
    presentation::dto::{auth_dto::LoginRequest, case_detail_dto::CaseDetailRequest},
};
use std::env;
use tokio::runtime::Runtime;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    case_id: String,
    pretty: bool,
}

fn usage() -> &'static str {
    "Usage: berkas-case-report --case <id> [--pretty]\n\
     Credentials are read from BERKAS_EMAIL and BERKAS_PASSWORD."
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(args)?;

    let config = AppConfig::from_env();
    init_logging(&config.logging.filter);

    let email = env::var("BERKAS_EMAIL").context("BERKAS_EMAIL is not set")?;
    let password = env::var("BERKAS_PASSWORD").context("BERKAS_PASSWORD is not set")?;

    let runtime = Runtime::new().context("Failed to start tokio runtime")?;
    let payload = runtime.block_on(async move {
        let state = AppState::new(config).context("Invalid configuration")?;
        state
            .auth_handler
            .login(LoginRequest { email, password })
            .await
            .context("Login failed")?;

        let result = state
            .case_detail_handler
            .get_case_detail(CaseDetailRequest {
                case_id: options.case_id.clone(),
            })
            .await;
        state.auth_handler.logout().await.ok();

        let response = ApiResponse::from_result(result);
        let json = if options.pretty {
            serde_json::to_string_pretty(&response)
        } else {
            serde_json::to_string(&response)
        };
        json.context("Failed to serialize report")
    })?;

    println!("{payload}");
    Ok(())
}

fn parse_args<I>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut case_id: Option<String> = None;
    let mut pretty = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--case" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--case requires an id\n{}", usage()))?;
                case_id = Some(value);
            }
            "--pretty" => {
                pretty = true;
            }
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {other}\n{}", usage()),
        }
    }

    let case_id = match case_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => bail!("--case is required\n{}", usage()),
    };
    Ok(CliOptions { case_id, pretty })
}
