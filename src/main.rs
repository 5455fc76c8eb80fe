use std::{process::ExitCode, time::Duration};

use anyhow::Context;
use clap::Parser;
use summoner_lookup::{
    config::{ClientConfig, DEFAULT_ENDPOINT},
    model::{lookup::LookupForm, region::Region},
    service::gameapi::lookup_client::LookupClient,
    ui::{repl, LookupWidget},
};
use tracing_subscriber::EnvFilter;

/// League of Legends summoner lookup
#[derive(Parser, Debug)]
#[command(name = "summoner-lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Lookup service URL
    #[arg(long, env = "LOOKUP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds to wait for the service before showing placeholder data
    #[arg(long, env = "LOOKUP_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Extra attempts on network errors, rate limits and gateway errors
    #[arg(long, env = "LOOKUP_MAX_RETRIES", default_value_t = 0)]
    max_retries: usize,

    /// Game name or GameName#TagLine to look up once, skips the interactive prompt
    #[arg(short = 'n', long = "name")]
    game_name: Option<String>,

    /// Tag line, defaults to the region's usual tag
    #[arg(short = 't', long = "tag")]
    tag_line: Option<String>,

    /// Region code (na1, euw1, eun1, kr, br1, la1, la2, oc1, tr1, ru, jp1)
    #[arg(short = 'r', long, default_value = "na1")]
    region: Region,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::with_endpoint(&self.endpoint)
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
    }

    fn form(&self) -> LookupForm {
        let mut form = LookupForm::default();
        form.select_region(self.region);
        if let Some(name) = &self.game_name {
            form.set_riot_id(name);
        }
        if let Some(tag) = &self.tag_line {
            form.set_tag_line(tag);
        }
        form
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = LookupClient::new(args.client_config()).context("failed to set up lookup client")?;
    let widget = LookupWidget::new(client);
    let form = args.form();

    if args.game_name.is_some() {
        repl::run_once(&widget, &form).await;
        return Ok(());
    }

    repl::run(widget, form).await.context("interactive session failed")
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();
    init_logging();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error occured while running lookup:\n{:#}\n", error);
            ExitCode::FAILURE
        }
    }
}
