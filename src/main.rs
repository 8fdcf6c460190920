use clap::Parser;
use miette::{IntoDiagnostic, Result};
use onecharge::application::payment::Payment;
use onecharge::config::GatewayConfig;
use onecharge::domain::ports::{ChargeGatewayBox, ThankYouNotifierBox};
use onecharge::infrastructure::mailer::ThankYouMailer;
use onecharge::infrastructure::stripe::StripeGateway;
use onecharge::interfaces::csv::request_reader::RequestReader;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input charge requests CSV file
    input: PathBuf,

    /// Gateway base URL override (defaults to STRIPE_API_BASE or the live API)
    #[arg(long)]
    api_base: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env().into_diagnostic()?;
    if let Some(api_base) = cli.api_base {
        config.base_url = api_base;
    }

    let gateway: ChargeGatewayBox = Box::new(StripeGateway::new(config).into_diagnostic()?);
    let notifier: ThankYouNotifierBox = Box::new(ThankYouMailer::new());
    let payment = Payment::new(gateway, notifier);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => {
                let outcome = payment.attempt(&request).await;
                println!("{outcome}");
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    Ok(())
}
