use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::{
    api,
    config::ServerConfig,
    contact::ResendClient,
    form::{ContactClient, ContactForm, ToastVariant, DEFAULT_SITE_URL},
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site backend: relays contact-form messages by email")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Submit a contact message to a running server
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Site origin hosting /api/contact
        #[arg(long, default_value = DEFAULT_SITE_URL)]
        url: String,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    let provider = Arc::new(ResendClient::new(config.email_api_url.clone()));
    if std::env::var(folio::contact::API_KEY_VAR).is_err() {
        tracing::warn!(
            "{} is not set; contact submissions will fail until it is",
            folio::contact::API_KEY_VAR
        );
    }

    let app = api::create_router(config, provider);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("folio listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&host, port).await?,
        Some(Commands::Contact {
            name,
            email,
            message,
            url,
        }) => {
            let mut form = ContactForm::new(name, email, message);
            let client = ContactClient::new(url);
            let toast = form.submit(&client).await?;

            println!("{}", toast.title);
            println!("{}", toast.description);
            if toast.variant == ToastVariant::Destructive {
                anyhow::bail!("contact submission failed");
            }
        }
        None => serve("127.0.0.1", 3000).await?,
    }

    Ok(())
}
