use clap::Parser;

use helix_sim::cli::{self, ChatArgs, Cli, Command, FormatArg};
use helix_sim::error::{Error, Result};
use helix_sim::models::{DelayRange, DemoRequest};
use helix_sim::output::{self, formatter_for};
use helix_sim::sim::DemoSimulator;
use helix_sim::{catalog, pricing};

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Command::Chat(chat) => run_chat(chat).await,
        Command::Price(price) => {
            let quote = pricing::price_for(price.requests);
            let formatter = formatter_for(price.format);
            print!("{}", formatter.quote(price.requests, &quote)?);
            Ok(())
        }
        Command::Models { format } => {
            let formatter = formatter_for(format);
            print!("{}", formatter.models(&catalog::model_listing())?);
            Ok(())
        }
        Command::Prompts => {
            for prompt in catalog::EXAMPLE_PROMPTS {
                println!("Try: {}", prompt);
            }
            Ok(())
        }
    }
}

async fn run_chat(args: ChatArgs) -> Result<()> {
    let config = cli::build_demo_config(&args)?;
    let request = DemoRequest {
        message: args.message.clone(),
        model: config.model.clone(),
    };
    let simulator = DemoSimulator::new(config);
    let result = simulator.simulate(&request).await?;

    if args.stream && args.format == FormatArg::Human {
        let config = simulator.config();
        let word_delay = if config.response_delay().is_zero() {
            DelayRange::none()
        } else {
            output::WORD_DELAY_MS
        };
        let mut rng = config.rng();
        output::stream_words(&result.reply, word_delay, &mut rng)
            .await
            .map_err(|err| Error::Io(err.to_string()))?;
        println!();
        print!("{}", output::chat_footer(&result));
    } else {
        let formatter = formatter_for(args.format);
        print!("{}", formatter.chat(&result)?);
    }

    Ok(())
}
