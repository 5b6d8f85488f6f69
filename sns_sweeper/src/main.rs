#![warn(clippy::all, rust_2018_idioms)]

use aws_config::{BehaviorVersion, Region};
use clap::{builder::BoolishValueParser, Parser, ValueEnum};
use log::LevelFilter;
use sns_sweeper_backend::{model::TopicArn, Cleaner, EndpointResolver};

/// Remove the subscriptions on an SNS topic whose SQS queue no longer exists.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// ARN of the topic to sweep.
    #[arg(long, env = "SNS_SWEEPER_TOPIC_ARN")]
    topic_arn: String,

    /// Region of the topic and its queues. Defaults to the AWS profile/environment region.
    #[arg(long, env = "SNS_SWEEPER_REGION")]
    region: Option<String>,

    /// Report what would be deleted without unsubscribing anything.
    /// The environment variable accepts true/false, yes/no, on/off and 1/0.
    #[arg(long, env = "SNS_SWEEPER_DRY_RUN", value_parser = BoolishValueParser::new())]
    dry_run: bool,

    /// Format of the report printed once the sweep finishes.
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = Args::parse();

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = args.region.clone() {
        loader = loader.region(Region::new(region));
    }
    let shared_config = loader.load().await;

    let sns = aws_sdk_sns::Client::new(&shared_config);
    let sqs = aws_sdk_sqs::Client::new(&shared_config);

    let mut resolver = EndpointResolver::new(&sqs);
    match shared_config.region() {
        Some(region) => resolver = resolver.with_expected_region(region.to_string()),
        None => log::warn!("no region configured, queue endpoints are not region-checked"),
    }

    let topic = TopicArn(args.topic_arn);
    log::info!("sweeping subscriptions on {topic}");

    let report = Cleaner::new(&sns, resolver)
        .dry_run(args.dry_run)
        .run(&topic)
        .await?;

    match args.output {
        Output::Text => print!("{report}"),
        Output::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Our own crates log at debug, everything else (the AWS SDK, hyper) at info.
/// `RUST_LOG` overrides both.
fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sns_sweeper", LevelFilter::Debug)
        .filter_module("sns_sweeper_backend", LevelFilter::Debug)
        .parse_default_env()
        .init();
}
