use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::gateway;
use crate::intent::{ClassificationItem, IntentResolver};
use crate::oracle::RemoteClassifier;
use crate::reply::ReplyPipeline;
use anyhow::Result;
use std::sync::Arc;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Ask { query, content } => {
            let content_path = content.unwrap_or_else(|| config.content_path.clone());
            let classifier = Arc::new(RemoteClassifier::from_config(&config.classifier));
            let resolver = IntentResolver::with_default_chain(classifier);
            let pipeline = ReplyPipeline::new(resolver, content_path);

            let message = pipeline.answer(&query).await?;
            println!("{message}");
            Ok(())
        }

        Commands::Classify { query, single } => {
            let classifier = RemoteClassifier::from_config(&config.classifier);
            if single {
                let intent = classifier
                    .classify_one(&query)
                    .await
                    .map_or_else(|| "none".to_string(), |c| c.to_string());
                println!("{intent}");
            } else {
                let items = classifier.classify(&query).await;
                print_items(&items);
            }
            Ok(())
        }

        Commands::Gateway { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, config).await
        }
    }
}

fn print_items(items: &[ClassificationItem]) {
    if items.is_empty() {
        println!("(no classification)");
        return;
    }
    for item in items {
        if item.lead_in.is_empty() {
            println!("{}", item.category);
        } else {
            println!("{}  \"{}\"", item.category, item.lead_in);
        }
    }
}
