use std::io::Write;

use anyhow::Result;
use folio_core::FolioConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{ready_service, render_reply};

pub async fn run(config: &FolioConfig) -> Result<()> {
    let service = ready_service(config).await?;
    println!(
        "folio chat ({} intents, provider {}). Type \"exit\" to quit.",
        service.knowledge().intents.len(),
        service.provider_name()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if is_exit(&line) {
            break;
        }
        let reply = service.process_message(&line).await;
        println!("{}", render_reply(&reply));
    }
    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}
