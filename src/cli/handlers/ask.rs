//! Ask command handler - answer one question and exit

use tracing::info;

use crate::chatbot::Chatbot;
use crate::cli::output::format_reply;
use crate::docs::DocumentFetcher;
use crate::Result;

pub async fn handle_ask_command<F: DocumentFetcher>(bot: &Chatbot<F>, query: &str) -> Result<()> {
    info!("Answering single query");
    let reply = bot.chatbot(query).await;
    println!("{}", format_reply(&reply));
    Ok(())
}
