//! Interactive chat session

use std::io::Write;

use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing::debug;
use tracing::info;

use crate::chatbot::Chatbot;
use crate::cli::output::format_reply;
use crate::cli::output::GOODBYE_MESSAGE;
use crate::cli::output::USER_PROMPT;
use crate::cli::output::WELCOME_MESSAGE;
use crate::docs::DocumentFetcher;
use crate::Result;

/// Words that end the session, compared case-insensitively after trimming
pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd))
}

/// Run the chat loop over stdin/stdout.
///
/// Stdin is read through tokio, which performs the blocking reads on its
/// blocking pool rather than on the runtime worker.
pub async fn handle_chat_command<F: DocumentFetcher>(bot: &Chatbot<F>) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    run_chat(bot, stdin, stdout.lock()).await
}

/// Read queries line by line until an exit command or end of input.
///
/// One query's outcome never stops the loop; only I/O errors on the
/// session streams do.
pub async fn run_chat<F, R, W>(bot: &Chatbot<F>, mut input: R, mut output: W) -> Result<()>
where
    F: DocumentFetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{WELCOME_MESSAGE}")?;
    let mut turns = 0_usize;

    loop {
        write!(output, "{USER_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            debug!("End of input");
            writeln!(output)?;
            break;
        }

        if is_exit_command(&line) {
            writeln!(output, "{GOODBYE_MESSAGE}")?;
            break;
        }

        let query = line.trim_end_matches(['\r', '\n']);
        let reply = bot.chatbot(query).await;
        writeln!(output, "{}", format_reply(&reply))?;
        turns += 1;
    }

    info!("Chat session ended after {} queries", turns);
    Ok(())
}
