use anyhow::Result;
use cardbox_core::logic;
use cardbox_core::model::Deck;
use cardbox_core::storage::CardStorage;
use std::io::{stdin, stdout, Write};
use std::sync::Arc;

/// The interactive loop: one line in, one result message out. Each command
/// runs to completion before the next line is read, and the store is
/// flushed after every successful command.
pub async fn run_shell(mut deck: Deck, storage: Arc<dyn CardStorage>) -> Result<()> {
    println!("Cardbox ready. Type help for the command list.");
    loop {
        let Some(line) = read_line("> ")? else {
            // EOF: flush and leave.
            storage.save_cards(deck.cards()).await?;
            break;
        };
        match logic::execute(&mut deck, &line) {
            Ok(result) => {
                println!("{}", result.feedback);
                storage.save_cards(deck.cards()).await?;
                if result.exit {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    let n = stdin().read_line(&mut s)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}
