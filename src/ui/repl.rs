use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use thiserror::Error;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    model::{lookup::LookupForm, region::Region},
    ui::{
        render::state_lines,
        widget::{LookupWidget, SubmitError},
    },
};

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

/// Submits a single prefilled form and prints the outcome.
pub async fn run_once(widget: &LookupWidget, form: &LookupForm) {
    let _ = widget.submit(form).await;
    print_state(widget);
}

pub async fn run(widget: LookupWidget, mut form: LookupForm) -> Result<(), ReplError> {
    let mut input = BufReader::new(stdin()).lines();

    println!("{}", "League Data Lookup".with(Color::Magenta).bold());
    println!("Enter a Riot ID (GameName#TagLine) to see level and top champions. Empty name quits.");
    println!("{}", "Regions:".with(Color::DarkGrey));
    for region in Region::ALL {
        println!("{}", format!("  {}", region.describe()).with(Color::DarkGrey));
    }

    loop {
        println!();
        let Some(riot_id) = prompt(&mut input, "Riot ID", "").await? else {
            break;
        };
        if riot_id.trim().is_empty() {
            break;
        }
        form.set_riot_id(&riot_id);

        loop {
            let Some(code) = prompt(&mut input, "Region", &form.region.describe()).await? else {
                return Ok(());
            };
            if code.trim().is_empty() {
                break;
            }
            match code.parse::<Region>() {
                Ok(region) => {
                    form.select_region(region);
                    break;
                }
                Err(err) => println!("{}", err.to_string().with(Color::Red)),
            }
        }

        let Some(tag_line) = prompt(&mut input, "Tag line", &form.tag_line).await? else {
            return Ok(());
        };
        if !tag_line.trim().is_empty() {
            form.set_tag_line(&tag_line);
        }

        println!("{}", "Looking up...".with(Color::DarkGrey));
        match widget.submit(&form).await {
            Ok(_) | Err(SubmitError::Invalid(_)) => print_state(&widget),
            Err(SubmitError::InFlight) => println!("{}", "A lookup is already running".with(Color::Yellow)),
        }
    }

    Ok(())
}

fn print_state(widget: &LookupWidget) {
    for line in state_lines(&widget.state()) {
        println!("{}", line);
    }
}

// Returns None on end of input.
async fn prompt(input: &mut Lines<BufReader<Stdin>>, label: &str, current: &str) -> Result<Option<String>, ReplError> {
    if current.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, current);
    }
    io::stdout().flush()?;
    Ok(input.next_line().await?)
}
