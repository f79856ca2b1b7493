//! A strategy driven by a person.
//!
//! Prompts go to a writer and answers come from a reader, so the same code
//! serves a terminal (`Interactive::stdio`) and scripted tests. Target
//! selections re-prompt until they get a listed number; the build prompt
//! treats anything it cannot use as "build nothing". End of input declines
//! every decision.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::cards::{CardCatalog, CardId, VALID_ESTABLISHMENTS, VALID_LANDMARKS};
use crate::core::{Player, PlayerId, Roll, Table};

use super::Strategy;

/// Build prompt order: ordinary establishments, then purple, then landmarks.
const BUILD_ORDER: [CardId; 19] = [
    CardId::WheatField,
    CardId::Ranch,
    CardId::Bakery,
    CardId::Cafe,
    CardId::ConvenienceStore,
    CardId::Forest,
    CardId::CheeseFactory,
    CardId::FurnitureFactory,
    CardId::Mine,
    CardId::FamilyRestaurant,
    CardId::AppleOrchard,
    CardId::ProduceMarket,
    CardId::Stadium,
    CardId::TvStation,
    CardId::BusinessCenter,
    CardId::TrainStation,
    CardId::ShoppingMall,
    CardId::AmusementPark,
    CardId::RadioTower,
];

/// Human player over a line-oriented reader and a writer.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl Interactive<StdinLock<'static>, Stdout> {
    /// Read from stdin, prompt on stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the strategy and hand back the writer (tests inspect prompts).
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: impl std::fmt::Display) {
        if let Err(err) = writeln!(self.output, "{}", line) {
            warn!(%err, "failed to write prompt");
        }
    }

    /// Write a question and leave the cursor on its line.
    fn ask(&mut self, question: &str) {
        if let Err(err) = write!(self.output, "{} ", question) {
            warn!(%err, "failed to write prompt");
        }
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        if let Err(err) = self.output.flush() {
            warn!(%err, "failed to flush prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!(%err, "failed to read answer");
                None
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> bool {
        self.ask(question);
        self.read_line().is_some_and(|answer| answer.contains('y'))
    }

    /// Show a numbered list starting at 1 and re-prompt until one is picked.
    fn pick<T: Copy>(&mut self, prompt: &str, options: &[(T, String)]) -> Option<T> {
        if options.is_empty() {
            return None;
        }
        loop {
            for (i, (_, label)) in options.iter().enumerate() {
                self.say(format_args!("{}. {}", i + 1, label));
            }
            self.say(prompt);

            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Err(_) => self.say("   ...unrecognized response."),
                Ok(n) if n == 0 || n > options.len() => self.say("   ...invalid response."),
                Ok(n) => return Some(options[n - 1].0),
            }
        }
    }

    fn pick_opponent(&mut self, table: &Table, prompt: &str, with_money: bool) -> Option<PlayerId> {
        let options: Vec<(PlayerId, String)> = table
            .opponents()
            .map(|(id, p)| {
                let label = if with_money {
                    format!("{} ({} coins)", p.name(), p.money())
                } else {
                    p.to_string().replace('\n', " ")
                };
                (id, label)
            })
            .collect();
        self.pick(prompt, &options)
    }

    fn pick_establishment(&mut self, owner: &Player, prompt: &str) -> Option<CardId> {
        let options: Vec<(CardId, String)> = VALID_ESTABLISHMENTS
            .iter()
            .filter(|&&card| owner.establishment_count(card) > 0)
            .map(|&card| (card, card.to_string()))
            .collect();
        self.pick(prompt, &options)
    }
}

impl<R: BufRead, W: Write> Strategy for Interactive<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_train_station(&mut self, _table: &Table) -> bool {
        self.ask_yes_no("Use the Train Station (roll two dice)?")
    }

    fn choose_radio_tower(&mut self, _table: &Table, roll: &Roll) -> bool {
        let faces: Vec<String> = roll.faces().iter().map(u8::to_string).collect();
        let question = format!("Current roll: ({}). Use the Radio Tower (re-roll)?", faces.join(", "));
        self.ask_yes_no(&question)
    }

    /// Lists only what the player could legally build, with 0 meaning nothing.
    fn choose_construction(&mut self, table: &Table) -> Option<CardId> {
        let player = table.current_player();
        let choices: Vec<CardId> = BUILD_ORDER
            .iter()
            .copied()
            .filter(|&card| {
                if VALID_LANDMARKS.contains(&card) {
                    player.can_construct_landmark(card)
                } else {
                    player.can_construct_establishment(card, table.supply())
                }
            })
            .collect();
        if choices.is_empty() {
            return None;
        }

        self.say("Construct which? ");
        self.say(format_args!(" {:>2}) nothing", 0));
        for (i, card) in choices.iter().enumerate() {
            self.say(format_args!(" {:>2}) {} (${})", i + 1, card, CardCatalog::cost(*card)));
        }

        let answer = self.read_line()?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => Some(choices[n - 1]),
            _ => None,
        }
    }

    fn choose_tv_station_target(&mut self, table: &Table) -> Option<PlayerId> {
        self.pick_opponent(table, "Choose player to take coins from:", true)
    }

    fn choose_business_center_target(&mut self, table: &Table) -> Option<(PlayerId, CardId)> {
        let target = self.pick_opponent(table, "Choose player to swap with:", false)?;
        let owner = table.player(target)?;
        let card = self.pick_establishment(owner, "Choose card to take:")?;
        Some((target, card))
    }

    fn choose_business_center_swap(&mut self, table: &Table) -> Option<CardId> {
        self.pick_establishment(table.current_player(), "Choose card to give away:")
    }
}
