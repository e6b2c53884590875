//! CLI blackjack demo.
//!
//! Plays single rounds against the dealer in the terminal. The demo is
//! the presentation layer: it renders hands, reads input, and maps round
//! outcomes to messages, while the engine owns all game state.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, Hand, Outcome, Phase, Rank, Round, Suit};

fn main() {
    println!("Blackjack ([h]it / [s]tand / [q]uit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        seed = seed.wrapping_add(1);
        let mut round = Round::new(seed);

        if let Err(err) = round.deal() {
            println!("Deal error: {err}");
            return;
        }

        while round.phase() == Phase::PlayerTurn {
            print_table(&round);

            match prompt_line("Action: ").as_str() {
                "h" | "hit" => match round.hit() {
                    Ok(Some(card)) => println!("You draw {}.", format_card(&card)),
                    Ok(None) => println!("The deck is empty."),
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => {
                    if let Err(err) = round.stand() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        if round.phase() == Phase::DealerTurn {
            match round.dealer_play() {
                Ok(drawn) if !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        print_table(&round);
        if let Some(outcome) = round.outcome() {
            println!("{}", outcome_message(outcome));
        }

        match prompt_line("New game? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::DealerBlackjack => "Dealer blackjack! You lose.",
        Outcome::PlayerBlackjack => "Blackjack! You win!",
        Outcome::PlayerBust => "Over 21! You lose.",
        Outcome::DealerBust => "Dealer over 21! You win!",
        Outcome::DealerWin => "Dealer wins!",
        Outcome::PlayerWin => "You win!",
        Outcome::Push => "Tie!",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());
    println!("Dealer: {}", format_dealer(round.dealer()));
    println!(
        "Player: {} (value {})\n",
        format_hand(round.player()),
        round.player().value()
    );
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        let cards = dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{cards} (value {})", dealer.value())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        format!("{} (value {})", parts.join(" "), dealer.visible_value())
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        numeric => numeric.value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
