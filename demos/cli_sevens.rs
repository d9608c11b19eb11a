//! CLI Sevens example.
//!
//! Every seat is played from the keyboard. Press enter on an empty line to
//! let the built-in advisor choose. Set `RUST_LOG=debug` to trace the engine.

#![allow(clippy::missing_docs_in_private_items)]

use core::fmt::Write as _;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use sevens::{Card, Game, GameOptions, Move, Round, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Sevens CLI example (type 'quit' to stop)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let mut round = match game.start_round() {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        let finished = play_round(&mut round);

        let result = game.finish_round(&round);
        for player in &result.players {
            if player.winner {
                println!("Player {} Wins!", player.player);
            } else {
                let boned = if player.boned { " Boned!" } else { "" };
                println!(
                    "Player {} {} score: {}{boned}",
                    player.player,
                    format_cards(&player.hand),
                    player.score
                );
            }
        }
        println!(
            "Scores: {}",
            game.scores()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        );

        if !finished || result.game_over {
            if let Some(leader) = game.leader() {
                println!("Player {leader} leads after {} round(s).", game.rounds_played());
            }
            return;
        }
    }
}

/// Plays until someone goes out. Returns `false` if the user quit.
fn play_round(round: &mut Round) -> bool {
    while !round.is_over() {
        round.sort_cards();
        println!("{}", format_board(round));
        println!(
            "Player {} turn, playables: {}, cards: {}",
            round.turn(),
            format_cards(&round.playables()),
            format_cards(round.current_player().hand())
        );

        let Some(line) = read_line() else {
            return false;
        };
        let mv = match line.as_str() {
            "exit" | "quit" => return false,
            "" => {
                let mv = round.suggest_move();
                println!("Player {} plays {mv}", round.turn());
                mv
            }
            _ => match line.parse::<Move>() {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
        };

        let result = match mv {
            Move::Play(card) => round.play(card).map_err(|err| err.to_string()),
            Move::PlayJoker(card) => round.play_joker(card).map_err(|err| err.to_string()),
            Move::Pass => {
                if !take_pass(round) {
                    return false;
                }
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("{err}");
        }
    }
    true
}

/// Asks the next player for a card until the pass succeeds.
fn take_pass(round: &mut Round) -> bool {
    let giver = round.next_index();
    loop {
        println!(
            "Player {giver} to pass, cards: {}",
            format_cards(round.next_player().hand())
        );
        let Some(line) = read_line() else {
            return false;
        };

        let card = if line.is_empty() {
            let Some(card) = round.suggest_pass() else {
                println!("Player {giver} has nothing to pass");
                return true;
            };
            println!("Player {giver} passes {card}");
            card
        } else {
            match line.parse::<Card>() {
                Ok(card) => card,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        };

        match round.pass(card) {
            Ok(()) => return true,
            Err(err) => println!("{err}"),
        }
    }
}

fn read_line() -> Option<String> {
    print!("> ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn format_board(round: &Round) -> String {
    let board = round.board();
    let mut text = String::new();
    for suit in Suit::ALL {
        let glyph = colorize(&suit.glyph().to_string(), suit_color(suit));
        let run = board.run(suit).map_or_else(
            || "-".to_string(),
            |run| {
                if run.min == run.max {
                    run.min.glyph().to_string()
                } else {
                    format!("{}-{}", run.min.glyph(), run.max.glyph())
                }
            },
        );
        let _ = write!(text, "{glyph}:{run} ");
    }
    let _ = write!(text, "Boner:{}", format_card(&board.boner()));
    text
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(",")
}

fn format_card(card: &Card) -> String {
    colorize(&card.to_string(), suit_color(card.suit))
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Spades | Suit::Clubs => "34",
        Suit::None => "35",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
