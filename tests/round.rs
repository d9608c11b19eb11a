//! Round engine integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sevens::{Card, DealError, Move, PassError, PlayError, Rank, Round, Run, Suit};

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn hand(tokens: &str) -> Vec<Card> {
    tokens.split_whitespace().map(card).collect()
}

fn round(hands: &[&str]) -> Round {
    Round::from_hands(hands.iter().map(|tokens| hand(tokens)).collect()).unwrap()
}

const fn run(min: Rank, max: Rank) -> Run {
    Run { min, max }
}

#[test]
fn deal_spreads_the_deck_and_seats_the_start_holder() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let round = Round::new(4, &mut rng).unwrap();

    let sizes: Vec<usize> = round.players().iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![14, 13, 13, 13]);
    assert!(round.current_player().holds(Card::START));
    assert_eq!(round.boner(), Card::JOKER);
    assert_eq!(round.winner(), None);
    for suit in Suit::ALL {
        assert_eq!(round.run(suit), None);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert_eq!(Round::new(4, &mut rng).unwrap(), round);
}

#[test]
fn deal_rejects_unplayable_player_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        Round::new(1, &mut rng).unwrap_err(),
        DealError::InvalidPlayerCount(1)
    );
    assert_eq!(
        Round::new(54, &mut rng).unwrap_err(),
        DealError::InvalidPlayerCount(54)
    );
    assert_eq!(
        Round::from_hands(vec![hand("7s")]).unwrap_err(),
        DealError::InvalidPlayerCount(1)
    );
}

#[test]
fn spades_must_open_with_the_seven() {
    let mut round = round(&["8h 7s Jo", "6s 5h"]);
    assert_eq!(round.turn(), 0);
    assert_eq!(round.playables(), vec![Card::START, Card::JOKER]);

    let before = round.clone();
    assert_eq!(round.play(card("8h")), Err(PlayError::WrongOpener));
    assert_eq!(round.play(card("6s")), Err(PlayError::NotInHand));
    assert_eq!(round.play_joker(card("8s")), Err(PlayError::WrongOpener));
    assert_eq!(round.play(Card::JOKER), Err(PlayError::WrongOpener));
    assert_eq!(round, before);

    round.play(Card::START).unwrap();
    assert_eq!(round.run(Suit::Spades), Some(Run::OPENED));
    assert_eq!(round.turn(), 1);
    assert_eq!(round.board().to_string(), "s:7 h:- c:- d:- Boner:Jo");
}

#[test]
fn runs_extend_one_rank_at_a_time() {
    let mut round = round(&["7s 6s Kd", "8s 5h Kc"]);

    round.play(card("7s")).unwrap();
    round.play(card("8s")).unwrap();
    round.play(card("6s")).unwrap();
    assert_eq!(round.run(Suit::Spades), Some(run(Rank::Six, Rank::Eight)));
    assert_eq!(round.board().to_string(), "s:6-8 h:- c:- d:- Boner:Jo");

    assert_eq!(round.play(card("5h")), Err(PlayError::IllegalExtension));
    assert_eq!(round.turn(), 1);
}

#[test]
fn other_suits_wait_for_spades() {
    let mut round = round(&["7s 7h 6s 5s Kd", "8s 8h 9h 9s Kc"]);

    for token in ["7s", "8s", "7h", "8h", "6s"] {
        round.play(card(token)).unwrap();
    }
    assert_eq!(round.turn(), 1);
    assert_eq!(round.playables(), vec![card("9s")]);

    let before = round.clone();
    assert_eq!(round.play(card("9h")), Err(PlayError::RunNotUnlocked));
    assert_eq!(round, before);

    round.play(card("9s")).unwrap();
    round.play(card("5s")).unwrap();
    round.play(card("9h")).unwrap();
    assert_eq!(round.run(Suit::Hearts), Some(run(Rank::Seven, Rank::Nine)));
    assert_eq!(round.run(Suit::Spades), Some(run(Rank::Five, Rank::Nine)));
}

#[test]
fn lower_ranks_also_wait_for_spades() {
    let mut round = round(&["7s 7c 2d", "8s 6c Kd"]);

    round.play(card("7s")).unwrap();
    round.play(card("8s")).unwrap();
    round.play(card("7c")).unwrap();
    assert_eq!(round.play(card("6c")), Err(PlayError::RunNotUnlocked));
}

#[test]
fn joker_stand_in_becomes_the_boner() {
    let mut round = round(&["7s Jo 3c", "8s 8h 2d"]);

    round.play_joker(Card::START).unwrap();
    assert_eq!(round.boner(), Card::START);
    assert_eq!(round.run(Suit::Spades), Some(Run::OPENED));
    assert_eq!(round.players()[0].hand(), &hand("7s 3c")[..]);
    assert_eq!(round.board().to_string(), "s:7 h:- c:- d:- Boner:7s");

    round.play(card("8s")).unwrap();
    assert!(round.playables().is_empty());
    assert_eq!(round.play_joker(card("6s")), Err(PlayError::NotInHand));
    assert_eq!(round.play(card("7s")), Err(PlayError::IllegalExtension));

    let holder = &round.players()[0];
    assert!(holder.is_boned(round.boner()));
    assert_eq!(holder.score(round.boner()), 55);
}

#[test]
fn joker_cannot_stand_in_for_a_joker() {
    let mut round = round(&["7s Jo", "8s 2d"]);
    round.play(Card::START).unwrap();
    round.play(card("8s")).unwrap();

    assert_eq!(round.playables(), vec![Card::JOKER]);
    assert_eq!(round.play_joker(Card::JOKER), Err(PlayError::IllegalExtension));
    assert_eq!(round.play(Card::JOKER), Err(PlayError::IllegalExtension));
}

#[test]
fn pass_takes_a_card_from_the_next_player() {
    let mut round = round(&["7s 2c", "8s 9d", "Kh"]);

    let before = round.clone();
    assert_eq!(round.pass(card("Kh")), Err(PassError::NotInHand));
    assert_eq!(round.pass(card("2c")), Err(PassError::NotInHand));
    assert_eq!(round, before);

    round.pass(card("9d")).unwrap();
    assert_eq!(round.turn(), 1);
    assert_eq!(round.players()[0].hand(), &hand("7s 2c 9d")[..]);
    assert_eq!(round.players()[1].hand(), &hand("8s")[..]);

    let held: usize = round.players().iter().map(|p| p.len()).sum();
    assert_eq!(held, 5);
}

#[test]
fn turns_cycle_through_every_seat() {
    let mut round = round(&["7s", "2c", "3c"]);
    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(round.turn());
        round.next_turn();
    }
    assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn first_empty_hand_wins() {
    let mut round = round(&["Kh 2c", "7s"]);
    assert_eq!(round.turn(), 1);
    assert!(!round.is_over());

    round.play(Card::START).unwrap();
    assert_eq!(round.winner(), Some(1));
    assert!(round.is_over());
    assert_eq!(round.players()[0].score(round.boner()), 15);
}

#[test]
fn sort_cards_puts_the_boner_last() {
    let mut round = round(&["Kd Jo 3s 7s 2s", "8s"]);
    round.sort_cards();
    assert_eq!(round.current_player().hand(), &hand("2s 3s 7s Kd Jo")[..]);
}

#[test]
fn best_plays_close_the_board_first() {
    let mut round = round(&["7s Kd", "8s 6s 7h 2c"]);
    round.play(Card::START).unwrap();

    let playables = round.playables();
    assert_eq!(playables, hand("8s 6s 7h"));
    assert_eq!(round.board().open_spots(card("8s")), 5);
    assert_eq!(round.board().open_spots(card("6s")), 5);
    assert_eq!(round.board().open_spots(card("7h")), 4);
    assert_eq!(round.best_plays(&playables), hand("7h 8s 6s"));
    assert_eq!(round.suggest_move(), Move::Play(card("7h")));
}

#[test]
fn best_boner_prefers_a_run_the_hand_blocks() {
    let mut round = round(&["7s Kd", "Jo 5s 4s 2c"]);
    round.play(Card::START).unwrap();

    assert_eq!(round.playables(), vec![Card::JOKER]);
    assert_eq!(round.best_boner(&hand("6s 5s")), Some(card("8s")));
    assert_eq!(round.best_boner(&hand("5s 4s 2c")), Some(card("6s")));

    let snapshot = round.clone();
    let suggestion = round.suggest_move();
    assert_eq!(round, snapshot);
    assert_eq!(suggestion, Move::PlayJoker(card("6s")));

    round.play_joker(card("6s")).unwrap();
    assert_eq!(round.boner(), card("6s"));
    assert_eq!(round.run(Suit::Spades), Some(run(Rank::Six, Rank::Seven)));
    assert_eq!(round.players()[1].hand(), &hand("5s 4s 2c")[..]);
}

#[test]
fn worst_card_gives_up_the_most_blocking_card() {
    let mut round = round(&["7s Kd", "2c 8h Ks"]);
    round.play(Card::START).unwrap();

    let board = round.board();
    assert_eq!(board.blocking_score(card("2c")), 22);
    assert_eq!(board.blocking_score(card("8h")), 18);
    assert_eq!(board.blocking_score(card("Ks")), 5);
    assert_eq!(board.blocking_score(Card::JOKER), 0);

    assert_eq!(round.worst_card(&hand("2c 8h Ks")), Some(card("2c")));
    assert_eq!(round.worst_card(&hand("Jo")), Some(Card::JOKER));
    assert_eq!(round.worst_card(&[]), None);
    assert_eq!(round.suggest_pass(), Some(card("Kd")));
}

#[test]
fn worst_card_hands_over_the_boner() {
    let mut round = round(&["7s Jo 3c", "8s 2c 4d"]);
    round.play_joker(Card::START).unwrap();

    assert_eq!(round.worst_card(&hand("2c 7s")), Some(card("7s")));
    assert_eq!(round.suggest_move(), Move::Play(card("8s")));
}

#[test]
fn suggest_pass_when_nothing_is_playable() {
    let mut round = round(&["7s Kd", "2c Kc"]);
    round.play(Card::START).unwrap();

    assert!(round.playables().is_empty());
    assert_eq!(round.suggest_move(), Move::Pass);
}

#[test]
fn joker_opens_spades_after_a_pass() {
    let mut round = round(&["7s 2c", "Jo 9d"]);
    round.pass(card("9d")).unwrap();
    assert_eq!(round.turn(), 1);

    assert_eq!(round.playables(), vec![Card::JOKER]);
    assert_eq!(round.play(card("9d")), Err(PlayError::NotInHand));
    assert_eq!(round.suggest_move(), Move::PlayJoker(Card::START));

    round.play_joker(Card::START).unwrap();
    assert_eq!(round.board().to_string(), "s:7 h:- c:- d:- Boner:7s");
    assert_eq!(round.winner(), Some(1));
    assert!(round.players()[0].is_boned(round.boner()));
}
