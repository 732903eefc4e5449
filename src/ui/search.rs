//! Free-text matching for the "find" flow. The query is split on whitespace
//! and each token is tested against every word of a game's name, publisher and
//! date. Any hit is enough to list the game; results keep catalog order.

use crate::models::{Game, GameField};

/// Count how many (token, field) pairs hit. A token hits a field when it is a
/// substring of one of the field's whitespace-separated words. Matching is
/// case-sensitive.
pub fn match_score(tokens: &[&str], game: &Game) -> usize {
    tokens
        .iter()
        .map(|token| {
            GameField::ALL
                .iter()
                .filter(|field| {
                    game.field(**field)
                        .split_whitespace()
                        .any(|word| word.contains(*token))
                })
                .count()
        })
        .sum()
}

/// Games with a non-zero score, in their original order. No ranking.
pub fn search<'a>(games: &'a [Game], query: &str) -> Vec<&'a Game> {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return Vec::new();
    }
    games
        .iter()
        .filter(|game| match_score(&tokens, game) > 0)
        .collect()
}
