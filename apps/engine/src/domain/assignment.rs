//! Randomized role and clue assignment for one round.

use rand::Rng;

use crate::domain::catalog::Category;
use crate::domain::rules::actual_impostor_count;
use crate::domain::state::SessionState;
use crate::errors::domain::{DomainError, ValidationKind};

/// Pick `count` distinct indices out of `0..len`, uniformly, without
/// replacement. Partial Fisher-Yates over an index pool: after `count`
/// swaps the prefix holds the draws in draw order.
fn draw_distinct_indices<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

/// Deal word, primary clue and impostor roles onto the roster.
///
/// - the word is a uniform draw from the category's list, the primary clue a
///   uniform draw from that word's clues;
/// - `min(requested, len - 1, 3)` players become impostors, never all of them;
/// - every non-impostor gets the primary clue; impostors cycle through the
///   remaining clues of the word (`pool[rank % pool.len()]`, rank = draw
///   order), so each impostor still gets some decoy even when the pool is
///   smaller than the impostor set. An empty pool leaves impostors clueless.
///
/// On error nothing is written to the session.
pub fn assign_roles<R: Rng + ?Sized>(
    state: &mut SessionState,
    category: &Category,
    rng: &mut R,
) -> Result<(), DomainError> {
    if category.words.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EMPTY_CATEGORY".into()),
            format!("category {} has no words", category.id),
        ));
    }

    let word = &category.words[rng.random_range(0..category.words.len())];
    if word.clues.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EMPTY_CLUE_LIST".into()),
            format!("word {} has no clues", word.word),
        ));
    }

    let primary_index = rng.random_range(0..word.clues.len());
    let primary = word.clues[primary_index].clone();

    // All clues of the word except the primary one, order preserved.
    let alternates: Vec<&String> = word
        .clues
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != primary_index)
        .map(|(_, clue)| clue)
        .collect();

    let impostors = actual_impostor_count(state.impostor_count, state.players.len());
    let chosen = draw_distinct_indices(state.players.len(), impostors, rng);

    for player in &mut state.players {
        player.is_impostor = false;
        player.clue = Some(primary.clone());
    }
    for (rank, &index) in chosen.iter().enumerate() {
        let player = &mut state.players[index];
        player.is_impostor = true;
        player.clue = if alternates.is_empty() {
            None
        } else {
            Some(alternates[rank % alternates.len()].clone())
        };
    }

    state.selected_category_id = Some(category.id.clone());
    state.selected_word = Some(word.word.clone());
    state.selected_clue = Some(primary);
    Ok(())
}
