//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use engine::{Category, GameFlowService, PlayerId, SessionHandle, Word};

/// One-word catalog with a two-clue word; small enough to reason about
/// every assignment outcome.
pub fn fruit_catalog() -> Vec<Category> {
    vec![Category::new(
        "frutas",
        "Frutas",
        vec![Word::new("Manzana", &["Roja", "Dulce"])],
    )]
}

/// One-word catalog with a single clue: the alternate pool is empty.
pub fn single_clue_catalog() -> Vec<Category> {
    vec![Category::new(
        "letras",
        "Letras",
        vec![Word::new("Equis", &["X"])],
    )]
}

/// Service over a fresh session with `n` seated players and a fixed seed.
pub fn seated_service(n: usize, seed: u64) -> (GameFlowService, Vec<PlayerId>) {
    engine_test_support::logging::init();
    let mut service =
        GameFlowService::new(SessionHandle::default(), Some(seed)).with_catalog(fruit_catalog());
    let ids = (0..n)
        .map(|i| {
            service
                .add_player(&format!("Player {}", i + 1))
                .expect("seat player")
        })
        .collect();
    (service, ids)
}

/// Drive a seated service all the way into `Playing`.
///
/// Must run inside a tokio runtime (the last reveal tap arms the timer).
pub fn playing_service(n: usize, seed: u64) -> (GameFlowService, Vec<PlayerId>) {
    let (mut service, ids) = seated_service(n, seed);
    service.start_game().expect("start game");
    service.select_category("frutas").expect("deal round");
    for _ in 0..n {
        service.next_player().expect("reveal walk");
    }
    (service, ids)
}
