//! Read-only word catalog: categories, secret words and their clue lists.
//!
//! Data contract: every category has at least one word and every word at
//! least one clue (the first clue of a word is as good a primary as any
//! other; the assigner picks one at random). The engine ships a small
//! built-in Spanish table; hosts can pass their own slice instead.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    /// Non-empty, ordered. One entry is the degenerate single-clue case.
    pub clues: Vec<String>,
}

impl Word {
    pub fn new(word: &str, clues: &[&str]) -> Self {
        Self {
            word: word.to_string(),
            clues: clues.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub words: Vec<Word>,
}

impl Category {
    pub fn new(id: &str, name: &str, words: Vec<Word>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            words,
        }
    }
}

/// Built-in table.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new(
            "frutas",
            "Frutas",
            vec![
                Word::new("Manzana", &["Roja", "Dulce"]),
                Word::new("Plátano", &["Amarilla", "Alargada"]),
                Word::new("Sandía", &["Verde", "Gigante"]),
            ],
        ),
        Category::new(
            "animales",
            "Animales",
            vec![
                Word::new("Elefante", &["Grande", "Gris"]),
                Word::new("Gato", &["Traicionero", "Doméstico"]),
                Word::new("Pingüino", &["Elegante", "Polar"]),
            ],
        ),
        Category::new(
            "objetos",
            "Objetos",
            vec![
                Word::new("Avión", &["Vuela", "Rápido"]),
                Word::new("Paraguas", &["Lluvia", "Plegable"]),
            ],
        ),
    ]
});

pub fn find_category<'a>(catalog: &'a [Category], id: &str) -> Option<&'a Category> {
    catalog.iter().find(|c| c.id == id)
}

/// Uniform draw among all categories; `None` on an empty catalog.
pub fn random_category<'a, R: Rng + ?Sized>(
    catalog: &'a [Category],
    rng: &mut R,
) -> Option<&'a Category> {
    if catalog.is_empty() {
        return None;
    }
    Some(&catalog[rng.random_range(0..catalog.len())])
}
