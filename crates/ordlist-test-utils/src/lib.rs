//! Testing utilities for the ordlist workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use ordlist_core::{Car, Fruit, ListEditor, TaskList};
use proptest::prelude::*;

/// Tasks used by the reorder walkthrough
pub const ROADMAP: [&str; 3] = ["Learn", "Build", "Deploy"];

pub fn roadmap_editor() -> ListEditor<String> {
    ROADMAP.iter().map(|s| (*s).to_string()).collect()
}

pub fn roadmap_tasks() -> TaskList {
    let mut tasks = TaskList::new();
    for text in ROADMAP {
        tasks.add_task(text).unwrap();
    }
    tasks
}

pub fn sample_fruits() -> ListEditor<Fruit> {
    ListEditor::from_items([
        Fruit::new(1, "Apple", 10),
        Fruit::new(2, "Banana", 20),
        Fruit::new(3, "Pineapple", 15),
        Fruit::new(4, "Coconut", 30),
    ])
}

pub fn sample_cars() -> ListEditor<Car> {
    ListEditor::from_items([
        Car::new(2025, "Maahir", "Yah"),
        Car::new(2019, "Toyota", "Corolla"),
        Car::new(2022, "Ford", "Mustang"),
    ])
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Non-empty vector of small integers plus an index inside it
pub fn list_and_index() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 1..32).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..len)
    })
}

/// Vector of small integers plus an index at or past its end
pub fn list_and_bad_index() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 0..32).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), len..len + 8)
    })
}
