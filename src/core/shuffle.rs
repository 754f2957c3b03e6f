//! # Answer Shuffler
//!
//! Turns a question into the ordered list of choices the player sees.
//! The list is `incorrect_answers ++ [correct_answer]` (duplicates kept),
//! permuted with an in-place Fisher–Yates pass so every ordering is equally
//! likely given a uniform RNG.

use rand::Rng;

use crate::questions::QuestionRecord;

pub fn shuffle_choices<R: Rng + ?Sized>(question: &QuestionRecord, rng: &mut R) -> Vec<String> {
    let mut choices: Vec<String> = question
        .incorrect_answers
        .iter()
        .cloned()
        .chain(std::iter::once(question.correct_answer.clone()))
        .collect();
    fisher_yates(&mut choices, rng);
    choices
}

fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
