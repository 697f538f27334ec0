//! "Get Advice" button: one canned tip, picked at random.

use rand::Rng;

use crate::notice::Notice;

#[cfg(test)]
#[path = "advice_test.rs"]
mod tests;

pub const ADVICE: [&str; 5] = [
    "Don't get advice from anyone, yolo!",
    "Come to the third floor at any cost.",
    "I dont know.",
    "I am not an AI.",
    "This is the end of the list :D !",
];

/// Tip at `index` in `tips`, or `None` when out of range.
#[must_use]
pub fn tip_at<'a>(tips: &[&'a str], index: usize) -> Option<&'a str> {
    tips.get(index).copied()
}

/// Pick one tip uniformly at random.
pub fn random_tip<R: Rng>(rng: &mut R) -> &'static str {
    let index = rng.random_range(0..ADVICE.len());
    tip_at(&ADVICE, index).unwrap_or(ADVICE[0])
}

#[must_use]
pub fn advice_notice(tip: &str) -> Notice {
    Notice::info("Advice", tip)
}
