use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn tip_at_returns_indexed_tip() {
    assert_eq!(tip_at(&ADVICE, 0), Some("Don't get advice from anyone, yolo!"));
    assert_eq!(tip_at(&ADVICE, 4), Some("This is the end of the list :D !"));
}

#[test]
fn tip_at_out_of_range_is_none() {
    assert_eq!(tip_at(&ADVICE, ADVICE.len()), None);
    assert_eq!(tip_at(&[], 0), None);
}

#[test]
fn random_tip_is_deterministic_for_a_seed() {
    let a = random_tip(&mut StdRng::seed_from_u64(7));
    let b = random_tip(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn random_tip_always_comes_from_the_list() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        assert!(ADVICE.contains(&random_tip(&mut rng)));
    }
}

#[test]
fn random_tip_eventually_covers_every_entry() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(random_tip(&mut rng));
    }
    assert_eq!(seen.len(), ADVICE.len());
}

#[test]
fn advice_notice_is_informational() {
    let notice = advice_notice("I dont know.");
    assert_eq!(notice.title, "Advice");
    assert_eq!(notice.text, "I dont know.");
    assert_eq!(notice.icon, crate::notice::NoticeIcon::Info);
}
