use super::*;

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default(), Locale::English);
    assert!(Locale::English.is_supported());
    assert!(!Locale::Hungarian.is_supported());
}

#[test]
fn selecting_english_is_silent() {
    let selection = select(Locale::English);
    assert_eq!(selection.active, Locale::English);
    assert!(selection.notice.is_none());
}

#[test]
fn selecting_hungarian_reverts_with_one_notice() {
    let selection = select(Locale::Hungarian);
    assert_eq!(selection.active, Locale::English);
    let notice = selection.notice.expect("unsupported locale should produce a notice");
    assert_eq!(notice.title, "Oops!");
    assert!(notice.text.contains("magyarul"));
    assert!(notice.footer.as_deref().unwrap_or_default().contains("can't speak Hungarian"));
}

#[test]
fn every_selection_event_yields_its_own_notice() {
    let notices = (0..3).filter_map(|_| select(Locale::Hungarian).notice).count();
    assert_eq!(notices, 3);
}

#[test]
fn offered_codes_parse_to_their_locale() {
    for locale in Locale::ALL {
        let back: Locale = serde_json::from_str(&format!("\"{}\"", locale.code())).unwrap();
        assert_eq!(back, locale);
    }
}

#[test]
fn unknown_codes_parse_as_unsupported() {
    let parsed: Locale = serde_json::from_str("\"de\"").unwrap();
    assert_eq!(parsed, Locale::Unsupported);
    assert!(!parsed.is_supported());
    assert!(!Locale::ALL.contains(&Locale::Unsupported));
}

#[test]
fn selecting_unknown_code_reverts_with_one_notice() {
    let selection = select(Locale::Unsupported);
    assert_eq!(selection.active, Locale::English);
    let notice = selection.notice.expect("unknown locale should produce a notice");
    assert_eq!(notice.title, "Oops!");
    assert!(notice.text.contains("that language"));
    assert!(notice.footer.is_none());
}
