//! End-to-end behaviour of the page state machines.

use folio_core::filter::{available_filters, ProjectFilter};
use folio_core::form::{ContactForm, Field, SubmitState};
use folio_core::reveal::{RevealKind, RevealTracker};
use folio_core::theme::{MemoryStore, ThemeManager, ThemePreference};
use folio_core::typing::{TypingEffect, TypingPhase, TypingTiming};
use folio_core::{FormError, SiteContent};

fn effect(list: &[&str]) -> TypingEffect {
    let phrases = list.iter().map(|s| s.to_string()).collect();
    TypingEffect::new(phrases, TypingTiming::default()).unwrap()
}

/// Ticks until the engine moves on to the next phrase.
fn run_cycle(fx: &mut TypingEffect) -> usize {
    let start = fx.index();
    let mut ticks = 0;
    loop {
        fx.tick();
        ticks += 1;
        if fx.index() != start || ticks > 10_000 {
            return ticks;
        }
    }
}

#[test]
fn test_displayed_text_stays_within_target() {
    let mut fx = effect(&["", "a", "hello world", "ünïcödé", "xy"]);
    for _ in 0..500 {
        let frame = fx.tick();
        let len = frame.text.chars().count();
        assert!(len <= fx.target().chars().count());
        assert!(fx.target().starts_with(&frame.text));
    }
}

#[test]
fn test_cycle_advances_and_wraps() {
    let list = ["one", "two", "three"];
    let mut fx = effect(&list);

    for i in 0..list.len() {
        assert_eq!(fx.index(), i);
        let ticks = run_cycle(&mut fx);
        // type L, wait, delete L, wait
        assert_eq!(ticks, 2 * list[i].len() + 2);
        assert_eq!(fx.index(), (i + 1) % list.len());
        assert_eq!(fx.phase(), TypingPhase::Typing);
        assert_eq!(fx.displayed(), "");
    }
    assert_eq!(fx.index(), 0);
}

#[test]
fn test_single_phrase_repeats() {
    let mut fx = effect(&["a"]);
    let texts: Vec<String> = (0..5).map(|_| fx.tick().text).collect();
    assert_eq!(texts, vec!["a", "a", "", "", "a"]);
    assert_eq!(fx.index(), 0);
}

#[test]
fn test_reveal_never_replays() {
    let mut tracker = RevealTracker::new();
    tracker.observe("timeline-0", RevealKind::TimelineItem);

    let fired = [0.0, 0.3, 0.0, 1.0, 0.0, 0.6]
        .iter()
        .filter_map(|ratio| tracker.report("timeline-0", *ratio))
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn test_filter_shows_exact_matches() {
    let cards = vec![
        vec!["web".to_string(), "rust".to_string()],
        vec!["crypto".to_string()],
        vec![],
    ];

    for filter in available_filters(&cards) {
        let visible = filter.apply(&cards);
        match &filter {
            ProjectFilter::All => assert!(visible.iter().all(|v| *v)),
            ProjectFilter::Category(tag) => {
                for (card, shown) in cards.iter().zip(&visible) {
                    assert_eq!(*shown, card.contains(tag));
                }
            }
        }
    }
}

#[test]
fn test_empty_required_field_never_sends() {
    for missing in [Field::Name, Field::Email, Field::Message] {
        let mut form = ContactForm::new();
        form.input(Field::Name, "Ada".into());
        form.input(Field::Email, "ada@example.com".into());
        form.input(Field::Message, "A message long enough".into());
        form.input(missing, String::new());

        match form.begin_submit() {
            Err(FormError::Invalid(errors)) => assert!(errors.get(missing).is_some()),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(form.state(), &SubmitState::Idle);
        assert!(form.errors().get(missing).is_some());
    }
}

#[test]
fn test_theme_light_persists() {
    let mut manager = ThemeManager::load(MemoryStore::default());
    manager.toggle(false).unwrap();
    assert_eq!(manager.preference(), ThemePreference::Light);

    let reloaded = ThemeManager::load(manager.into_store());
    assert_eq!(reloaded.preference(), ThemePreference::Light);
}

#[test]
fn test_bundled_site_content_parses() {
    let source = include_str!("../../../assets/content/site.toml");
    let content = SiteContent::from_toml(source).unwrap();
    assert!(!content.typing.is_empty());
    assert!(content.section_ids().contains(&"contact".to_string()));
}

#[test]
fn test_bundled_resume_link_is_served() {
    let source = include_str!("../../../assets/content/site.toml");
    let index = include_str!("../../../index.html");
    let content = SiteContent::from_toml(source).unwrap();

    let Some(url) = content.profile.resume_url else {
        return;
    };
    if url.contains("://") {
        return;
    }
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    assert!(root.join(&url).is_file(), "resume file {url} is missing");
    assert!(
        index.contains(&format!(r#"rel="copy-file" href="{url}""#)),
        "index.html does not copy {url} into the build"
    );
}
