// Integration tests for the reveal latch contract

use folioterm::page::{Page, SectionId};
use folioterm::reveal::{RevealHandle, RevealObserver};

#[test]
fn test_latch_lifecycle_at_threshold() {
    let observer: RevealObserver<&str> = RevealObserver::new();
    let handle = observer.observe("about", 0.3);

    // Unseen immediately after mount, before any sample.
    assert!(!handle.is_visible());

    // Just below the threshold: still unseen.
    observer.deliver("about", 0.29);
    assert!(!handle.is_visible());

    // Exactly at the threshold: the boundary is inclusive.
    observer.deliver("about", 0.3);
    assert!(handle.is_visible());

    // Scrolled fully out of view afterward: stays seen.
    observer.deliver("about", 0.0);
    assert!(handle.is_visible());
}

#[test]
fn test_never_reaching_threshold_stays_unseen() {
    let observer: RevealObserver<&str> = RevealObserver::new();
    let handle = observer.observe("skills", 0.2);
    for ratio in [0.0, 0.05, 0.1, 0.19, 0.199] {
        observer.deliver("skills", ratio);
    }
    assert!(!handle.is_visible());
    assert_eq!(observer.active_subscriptions(), 1);
}

#[test]
fn test_unmount_before_threshold_releases_subscription() {
    let observer: RevealObserver<&str> = RevealObserver::new();
    let handle = observer.observe("projects", 0.2);
    assert_eq!(observer.active_subscriptions(), 1);

    // Unmount immediately, before any intersection event.
    drop(handle);
    assert_eq!(observer.active_subscriptions(), 0);

    // A late-arriving event must not fire anything or panic.
    let fired = observer.deliver("projects", 1.0);
    assert!(!fired);
}

#[test]
fn test_sections_latch_independently() {
    let observer: RevealObserver<SectionId> = RevealObserver::new();
    let about = observer.observe(SectionId::About, 0.3);
    let contact = observer.observe(SectionId::Contact, 0.2);

    observer.deliver(SectionId::About, 0.5);
    assert!(about.is_visible());
    assert!(!contact.is_visible());

    observer.deliver(SectionId::Contact, 0.25);
    assert!(contact.is_visible());
}

#[test]
fn test_detached_handle_degrades_silently() {
    // The region never resolved, so no observation was registered; the
    // section just stays in its neutral presentation.
    let handle: RevealHandle<SectionId> = RevealHandle::detached();
    assert!(!handle.is_visible());
    drop(handle);
}

#[test]
fn test_page_driven_reveal_sequence() {
    // Wire a page and an observer together the way the app does: deliver
    // one sample per section after every scroll.
    let mut page = Page::new();
    page.set_layout([24, 30, 30, 30, 30, 30, 30, 30, 30, 10], 24);

    let observer: RevealObserver<SectionId> = RevealObserver::new();
    let handles: Vec<(SectionId, _)> = SectionId::ALL
        .iter()
        .filter_map(|&id| {
            id.reveal_threshold()
                .map(|threshold| (id, observer.observe(id, threshold)))
        })
        .collect();

    let deliver_all = |page: &Page, observer: &RevealObserver<SectionId>| {
        for (id, ratio) in page.samples() {
            observer.deliver(id, ratio);
        }
    };

    // At the top only the hero is on screen.
    deliver_all(&page, &observer);
    let seen: Vec<SectionId> = handles
        .iter()
        .filter(|(_, h)| h.is_visible())
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(seen, vec![SectionId::Home]);

    // Scroll until the about section fills most of the viewport.
    page.scroll_to(30);
    deliver_all(&page, &observer);
    let about = handles
        .iter()
        .find(|(id, _)| *id == SectionId::About)
        .map(|(_, h)| h)
        .expect("about handle");
    assert!(about.is_visible());

    // Scrolling back to the top never un-reveals it.
    page.scroll_to_top();
    deliver_all(&page, &observer);
    assert!(about.is_visible());

    // Scrolling to the bottom reveals the rest.
    page.scroll_to_bottom();
    deliver_all(&page, &observer);
    let contact = handles
        .iter()
        .find(|(id, _)| *id == SectionId::Contact)
        .map(|(_, h)| h)
        .expect("contact handle");
    assert!(contact.is_visible());
}

#[test]
fn test_dropping_all_handles_empties_the_observer() {
    let observer: RevealObserver<SectionId> = RevealObserver::new();
    let handles: Vec<_> = SectionId::ALL
        .iter()
        .filter_map(|&id| id.reveal_threshold().map(|t| observer.observe(id, t)))
        .collect();
    assert_eq!(observer.active_subscriptions(), 9);
    drop(handles);
    assert_eq!(observer.active_subscriptions(), 0);
}
