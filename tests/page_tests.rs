// Integration tests for the page scroll model

use folioterm::page::{Page, SectionId};

fn demo_page() -> Page {
    let mut page = Page::new();
    page.set_layout([20, 35, 18, 25, 60, 30, 28, 45, 40, 8], 20);
    page
}

#[test]
fn test_section_order_matches_the_site() {
    let titles: Vec<&str> = SectionId::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(
        titles,
        vec![
            "home",
            "about",
            "education",
            "experience",
            "skills",
            "certificates",
            "competencies",
            "projects",
            "contact",
            "footer",
        ]
    );
}

#[test]
fn test_thresholds_match_the_observed_sections() {
    for id in SectionId::ALL {
        match id {
            SectionId::Footer => assert!(id.reveal_threshold().is_none()),
            SectionId::Skills | SectionId::Projects | SectionId::Contact => {
                assert_eq!(id.reveal_threshold(), Some(0.2))
            }
            _ => assert_eq!(id.reveal_threshold(), Some(0.3)),
        }
    }
}

#[test]
fn test_jump_lands_each_section_fully_or_maximally_in_view() {
    let mut page = demo_page();
    for id in SectionId::ALL {
        page.jump_to(id);
        assert!(page.scroll() <= page.max_scroll());
        let ratio = page.intersection_ratio(id);
        assert!(ratio > 0.0, "{:?} invisible after jump", id);
    }
}

#[test]
fn test_ratios_sum_of_visible_rows_equals_viewport() {
    let mut page = demo_page();
    for step in 0..80 {
        page.scroll_to(step * 4);
        let visible_rows: f64 = page
            .samples()
            .iter()
            .zip([20, 35, 18, 25, 60, 30, 28, 45, 40, 8])
            .map(|((_, ratio), height)| ratio * height as f64)
            .sum();
        assert!((visible_rows - page.viewport() as f64).abs() < 1e-9);
    }
}

#[test]
fn test_scroll_fraction_spans_zero_to_one() {
    let mut page = demo_page();
    assert_eq!(page.scroll_fraction(), 0.0);
    page.scroll_to_bottom();
    assert_eq!(page.scroll_fraction(), 1.0);
}

#[test]
fn test_empty_viewport_yields_zero_ratios() {
    let mut page = Page::new();
    page.set_layout([10; 10], 0);
    for (_, ratio) in page.samples() {
        assert_eq!(ratio, 0.0);
    }
}
