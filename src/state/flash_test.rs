use super::*;

fn seeded(now_ms: f64, count: usize) -> FlashState {
    let mut flash = FlashState::default();
    flash.seed(now_ms, (0..count).map(|i| (format!("note {i}"), FlashLevel::Success)));
    flash
}

// =============================================================
// Dismissal schedule
// =============================================================

#[test]
fn banners_stay_visible_until_the_fade_deadline() {
    let mut flash = seeded(1000.0, 3);
    flash.advance(1000.0 + FADE_DELAY_MS - 1.0);
    assert_eq!(flash.messages().len(), 3);
    assert!(flash.messages().iter().all(|msg| msg.phase == FlashPhase::Visible));
}

#[test]
fn all_banners_fade_at_five_seconds_and_still_exist() {
    let mut flash = seeded(0.0, 3);
    flash.advance(FADE_DELAY_MS);
    assert_eq!(flash.messages().len(), 3);
    assert!(flash.messages().iter().all(|msg| msg.phase == FlashPhase::Fading));
}

#[test]
fn all_banners_are_gone_after_the_fade_animation() {
    let mut flash = seeded(0.0, 3);
    flash.advance(FADE_DELAY_MS);
    flash.advance(FADE_DELAY_MS + REMOVE_DELAY_MS);
    assert!(flash.messages().is_empty());
}

#[test]
fn late_advance_catches_up_both_phases_at_once() {
    let mut flash = seeded(0.0, 1);
    flash.advance(10_000.0);
    assert!(flash.messages().is_empty());
}

#[test]
fn timers_are_independent_per_banner() {
    let mut flash = FlashState::default();
    flash.seed(0.0, [("early".to_owned(), FlashLevel::Message)]);
    flash.seed(2000.0, [("late".to_owned(), FlashLevel::Message)]);

    // Early banner is gone at +5400; the late one has not even faded yet.
    flash.advance(FADE_DELAY_MS + REMOVE_DELAY_MS);
    assert_eq!(flash.messages().len(), 1);
    assert_eq!(flash.messages()[0].text, "late");
    assert_eq!(flash.messages()[0].phase, FlashPhase::Visible);

    // The late banner fades on its own schedule, 2000 ms behind.
    flash.advance(2000.0 + FADE_DELAY_MS);
    assert_eq!(flash.messages().len(), 1);
    assert_eq!(flash.messages()[0].phase, FlashPhase::Fading);
    flash.advance(2000.0 + FADE_DELAY_MS + REMOVE_DELAY_MS);
    assert!(flash.messages().is_empty());
}

#[test]
fn next_deadline_tracks_the_earliest_pending_transition() {
    let mut flash = seeded(0.0, 1);
    assert_eq!(flash.next_deadline(), Some(FADE_DELAY_MS));
    flash.advance(FADE_DELAY_MS);
    assert_eq!(flash.next_deadline(), Some(FADE_DELAY_MS + REMOVE_DELAY_MS));
    flash.advance(FADE_DELAY_MS + REMOVE_DELAY_MS);
    assert_eq!(flash.next_deadline(), None);
}

#[test]
fn empty_state_has_no_deadline() {
    assert_eq!(FlashState::default().next_deadline(), None);
}

#[test]
fn wait_millis_rounds_fractional_deadlines_up() {
    assert_eq!(wait_millis(5000.0, 0.0), 5000);
    assert_eq!(wait_millis(5000.5, 0.0), 5001);
    assert_eq!(wait_millis(5000.0, 4999.2), 1);
}

#[test]
fn wait_millis_clamps_past_deadlines_to_zero() {
    assert_eq!(wait_millis(5000.0, 5000.0), 0);
    assert_eq!(wait_millis(5000.0, 6000.0), 0);
}

// =============================================================
// Cancellation and the double-removal guard
// =============================================================

#[test]
fn dismiss_removes_a_live_banner() {
    let mut flash = seeded(0.0, 2);
    let id = flash.messages()[0].id;
    assert!(flash.dismiss(id));
    assert_eq!(flash.messages().len(), 1);
}

#[test]
fn dismissing_an_absent_banner_reports_false() {
    let mut flash = seeded(0.0, 1);
    let id = flash.messages()[0].id;
    assert!(flash.dismiss(id));
    assert!(!flash.dismiss(id));
}

#[test]
fn advance_after_dismiss_does_not_resurrect_anything() {
    let mut flash = seeded(0.0, 1);
    let id = flash.messages()[0].id;
    flash.dismiss(id);
    flash.advance(FADE_DELAY_MS + REMOVE_DELAY_MS);
    assert!(flash.messages().is_empty());
}

#[test]
fn ids_stay_unique_across_seeds() {
    let mut flash = seeded(0.0, 2);
    flash.seed(500.0, [("more".to_owned(), FlashLevel::Success)]);
    let mut ids: Vec<u64> = flash.messages().iter().map(|msg| msg.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

// =============================================================
// Levels and classes
// =============================================================

#[test]
fn categories_map_to_levels() {
    assert_eq!(FlashLevel::from_category("success"), FlashLevel::Success);
    assert_eq!(FlashLevel::from_category("danger"), FlashLevel::Danger);
    assert_eq!(FlashLevel::from_category("error"), FlashLevel::Error);
}

#[test]
fn unknown_categories_render_as_plain_messages() {
    assert_eq!(FlashLevel::from_category("warning"), FlashLevel::Message);
    assert_eq!(FlashLevel::from_category(""), FlashLevel::Message);
}

#[test]
fn alert_class_carries_the_level_modifier() {
    assert_eq!(FlashLevel::Success.alert_class(), "alert alert-success");
    assert_eq!(FlashLevel::Danger.alert_class(), "alert alert-danger");
    assert_eq!(FlashLevel::Error.alert_class(), "alert alert-error");
    assert_eq!(FlashLevel::Message.alert_class(), "alert");
}

#[test]
fn fading_banners_gain_the_fade_marker_class() {
    let mut flash = seeded(0.0, 1);
    assert!(!flash.messages()[0].class().contains("fade-out"));
    flash.advance(FADE_DELAY_MS);
    assert!(flash.messages()[0].class().ends_with("fade-out"));
}
