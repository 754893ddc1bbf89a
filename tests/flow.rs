use booking_ui::booking::Outcome;
use booking_ui::confirm::{self, Press, ARM_WINDOW_MS};
use booking_ui::cookie::cookie_value;
use booking_ui::counters::tally;
use booking_ui::models::{NotificationEvent, SlotState};
use booking_ui::notify::decide;
use booking_ui::password;
use booking_ui::state::parse_interval;
use booking_ui::toast::Severity;

fn payload(event_id: &str, ground: &str, time: &str) -> NotificationEvent {
    NotificationEvent {
        event_id: Some(event_id.to_string()),
        ground: ground.to_string(),
        time: time.to_string(),
    }
}

#[test]
fn first_poll_shows_toast_and_second_is_silent() {
    // No stored id yet: the event gets announced once.
    let event = payload("42", "Court A", "18:30");
    let live = decide(&event, None).expect("first poll should toast");
    assert_eq!(live.message, "Court A booked at 18:30");
    assert_eq!(live.event_id, "42");

    // Storage now holds "42"; an identical poll stays quiet.
    assert_eq!(decide(&event, Some(live.event_id.as_str())), None);
}

#[test]
fn dedup_tracks_the_most_recent_event() {
    let mut last_seen: Option<String> = None;
    let polls = [
        payload("42", "Court A", "18:30"),
        payload("42", "Court A", "18:30"),
        payload("43", "Court B", "19:00"),
        payload("43", "Court B", "19:00"),
    ];

    let mut shown = Vec::new();
    for event in &polls {
        if let Some(live) = decide(event, last_seen.as_deref()) {
            last_seen = Some(live.event_id.clone());
            shown.push(live.message);
        }
    }

    assert_eq!(shown, vec!["Court A booked at 18:30", "Court B booked at 19:00"]);
    assert_eq!(last_seen.as_deref(), Some("43"));
}

#[test]
fn counter_totals_match_slot_states() {
    // a available, b booked, c past, d your -> (a, b+c, d)
    let states: Vec<SlotState> = ["available", "available", "available", "booked", "past", "past", "your"]
        .iter()
        .filter_map(|value| SlotState::parse(value))
        .collect();

    let totals = tally(states);
    assert_eq!(totals.available, 3);
    assert_eq!(totals.booked, 3);
    assert_eq!(totals.yours, 1);
}

#[test]
fn unknown_slot_markers_do_not_count() {
    let states: Vec<SlotState> = ["available", "held", "maintenance"]
        .iter()
        .filter_map(|value| SlotState::parse(value))
        .collect();

    let totals = tally(states);
    assert_eq!(totals.available, 1);
    assert_eq!(totals.booked, 0);
    assert_eq!(totals.yours, 0);
}

#[test]
fn second_tap_inside_window_proceeds() {
    let now = 100_000.0;
    let Press::Arm { until } = confirm::press(None, now) else {
        panic!("first tap must arm");
    };
    assert_eq!(until, now + ARM_WINDOW_MS);
    assert_eq!(confirm::press(Some(until), now + 1_000.0), Press::Proceed);
}

#[test]
fn tap_after_window_rearms_instead_of_proceeding() {
    let now = 100_000.0;
    let Press::Arm { until } = confirm::press(None, now) else {
        panic!("first tap must arm");
    };

    let late = now + ARM_WINDOW_MS + 1.0;
    match confirm::press(Some(until), late) {
        Press::Arm { until: rearmed } => assert_eq!(rearmed, late + ARM_WINDOW_MS),
        Press::Proceed => panic!("expired window must not proceed"),
    }
    assert!(confirm::disarm_due(Some(until), late));
}

#[test]
fn booking_outcomes_drive_the_three_ui_paths() {
    // Redirected response: follow the target.
    assert_eq!(
        Outcome::classify(true, true, "/bookings/receipt/9/".into()),
        Outcome::Follow("/bookings/receipt/9/".into())
    );
    // Plain 2xx: reload in place.
    assert_eq!(Outcome::classify(false, true, "/book/9/".into()), Outcome::Reload);
    // Anything else: failure, button back to retryable.
    assert_eq!(Outcome::classify(false, false, "/book/9/".into()), Outcome::Failed);
}

#[test]
fn csrf_token_comes_from_the_cookie_jar() {
    let cookies = "theme=dark; csrftoken=f00dcafe; sessionid=s3cr3t";
    assert_eq!(cookie_value(cookies, "csrftoken"), Some("f00dcafe".into()));
    assert_eq!(cookie_value("theme=dark", "csrftoken"), None);
}

#[test]
fn toast_severities_cover_the_template_labels() {
    assert_eq!(Severity::from_label("success"), Severity::Success);
    assert_eq!(Severity::from_label("danger"), Severity::Danger);
    assert_eq!(Severity::from_label("warning"), Severity::Warning);
    assert_eq!(Severity::from_label("info"), Severity::Default);
}

#[test]
fn password_meter_spans_weak_to_strong() {
    let weak = password::percent(password::score("cat"));
    let strong = password::percent(password::score("Str0ng!pass"));
    assert_eq!(password::Tier::for_percent(weak), password::Tier::Weak);
    assert_eq!(password::Tier::for_percent(strong), password::Tier::Strong);
}

#[test]
fn poll_interval_meta_override() {
    assert_eq!(parse_interval(Some("15000".into())), 15_000);
    assert_eq!(parse_interval(None), 30 * 60 * 1000);
}
