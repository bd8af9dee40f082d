use std::{
    path::Path,
    thread,
    time::{Duration, Instant},
};

use chordscroll_engine::{
    Dispatcher, Element, Error, KeyEvent, Outcome, PageViewport, SharedDispatcher, Viewport,
};
use config::{Action, MissPolicy};
use keycode::Combo;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A page large enough to scroll in both directions, parked at (1000, 1000).
fn page() -> PageViewport {
    let mut v = PageViewport::new(800, 600, 4000, 10_000);
    v.scroll_to(1000, 1000);
    v
}

fn event(spec: &str) -> KeyEvent {
    KeyEvent::from_combo(&Combo::parse(spec).expect("valid combo"))
}

fn press(d: &mut Dispatcher, view: &mut PageViewport, spec: &str, at: Instant) -> Outcome {
    let mut ev = event(spec);
    d.handle_at(&mut ev, view, at)
}

fn dispatcher_from(ron: &str) -> Dispatcher {
    Dispatcher::new(config::load_from_str(ron, None).expect("valid test config"))
}

#[test]
fn single_step_scrolls() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(
        press(&mut d, &mut v, "h", t0),
        Outcome::Fired {
            index: 0,
            action: Action::Left
        }
    );
    assert_eq!(v.offset(), (950, 1000));
    press(&mut d, &mut v, "j", t0 + ms(10));
    assert_eq!(v.offset(), (950, 1050));
    press(&mut d, &mut v, "k", t0 + ms(20));
    assert_eq!(v.offset(), (950, 1000));
    press(&mut d, &mut v, "l", t0 + ms(30));
    assert_eq!(v.offset(), (1000, 1000));
}

#[test]
fn half_page_and_bottom() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    press(&mut d, &mut v, "ctrl+d", t0);
    assert_eq!(v.offset(), (1000, 1500));
    press(&mut d, &mut v, "ctrl+u", t0 + ms(10));
    assert_eq!(v.offset(), (1000, 1000));
    press(&mut d, &mut v, "shift+g", t0 + ms(20));
    assert_eq!(v.offset(), (1000, v.max_offset().1));
}

#[test]
fn fired_event_is_suppressed() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let mut ev = event("j");
    d.handle_at(&mut ev, &mut v, Instant::now());
    assert!(ev.default_prevented());
    assert!(ev.propagation_stopped());

    let mut ev = event("x");
    assert_eq!(d.handle_at(&mut ev, &mut v, Instant::now()), Outcome::Unmapped);
    assert!(!ev.default_prevented());
    assert!(!ev.propagation_stopped());
}

#[test]
fn plain_g_is_not_shift_g() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();
    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    assert_eq!(v.offset(), (1000, 1000));
    assert_eq!(d.matcher().cursor(), 1);
}

#[test]
fn gg_goes_to_top_and_never_fires_single_g() {
    let mut d = dispatcher_from(
        r#"(bindings: [
            ("g g", "Top", top),
            ("g", "Nudge", scroll(0, 7)),
        ])"#,
    );
    let mut v = page();
    let t0 = Instant::now();

    let mut first = event("g");
    assert_eq!(d.handle_at(&mut first, &mut v, t0), Outcome::Pending);
    assert!(!first.default_prevented());
    assert_eq!(v.offset(), (1000, 1000));

    assert_eq!(
        press(&mut d, &mut v, "g", t0 + ms(100)),
        Outcome::Fired {
            index: 0,
            action: Action::Top
        }
    );
    assert_eq!(v.offset(), (1000, 0));
    assert_eq!(d.matcher().cursor(), 0);
}

#[test]
fn slow_second_g_starts_over() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    // Exactly at the window the first g is forgotten.
    assert_eq!(press(&mut d, &mut v, "g", t0 + ms(200)), Outcome::Pending);
    assert_eq!(v.offset(), (1000, 1000));
    // A third g inside the window of the second completes.
    assert_eq!(
        press(&mut d, &mut v, "g", t0 + ms(350)),
        Outcome::Fired {
            index: 4,
            action: Action::Top
        }
    );
    assert_eq!(v.offset(), (1000, 0));
}

#[test]
fn editable_targets_are_ignored() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    for target in [
        Element::new("INPUT"),
        Element::new("TEXTAREA"),
        Element::new("SELECT"),
        Element::new("DIV").content_editable("true"),
    ] {
        let mut ev = event("j").with_path(vec![target, Element::new("BODY")]);
        assert_eq!(d.handle_at(&mut ev, &mut v, t0), Outcome::Editable);
        assert!(!ev.default_prevented());
    }

    // An editable ancestor also shields the event, and leaves chord progress alone.
    let mut ev = event("g").with_path(vec![
        Element::new("B"),
        Element::new("DIV").content_editable("true"),
    ]);
    assert_eq!(d.handle_at(&mut ev, &mut v, t0), Outcome::Editable);
    assert_eq!(d.matcher().cursor(), 0);
    assert_eq!(v.offset(), (1000, 1000));

    let mut ev = event("j").with_path(vec![Element::new("P"), Element::new("BODY")]);
    assert!(matches!(
        d.handle_at(&mut ev, &mut v, t0),
        Outcome::Fired { .. }
    ));
}

#[test]
fn jump_back_restores_earlier_position() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    // Scroll to P1.
    press(&mut d, &mut v, "j", t0);
    let p1 = v.offset();
    assert_eq!(p1, (1000, 1050));
    // Later, scroll to P2.
    press(&mut d, &mut v, "ctrl+d", t0 + ms(600));
    let p2 = v.offset();
    assert_eq!(p2, (1000, 1550));

    assert_eq!(press(&mut d, &mut v, "'", t0 + ms(1000)), Outcome::Pending);
    assert_eq!(
        press(&mut d, &mut v, "'", t0 + ms(1100)),
        Outcome::Fired {
            index: 8,
            action: Action::JumpBack
        }
    );
    assert_eq!(v.offset(), p1);
    assert_eq!(d.jump_back().saved(), Some(p2));

    // Toggling again returns to P2.
    press(&mut d, &mut v, "'", t0 + ms(2000));
    press(&mut d, &mut v, "'", t0 + ms(2050));
    assert_eq!(v.offset(), p2);
}

#[test]
fn jump_back_ignores_burst() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    for i in 0..5 {
        press(&mut d, &mut v, "j", t0 + ms(i * 100));
    }
    assert_eq!(v.offset(), (1000, 1250));
    press(&mut d, &mut v, "'", t0 + ms(1000));
    press(&mut d, &mut v, "'", t0 + ms(1050));
    assert_eq!(v.offset(), (1000, 1000));
}

#[test]
fn reset_policy_lets_other_key_fire_after_partial_chord() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    assert_eq!(
        press(&mut d, &mut v, "j", t0 + ms(50)),
        Outcome::Fired {
            index: 1,
            action: Action::Down
        }
    );
    assert_eq!(v.offset(), (1000, 1050));
    assert_eq!(d.matcher().cursor(), 0);
}

#[test]
fn keep_policy_preserves_stale_cursor() {
    let mut d = dispatcher_from(
        r#"(
            miss_policy: keep,
            bindings: [
                ("g g", "Top", top),
                ("z j", "Odd", scroll(0, 1)),
                ("j", "Down", down),
            ],
        )"#,
    );
    assert_eq!(d.config().miss_policy, MissPolicy::Keep);
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    // At cursor 1 the j is tested against index 1 of each chord: it completes "z j".
    assert_eq!(
        press(&mut d, &mut v, "j", t0 + ms(50)),
        Outcome::Fired {
            index: 1,
            action: Action::Scroll(0, 1)
        }
    );
    assert_eq!(v.offset(), (1000, 1001));
}

#[test]
fn keep_policy_swallows_unmatched_key() {
    let mut d = dispatcher_from(r#"(miss_policy: keep)"#);
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    assert_eq!(press(&mut d, &mut v, "j", t0 + ms(50)), Outcome::Unmapped);
    assert_eq!(v.offset(), (1000, 1000));
    // After the window, j works again.
    assert!(matches!(
        press(&mut d, &mut v, "j", t0 + ms(300)),
        Outcome::Fired { .. }
    ));
}

#[test]
fn longer_chord_completes_through_earlier_multi_key_prefix() {
    let mut d = dispatcher_from(
        r#"(bindings: [("g g", "Top", top), ("g g g", "Nudge", scroll(0, 7))])"#,
    );
    let mut v = page();
    let t0 = Instant::now();

    assert_eq!(press(&mut d, &mut v, "g", t0), Outcome::Pending);
    assert_eq!(
        press(&mut d, &mut v, "g", t0 + ms(50)),
        Outcome::Fired {
            index: 1,
            action: Action::Scroll(0, 7)
        }
    );
    assert_eq!(v.offset(), (1000, 1007));
}

#[test]
fn unknown_key_code_is_unmapped() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let mut ev = KeyEvent::new(4095);
    assert_eq!(d.handle_at(&mut ev, &mut v, Instant::now()), Outcome::Unmapped);
    assert!(!ev.default_prevented());
}

#[test]
fn set_config_discards_progress() {
    let mut d = Dispatcher::default();
    let mut v = page();
    let t0 = Instant::now();
    press(&mut d, &mut v, "g", t0);
    assert_eq!(d.matcher().cursor(), 1);
    d.set_config(config::load_from_str("(step: 10)", None).expect("config"));
    assert_eq!(d.matcher().cursor(), 0);
    press(&mut d, &mut v, "j", t0 + ms(10));
    assert_eq!(v.offset(), (1000, 1010));
}

#[test]
fn shared_dispatcher_serialises_threads() {
    let shared = SharedDispatcher::new(Dispatcher::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = shared.clone();
            thread::spawn(move || {
                let mut v = page();
                for _ in 0..25 {
                    let mut ev = event("j");
                    d.handle(&mut ev, &mut v);
                }
                v.offset()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("thread"), (1000, 1000 + 25 * 50));
    }
    assert_eq!(shared.cursor(), 0);
}

#[test]
fn load_reports_missing_config() {
    let err = Dispatcher::load(Some(Path::new("/nonexistent/chordscroll.ron"))).unwrap_err();
    assert!(matches!(err, Error::Config(config::Error::Read { .. })));
}
