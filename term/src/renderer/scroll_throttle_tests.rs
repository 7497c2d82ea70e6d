use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MouseEvent, MouseEventKind,
};
use std::{thread, time::Duration};

use super::ScrollThrottle;

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

#[test]
fn first_page_turn_is_not_throttled() {
    for code in [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('h'),
        KeyCode::Char('l'),
    ] {
        let throttle = ScrollThrottle::default();
        assert!(!throttle.throttled(&key_event(code)));
    }
}

#[test]
fn rapid_page_turns_are_throttled() {
    let throttle = ScrollThrottle::new(Duration::from_millis(50));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));
    assert!(throttle.throttled(&key_event(KeyCode::Right)));
    assert!(throttle.throttled(&key_event(KeyCode::Right)));
}

#[test]
fn page_turns_after_throttle_duration_are_not_throttled() {
    let throttle = ScrollThrottle::new(Duration::from_millis(20));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));

    thread::sleep(Duration::from_millis(25));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));
}

#[test]
fn left_and_right_are_throttled_independently() {
    let throttle = ScrollThrottle::new(Duration::from_millis(50));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));
    assert!(throttle.throttled(&key_event(KeyCode::Right)));

    assert!(!throttle.throttled(&key_event(KeyCode::Left)));
    assert!(throttle.throttled(&key_event(KeyCode::Left)));
}

#[test]
fn arrow_keys_and_vi_keys_share_same_throttle() {
    let throttle = ScrollThrottle::new(Duration::from_millis(50));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));
    assert!(throttle.throttled(&key_event(KeyCode::Char('l'))));

    assert!(!throttle.throttled(&key_event(KeyCode::Char('h'))));
    assert!(throttle.throttled(&key_event(KeyCode::Left)));
}

#[test]
fn other_events_are_never_throttled() {
    let throttle = ScrollThrottle::new(Duration::from_millis(50));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));

    assert!(!throttle.throttled(&key_event(KeyCode::Char('t'))));
    assert!(!throttle.throttled(&key_event(KeyCode::Char(']'))));
    assert!(!throttle.throttled(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })));
}

#[test]
fn released_keys_are_not_throttled() {
    let throttle = ScrollThrottle::new(Duration::from_millis(50));

    assert!(!throttle.throttled(&key_event(KeyCode::Right)));

    let release = Event::Key(KeyEvent {
        code: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert!(!throttle.throttled(&release));
}

#[test]
fn throttled_turns_dont_reset_timer() {
    // long window with short sleeps for imprecise ci runners
    let throttle = ScrollThrottle::new(Duration::from_millis(1000));

    assert!(!throttle.throttled(&key_event(KeyCode::Left)));

    thread::sleep(Duration::from_millis(10));
    assert!(throttle.throttled(&key_event(KeyCode::Left)));

    thread::sleep(Duration::from_millis(10));
    assert!(throttle.throttled(&key_event(KeyCode::Left)));

    thread::sleep(Duration::from_millis(1000));
    assert!(!throttle.throttled(&key_event(KeyCode::Left)));
}
