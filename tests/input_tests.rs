//! Tests for the keyboard watcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pullbar::terminal::{
    is_cancel_byte, key_byte, watch, InputWatcher, TerminalGuard, CTRL_C, ESC,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

mod common;
use common::helpers::*;

const POLL: Duration = Duration::from_millis(10);

#[test]
fn test_cancel_bytes() {
    assert!(is_cancel_byte(27));
    assert!(is_cancel_byte(3));
    assert!(!is_cancel_byte(b'q'));
    assert!(!is_cancel_byte(b'\r'));
}

#[test]
fn test_key_bytes() {
    let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);

    assert_eq!(key_byte(&esc), Some(ESC));
    assert_eq!(key_byte(&ctrl_c), Some(CTRL_C));
    assert_eq!(key_byte(&plain_c), Some(b'c'));
    assert_eq!(key_byte(&enter), Some(b'\r'));
    assert_eq!(key_byte(&f1), None);
}

#[test]
fn test_watch_cancels_on_escape() {
    let cancel = CancellationToken::new();
    let pressed = watch(ScriptedKeys::new(b"ab\r\x1bq"), &cancel, POLL);

    assert_eq!(pressed, Some(ESC));
    assert!(cancel.is_cancelled());
}

#[test]
fn test_watch_cancels_on_ctrl_c() {
    let cancel = CancellationToken::new();
    assert_eq!(watch(ScriptedKeys::new(&[b'x', 3]), &cancel, POLL), Some(CTRL_C));
    assert!(cancel.is_cancelled());
}

#[test]
fn test_watch_returns_when_already_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    assert_eq!(watch(ScriptedKeys::new(&[ESC]), &cancel, POLL), None);
}

#[test]
fn test_watch_stops_on_input_error_without_cancelling() {
    let cancel = CancellationToken::new();
    assert_eq!(watch(BrokenKeys, &cancel, POLL), None);
    assert!(!cancel.is_cancelled());
}

#[tokio::test]
async fn test_watcher_stops_when_cancelled_elsewhere() {
    let cancel = CancellationToken::new();
    let watcher = InputWatcher::spawn(ScriptedKeys::new(b"abc"), cancel.clone(), POLL);

    tokio::time::sleep(Duration::from_millis(30)).await;
    cancel.cancel();

    let pressed = tokio::time::timeout(Duration::from_secs(2), watcher.join())
        .await
        .expect("watcher did not stop");
    assert_eq!(pressed, None);
}

#[tokio::test]
async fn test_watcher_cancels_pump() {
    let cancel = CancellationToken::new();
    let watcher = InputWatcher::spawn(ScriptedKeys::new(&[ESC]), cancel.clone(), POLL);

    tokio::time::timeout(Duration::from_secs(2), cancel.cancelled())
        .await
        .expect("token was not cancelled");
    assert_eq!(watcher.join().await, Some(ESC));
}

#[test]
fn test_inert_guard_restores_once() {
    let mut guard = TerminalGuard::inert();
    assert!(!guard.is_raw());
    guard.restore();
    assert!(guard.is_restored());
    guard.restore();
    assert!(guard.is_restored());
}

#[test]
fn test_inert_guard_shows_cursor_on_terminal_stdout() {
    use std::io::IsTerminal;

    let guard = TerminalGuard::inert();
    assert_eq!(guard.restores_cursor(), std::io::stdout().is_terminal());
}

#[tokio::test]
async fn test_watcher_stops_when_owner_unwinds() {
    let cancel = CancellationToken::new();
    let watcher = InputWatcher::spawn(ScriptedKeys::new(b"abc"), cancel.clone(), POLL);

    let owner = cancel.clone();
    let pump = tokio::spawn(async move {
        let _stop_watcher = owner.drop_guard();
        panic!("pump failed");
    });
    assert!(pump.await.unwrap_err().is_panic());

    let pressed = tokio::time::timeout(Duration::from_secs(2), watcher.join())
        .await
        .expect("watcher kept running");
    assert_eq!(pressed, None);
    assert!(cancel.is_cancelled());
}
