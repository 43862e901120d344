use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::pages::sample_rows;

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn send(page: &mut DemoPage, codes: &[KeyCode]) {
    for code in codes {
        page.process_event(&key(*code)).unwrap();
        page.sync().unwrap();
    }
}

fn type_text(page: &mut DemoPage, text: &str) {
    let codes = text.chars().map(KeyCode::Char).collect::<Vec<_>>();
    send(page, &codes);
}

#[test]
fn name_field_echoes_typed_value() {
    let mut page = DemoPage::new(sample_rows()).unwrap();

    type_text(&mut page, "Kunal");

    let name = page.stack().field_at(NAME_SLOT).unwrap();
    assert_eq!(name.value(), "Kunal");
    assert!(name.visual_state().show_clear);
}

#[test]
fn name_field_clears_with_shortcut() {
    let mut page = DemoPage::new(sample_rows()).unwrap();
    type_text(&mut page, "Kunal");

    page.process_event(&Event::Key(KeyEvent::new(
        KeyCode::Char('x'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    page.sync().unwrap();

    assert_eq!(page.stack().field_at(NAME_SLOT).unwrap().value(), "");
}

#[test]
fn password_is_invalid_while_too_short() {
    let mut page = DemoPage::new(sample_rows()).unwrap();
    send(&mut page, &[KeyCode::Tab]);

    let password = page.stack().field_at(PASSWORD_SLOT).unwrap();
    assert!(!password.props().invalid);

    type_text(&mut page, "abc");
    let password = page.stack().field_at(PASSWORD_SLOT).unwrap();
    assert_eq!(password.value(), "abc");
    assert!(password.props().invalid);

    type_text(&mut page, "def");
    let password = page.stack().field_at(PASSWORD_SLOT).unwrap();
    assert!(!password.props().invalid);
    assert_eq!(password.display_text(), "••••••");
}

#[test]
fn disabled_field_ignores_typing() {
    let mut page = DemoPage::new(sample_rows()).unwrap();
    send(&mut page, &[KeyCode::Tab, KeyCode::Tab]);

    type_text(&mut page, "abc");

    assert_eq!(page.stack().field_at(3).unwrap().value(), "");
}

#[test]
fn sorted_selection_is_reported_in_selection_order() {
    let mut page = DemoPage::new(sample_rows()).unwrap();
    send(
        &mut page,
        &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Tab],
    );
    assert_eq!(page.stack().focus(), Some(TABLE_SLOT));

    send(
        &mut page,
        &[
            KeyCode::Enter,
            KeyCode::Char(' '),
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char(' '),
        ],
    );

    assert_eq!(
        page.stack().selection_summary().as_deref(),
        Some("Selected 2: Ankur, Roushan")
    );
}
