use std::{cell::RefCell, rc::Rc};

use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};

use crate::{colors::Colors, input::MockChangeListener};

use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn render(field: &InputField, width: u16) -> Vec<String> {
    let mut terminal =
        Terminal::new(TestBackend::new(width, field.height())).unwrap();
    let colors = Colors::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                colors: &colors,
                focused: false,
            };

            field
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    buffer_lines(terminal.backend().buffer())
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |v: &str| sink.borrow_mut().push(v.to_string()))
}

fn password_props() -> InputFieldProps {
    InputFieldProps::builder()
        .label("Password")
        .placeholder("Enter password")
        .input_type(InputType::Password)
        .helper_text("At least 6 characters")
        .error_message("Min 6 characters")
        .build()
        .unwrap()
}

#[test]
fn builds_props_with_defaults() {
    let props = InputFieldProps::builder()
        .label("Your Name")
        .clearable(true)
        .build()
        .unwrap();

    assert_eq!(props.label.as_deref(), Some("Your Name"));
    assert!(props.clearable);
    assert!(props.placeholder.is_none());
    assert_eq!(props.input_type, InputType::Text);
    assert_eq!(props.variant, Variant::Outlined);
    assert_eq!(props.size, Size::Medium);
    assert!(!props.disabled && !props.invalid && !props.loading);
}

#[test]
fn mode_follows_initial_value() {
    let field = InputField::new(InputFieldProps::default(), None, None);
    assert!(!field.is_controlled());

    let field = InputField::new(
        InputFieldProps::default(),
        Some("ab".to_string()),
        None,
    );
    assert!(field.is_controlled());
    assert_eq!(field.value(), "ab");
}

#[test]
fn controlled_typing_notifies_without_changing_value() {
    let (calls, listener) = recorder();
    let mut field =
        InputField::controlled(InputFieldProps::default(), "ab", listener);

    assert!(field.insert_char('c'));
    assert_eq!(field.value(), "ab");
    assert_eq!(*calls.borrow(), vec!["abc".to_string()]);

    field.set_value("abc").unwrap();
    assert_eq!(field.value(), "abc");

    assert!(field.delete_char());
    assert_eq!(*calls.borrow(), vec!["abc".to_string(), "ab".to_string()]);
}

#[test]
fn controlled_without_listener_stays_read_only() {
    let mut field = InputField::new(
        InputFieldProps::default(),
        Some("fixed".to_string()),
        None,
    );

    field.insert_char('!');
    assert_eq!(field.value(), "fixed");
}

#[test]
fn uncontrolled_typing_updates_value() {
    let mut field = InputField::uncontrolled(InputFieldProps::default());

    for c in "hello".chars() {
        field.insert_char(c);
    }
    field.delete_char();

    assert_eq!(field.value(), "hell");
}

#[test]
fn uncontrolled_rejects_caller_value() {
    let mut field = InputField::uncontrolled(InputFieldProps::default());
    assert!(matches!(
        field.set_value("x"),
        Err(WidgetError::NotControlled)
    ));
}

#[test]
fn delete_on_empty_value_is_ignored() {
    let mut listener = MockChangeListener::new();
    listener.expect_on_change().never();

    let mut field =
        InputField::controlled(InputFieldProps::default(), "", listener);
    assert!(!field.delete_char());
}

#[test]
fn clear_notifies_empty_value_in_controlled_mode() {
    let mut listener = MockChangeListener::new();
    listener
        .expect_on_change()
        .withf(|v| v.is_empty())
        .times(1)
        .return_const(());

    let props = InputFieldProps::builder().clearable(true).build().unwrap();
    let mut field = InputField::controlled(props, "Kunal", listener);

    assert!(field.visual_state().show_clear);
    field.clear().unwrap();
}

#[test]
fn clear_is_unavailable_when_disabled() {
    let mut listener = MockChangeListener::new();
    listener.expect_on_change().never();

    let props = InputFieldProps::builder()
        .clearable(true)
        .disabled(true)
        .build()
        .unwrap();
    let mut field = InputField::controlled(props, "Kunal", listener);

    assert!(!field.visual_state().show_clear);
    assert!(matches!(field.clear(), Err(WidgetError::ClearUnavailable)));
    assert!(
        !field
            .process_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL))
            .unwrap()
    );
}

#[test]
fn clear_is_unavailable_for_empty_or_non_clearable_fields() {
    let props = InputFieldProps::builder().clearable(true).build().unwrap();
    let mut field = InputField::uncontrolled(props);
    assert!(matches!(field.clear(), Err(WidgetError::ClearUnavailable)));

    let mut field = InputField::uncontrolled(InputFieldProps::default());
    field.insert_char('a');
    assert!(matches!(field.clear(), Err(WidgetError::ClearUnavailable)));
}

#[test]
fn clear_resets_uncontrolled_value() {
    let props = InputFieldProps::builder().clearable(true).build().unwrap();
    let mut field = InputField::uncontrolled(props);
    field.insert_char('a');

    field.clear().unwrap();
    assert_eq!(field.value(), "");
}

#[test]
fn reveal_toggles_obscuring_only() {
    let mut field = InputField::controlled(password_props(), "secret", |_: &str| {});

    assert_eq!(field.display_text(), "••••••");

    field.toggle_reveal().unwrap();
    assert!(field.is_revealed());
    assert_eq!(field.display_text(), "secret");
    assert_eq!(field.value(), "secret");

    field.toggle_reveal().unwrap();
    assert_eq!(field.display_text(), "••••••");
}

#[test]
fn reveal_is_unavailable_for_text_or_disabled_fields() {
    let mut field = InputField::uncontrolled(InputFieldProps::default());
    assert!(matches!(
        field.toggle_reveal(),
        Err(WidgetError::RevealUnavailable)
    ));

    let mut props = password_props();
    props.disabled = true;
    let mut field = InputField::uncontrolled(props);
    assert!(matches!(
        field.toggle_reveal(),
        Err(WidgetError::RevealUnavailable)
    ));
}

#[test]
fn disabled_field_ignores_keystrokes() {
    let props = InputFieldProps::builder().disabled(true).build().unwrap();
    let mut field = InputField::uncontrolled(props);

    assert!(
        !field
            .process_event(&key(KeyCode::Char('a'), KeyModifiers::NONE))
            .unwrap()
    );
    assert_eq!(field.value(), "");
}

#[test]
fn loading_field_accepts_keystrokes() {
    let props = InputFieldProps::builder().loading(true).build().unwrap();
    let mut field = InputField::uncontrolled(props);

    field
        .process_event(&key(KeyCode::Char('a'), KeyModifiers::NONE))
        .unwrap();
    field
        .process_event(&key(KeyCode::Char('B'), KeyModifiers::SHIFT))
        .unwrap();

    assert_eq!(field.value(), "aB");
}

#[test]
fn keyboard_shortcuts_clear_and_reveal() {
    let (calls, listener) = recorder();
    let mut props = password_props();
    props.clearable = true;
    let mut field = InputField::controlled(props, "secret", listener);

    assert!(
        field
            .process_event(&key(KeyCode::Char('r'), KeyModifiers::CONTROL))
            .unwrap()
    );
    assert!(field.is_revealed());

    assert!(
        field
            .process_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL))
            .unwrap()
    );
    assert_eq!(*calls.borrow(), vec![String::new()]);
}

#[test]
fn invalid_field_renders_error_instead_of_helper() {
    let mut props = password_props();
    props.invalid = true;
    let field = InputField::controlled(props, "ab", |_: &str| {});

    let lines = render(&field, 40);

    assert!(lines.iter().any(|l| l.contains("Min 6 characters")));
    assert!(!lines.iter().any(|l| l.contains("At least 6 characters")));
}

#[test]
fn valid_field_renders_helper() {
    let field = InputField::controlled(password_props(), "secret", |_: &str| {});

    let lines = render(&field, 40);

    assert!(lines.iter().any(|l| l.contains("At least 6 characters")));
    assert!(!lines.iter().any(|l| l.contains("Min 6 characters")));
}

#[test]
fn renders_label_masked_value_and_affordances() {
    let mut props = password_props();
    props.clearable = true;
    let field = InputField::controlled(props, "secret", |_: &str| {});

    let lines = render(&field, 40);

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Password"));
    assert!(lines[2].contains("••••••"));
    assert!(lines[2].contains(SHOW_LABEL));
    assert!(lines[2].contains(CLEAR_GLYPH));
    assert!(!lines[2].contains("secret"));
}

#[test]
fn renders_placeholder_without_affordances_when_disabled() {
    let props = InputFieldProps::builder()
        .label("Disabled")
        .placeholder("Disabled field")
        .input_type(InputType::Password)
        .clearable(true)
        .disabled(true)
        .build()
        .unwrap();
    let field = InputField::uncontrolled(props);

    let lines = render(&field, 40);

    assert!(lines[2].contains("Disabled field"));
    assert!(!lines[2].contains(SHOW_LABEL));
    assert!(!lines[2].contains(CLEAR_GLYPH));
}

#[test]
fn height_follows_variant_and_size() {
    let mut props = InputFieldProps::default();
    assert_eq!(InputField::uncontrolled(props.clone()).height(), 3);

    props.variant = Variant::Filled;
    props.size = Size::Small;
    assert_eq!(InputField::uncontrolled(props.clone()).height(), 1);

    props.variant = Variant::Ghost;
    props.size = Size::Large;
    props.label = Some("Large".to_string());
    assert_eq!(InputField::uncontrolled(props).height(), 5);
}
