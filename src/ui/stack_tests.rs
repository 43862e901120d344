use r_widgets::{colors::Colors, table::Column};
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn people() -> Vec<Row> {
    vec![
        Row::new().with("name", "Kunal").with("age", 21),
        Row::new().with("name", "Ankur").with("age", 21),
    ]
}

fn flag_short(value: &str, props: &mut InputFieldProps) {
    props.invalid = value.chars().count() < 3;
}

fn new_stack() -> WidgetStack {
    let table = DataTable::new(
        people(),
        vec![Column::new("name", "Name", "name").sortable()],
    )
    .unwrap()
    .selectable(true);

    WidgetStack::new()
        .heading("Fields")
        .controlled_field(InputFieldProps::default(), Some(flag_short))
        .field(InputFieldProps::default())
        .heading("Table")
        .table(table)
}

#[test]
fn focus_starts_on_first_focusable_slot() {
    assert_eq!(new_stack().focus(), Some(1));
    assert_eq!(WidgetStack::new().heading("Only").focus(), None);
}

#[test]
fn tab_cycles_focus_skipping_headings() {
    let mut stack = new_stack();

    stack.process_event(&key(KeyCode::Tab)).unwrap();
    assert_eq!(stack.focus(), Some(2));

    stack.process_event(&key(KeyCode::Tab)).unwrap();
    assert_eq!(stack.focus(), Some(4));

    stack.process_event(&key(KeyCode::Tab)).unwrap();
    assert_eq!(stack.focus(), Some(1));

    stack.process_event(&key(KeyCode::BackTab)).unwrap();
    assert_eq!(stack.focus(), Some(4));
}

#[test]
fn controlled_field_updates_after_sync() {
    let mut stack = new_stack();

    assert!(stack.process_event(&key(KeyCode::Char('a'))).unwrap());
    assert_eq!(stack.field_at(1).unwrap().value(), "");

    stack.sync().unwrap();
    let field = stack.field_at(1).unwrap();
    assert_eq!(field.value(), "a");
    assert!(field.props().invalid);

    for c in "bc".chars() {
        stack.process_event(&key(KeyCode::Char(c))).unwrap();
        stack.sync().unwrap();
    }
    let field = stack.field_at(1).unwrap();
    assert_eq!(field.value(), "abc");
    assert!(!field.props().invalid);
}

#[test]
fn uncontrolled_field_updates_immediately() {
    let mut stack = new_stack();
    stack.focus_next();

    stack.process_event(&key(KeyCode::Char('z'))).unwrap();

    assert_eq!(stack.field_at(2).unwrap().value(), "z");
}

#[test]
fn table_selection_is_reported_after_sync() {
    let mut stack = new_stack();
    stack.focus_previous();
    assert_eq!(stack.focus(), Some(4));

    stack.process_event(&key(KeyCode::Char(' '))).unwrap();
    assert!(stack.selected().is_none());

    stack.sync().unwrap();
    assert_eq!(stack.selected().unwrap().len(), 1);
    assert_eq!(
        stack.selection_summary().as_deref(),
        Some("Selected 1: Kunal")
    );
}

#[test]
fn renders_every_slot() {
    let stack = new_stack();
    let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
    let colors = Colors::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                colors: &colors,
                focused: true,
            };

            stack
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let lines = (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>();

    assert!(lines[0].starts_with("Fields"));
    assert!(lines.iter().any(|l| l.starts_with("Table")));
    assert!(lines.iter().any(|l| l.contains("Kunal")));
}
