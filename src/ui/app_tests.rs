use ratatui::{Terminal, backend::TestBackend, crossterm::event::KeyEvent};
use tempfile::TempDir;

use crate::ui::pages::sample_rows;

use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn new_app(config: Option<ConfigManager>) -> App {
    App::new(
        Theme::Blue,
        config,
        DemoPage::new(sample_rows()).unwrap(),
        CatalogPage::new().unwrap(),
        PageID::Demo,
    )
}

fn config() -> (TempDir, String, ConfigManager) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("config.yml")
        .to_string_lossy()
        .to_string();
    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();
    (dir, path, manager)
}

#[test]
fn quits_on_escape_and_ctrl_c() {
    let mut app = new_app(None);
    assert!(!app.should_quit());
    app.process_event(&key(KeyCode::Esc, KeyModifiers::NONE))
        .unwrap();
    assert!(app.should_quit());

    let mut app = new_app(None);
    app.process_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn plain_c_is_forwarded_to_the_page() {
    let mut app = new_app(None);

    assert!(
        app.process_event(&key(KeyCode::Char('c'), KeyModifiers::NONE))
            .unwrap()
    );

    assert!(!app.should_quit());
}

#[test]
fn switches_pages() {
    let mut app = new_app(None);

    app.process_event(&key(KeyCode::F(2), KeyModifiers::NONE))
        .unwrap();
    assert_eq!(app.active_page(), PageID::Catalog);

    app.process_event(&key(KeyCode::F(2), KeyModifiers::NONE))
        .unwrap();
    assert_eq!(app.active_page(), PageID::Demo);
}

#[test]
fn cycles_and_persists_theme() {
    let (_dir, path, manager) = config();
    let mut app = new_app(Some(manager));

    app.process_event(&key(KeyCode::F(3), KeyModifiers::NONE))
        .unwrap();
    assert_eq!(app.theme(), Theme::Emerald);

    let reloaded = ConfigManager::builder().path(path).build().unwrap();
    assert_eq!(reloaded.theme(), Theme::Emerald);
}

#[test]
fn draws_title_page_and_legend() {
    let app = new_app(None);
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();

    terminal.draw(|frame| app.draw(frame).unwrap()).unwrap();

    let buf = terminal.backend().buffer();
    let lines = (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>();

    assert!(lines[0].starts_with(" r-widgets / demo"));
    assert!(lines.iter().any(|l| l.contains("Your Name")));
    assert!(lines.iter().any(|l| l.contains("Subhanshu")));
    assert!(lines[48].contains("(F3) theme: Blue"));
}
