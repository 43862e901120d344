use r_widgets::colors::Colors;
use ratatui::{Terminal, backend::TestBackend, style::Modifier};

use super::*;

fn render(header: &Header) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
    let colors = Colors::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                colors: &colors,
                focused: false,
            };

            header
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

#[test]
fn renders_bold_title() {
    let buf = render(&Header::new("Input Fields"));

    assert_eq!(buf[(0, 0)].symbol(), "I");
    assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
    assert_eq!(buf[(0, 0)].fg, Colors::default().header_fg);
}

#[test]
fn renders_muted_status() {
    let buf = render(&Header::muted("Selected 1: Ankur"));

    assert_eq!(buf[(0, 0)].symbol(), "S");
    assert!(!buf[(0, 0)].modifier.contains(Modifier::BOLD));
    assert_eq!(buf[(0, 0)].fg, Colors::default().muted);
}
