//! Top level UI: page switching, theme cycling and the footer legend.

use color_eyre::eyre::Result;
use r_widgets::{
    colors::{Colors, Theme},
    traits::{CustomWidgetContext, CustomWidgetRef},
};
use ratatui::{
    Frame,
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Margin},
    style::Style,
    widgets::{Block, Widget},
};

use crate::{
    config::ConfigManager,
    ui::{
        components::{footer::InfoFooter, header::Header},
        pages::{Page, PageID, catalog::CatalogPage, demo::DemoPage},
    },
};

const TITLE: &str = "r-widgets";

pub struct App {
    theme: Theme,
    colors: Colors,
    config: Option<ConfigManager>,
    demo: DemoPage,
    catalog: CatalogPage,
    active: PageID,
    should_quit: bool,
}

impl App {
    pub fn new(
        theme: Theme,
        config: Option<ConfigManager>,
        demo: DemoPage,
        catalog: CatalogPage,
        active: PageID,
    ) -> Self {
        Self {
            theme,
            colors: Colors::detect(theme),
            config,
            demo,
            catalog,
            active,
            should_quit: false,
        }
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub fn active_page(&self) -> PageID {
        self.active
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn page(&self) -> &dyn Page {
        match self.active {
            PageID::Demo => &self.demo,
            PageID::Catalog => &self.catalog,
        }
    }

    fn page_mut(&mut self) -> &mut dyn Page {
        match self.active {
            PageID::Demo => &mut self.demo,
            PageID::Catalog => &mut self.catalog,
        }
    }

    /// Switches to the next theme and persists it when a config is present.
    pub fn cycle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.next();
        self.colors = Colors::detect(self.theme);
        log::info!("theme changed to {}", self.theme);

        if let Some(config) = self.config.as_mut() {
            config.set_theme(self.theme)?;
        }

        Ok(())
    }

    pub fn switch_page(&mut self) {
        self.active = self.active.next();
        log::info!("showing {} page", self.active);
    }

    fn legend(&self) -> String {
        let page_legend = self.page().legend();
        let app_legend = format!(
            "(F2) switch page | (F3) theme: {} | (esc) quit",
            self.theme
        );

        if page_legend.is_empty() {
            app_legend
        } else {
            format!("{page_legend} | {app_legend}")
        }
    }

    /// Handles one terminal event and applies the notifications it produced.
    /// Returns true if the event was consumed.
    pub fn process_event(&mut self, evt: &Event) -> Result<bool> {
        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                // do not allow overriding ctrl-c
                KeyCode::Char('c')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    log::info!("APP RECEIVED CONTROL-C SEQUENCE");
                    self.should_quit = true;
                    return Ok(true);
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                    return Ok(true);
                }
                KeyCode::F(2) => {
                    self.switch_page();
                    return Ok(true);
                }
                KeyCode::F(3) => {
                    self.cycle_theme()?;
                    return Ok(true);
                }
                _ => {}
            }
        }

        let page = self.page_mut();
        let handled = page.process_event(evt)?;
        page.sync()?;
        Ok(handled)
    }

    pub fn draw(&self, frame: &mut Frame) -> r_widgets::error::Result<()> {
        let area = frame.area();
        let buf = frame.buffer_mut();

        Block::new()
            .style(Style::default().bg(self.colors.buffer_bg))
            .render(area, buf);

        let [title_area, page_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let ctx = CustomWidgetContext {
            colors: &self.colors,
            focused: true,
        };

        Header::new(&format!(" {} / {}", TITLE, self.active))
            .render_ref(title_area, buf, &ctx)?;

        self.page().render_ref(
            page_area.inner(Margin::new(1, 1)),
            buf,
            &ctx,
        )?;

        InfoFooter::new(self.legend()).render_ref(footer_area, buf, &ctx)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
