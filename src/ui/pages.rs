//! Screens of the demo application.

use clap::ValueEnum;
use color_eyre::eyre::Result;
use r_widgets::{
    input::InputFieldProps,
    record::Row,
    table::Column,
    traits::{CustomWidgetRef, EventHandler},
};
use strum::Display;

pub mod catalog;
pub mod demo;

/// Identifies a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum PageID {
    Demo,
    Catalog,
}

impl PageID {
    pub fn next(self) -> PageID {
        match self {
            PageID::Demo => PageID::Catalog,
            PageID::Catalog => PageID::Demo,
        }
    }
}

pub trait Page: EventHandler + CustomWidgetRef {
    /// Page specific keys shown in the footer.
    fn legend(&self) -> &str {
        ""
    }

    /// Applies notifications produced while handling the last event.
    fn sync(&mut self) -> Result<()>;
}

pub fn sample_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("id", 1)
            .with("name", "Kunal")
            .with("age", 21)
            .with("role", "Manager"),
        Row::new()
            .with("id", 2)
            .with("name", "Ankur")
            .with("age", 21)
            .with("role", "Designer"),
        Row::new()
            .with("id", 3)
            .with("name", "Subhanshu")
            .with("age", 21)
            .with("role", "Developer"),
        Row::new()
            .with("id", 3)
            .with("name", "Roushan")
            .with("age", 22)
            .with("role", "Developer"),
    ]
}

pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", "name").sortable(),
        Column::new("age", "Age", "age").sortable().width(8),
        Column::new("role", "Role", "role").sortable(),
    ]
}

/// Marks passwords shorter than six characters as invalid once typing starts.
pub fn validate_password(value: &str, props: &mut InputFieldProps) {
    let len = value.chars().count();
    props.invalid = len > 0 && len < 6;
}
