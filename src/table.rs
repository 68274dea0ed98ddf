// Tabular output.
// Cells are plain strings; layout is handed to `tabled` at print time.

use std::io::{self, Write};

use tabled::{builder::Builder, settings::Style};

/// Tabular output handed to `Ui::print_table`.
///
/// Layout is delegated to `tabled`; this type only carries the cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub notes: Vec<String>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Writes title, grid and notes to `w`.
    pub fn print(&self, w: &mut dyn Write) -> io::Result<()> {
        if let Some(title) = &self.title {
            writeln!(w, "{title}")?;
            writeln!(w)?;
        }

        if !self.is_empty() {
            let mut builder = Builder::default();
            if !self.header.is_empty() {
                builder.push_record(self.header.iter().cloned());
            }
            for row in &self.rows {
                builder.push_record(row.iter().cloned());
            }

            let mut grid = builder.build();
            grid.with(Style::modern());
            writeln!(w, "{grid}")?;
        }

        for note in &self.notes {
            writeln!(w, "{note}")?;
        }

        Ok(())
    }
}
