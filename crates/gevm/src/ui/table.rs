use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Panel, Style},
};

/// Shared look of every table gevm prints.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    pub header: Option<String>,
}

impl Formatter {
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn build<T: Tabled, I: IntoIterator<Item = T>>(self, data: I) -> Table { self.finish(Table::new(data)) }

    /// For tables whose columns are only known at runtime.
    pub fn build_records(self, header: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        let mut builder = Builder::default();
        builder.push_record(header);
        for row in rows {
            builder.push_record(row);
        }
        self.finish(builder.build())
    }

    fn finish(self, mut table: Table) -> Table {
        if let Some(header) = self.header {
            table.with(Panel::header(header));
        }

        table.with(Style::rounded());
        table
    }
}

pub fn mark(present: bool) -> &'static str { if present { "✓" } else { "✗" } }
