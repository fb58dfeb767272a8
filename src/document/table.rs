//! Table views (w:tbl, w:tr, w:tc)

use crate::document::{Paragraph, StyleMap};
use crate::xml::RawXmlElement;

/// Table element (w:tbl)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
}

/// Table row (w:tr)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Row cells
    pub cells: Vec<TableCell>,
}

/// Table cell (w:tc)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub paragraphs: Vec<Paragraph>,
}

impl Table {
    /// Read a table from its `w:tbl` element
    pub fn from_element(element: &RawXmlElement, styles: &StyleMap) -> Self {
        let rows = element
            .elements_named("tr")
            .map(|tr| TableRow {
                cells: tr
                    .elements_named("tc")
                    .map(|tc| TableCell {
                        paragraphs: tc
                            .elements_named("p")
                            .map(|p| Paragraph::from_element(p, styles))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Table { rows }
    }

    /// Get row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get column count (widest row)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Get cell at (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    /// Get all text in the table (rows by newline, cells by tab)
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TableRow {
    /// Get row text, cells separated by tabs
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(TableCell::text)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl TableCell {
    /// Get cell text, paragraphs separated by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
