//! Serialize a [`Document`] into a `.docx` byte buffer with `docx-rs`.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Table, TableCell, TableRow,
    WidthType,
};
use mtd_core::Typography;

use crate::document::{Align, Block, Document, GridTable, HeaderTable};
use crate::error::RenderError;

/// Usable text width of an A4 page with default margins, in twentieths of a point.
const TEXT_WIDTH_DXA: usize = 9_350;
/// Left header column, 4.5 in.
const HEADER_LEFT_DXA: usize = 6_480;

/// Serialize `document` into `.docx` bytes.
///
/// # Errors
///
/// Returns [`RenderError::Pack`] if the zip archive cannot be written.
pub fn write_docx(document: &Document, typography: &Typography) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    build_docx(document, typography)
        .build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

pub(crate) fn build_docx(document: &Document, typography: &Typography) -> Docx {
    let fonts = RunFonts::new()
        .ascii(&typography.font)
        .hi_ansi(&typography.font)
        .east_asia(&typography.font)
        .cs(&typography.font);

    let mut docx = Docx::new()
        .default_fonts(fonts)
        .default_size(Typography::half_points(typography.body_pt));

    for block in document.blocks() {
        docx = match block {
            Block::Header(header) => docx.add_table(header_table(header)),
            Block::Table(table) => docx.add_table(grid_table(table, typography)),
            other => docx.add_paragraph(paragraph(other, typography)),
        };
    }
    docx
}

fn paragraph(block: &Block, typography: &Typography) -> Paragraph {
    match block {
        Block::Title { text } => Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(text)
                    .bold()
                    .size(Typography::half_points(typography.title_pt)),
            )
            .align(AlignmentType::Center),
        Block::Subtitle { text } => Paragraph::new()
            .add_run(Run::new().add_text(text).italic())
            .align(AlignmentType::Center),
        Block::Heading { level, text } => {
            let pt = if *level <= 2 {
                typography.heading_pt
            } else {
                typography.body_pt
            };
            Paragraph::new().add_run(
                Run::new()
                    .add_text(text)
                    .bold()
                    .size(Typography::half_points(pt)),
            )
        }
        Block::Paragraph { text, bold } => {
            let run = Run::new().add_text(text);
            Paragraph::new().add_run(if *bold { run.bold() } else { run })
        }
        Block::AnswerLine { text } | Block::Rule { text } => {
            Paragraph::new().add_run(Run::new().add_text(text))
        }
        Block::Signature { text, align } => Paragraph::new()
            .add_run(Run::new().add_text(text))
            .align(alignment(*align)),
        Block::Spacer | Block::Header(_) | Block::Table(_) => Paragraph::new(),
    }
}

fn header_table(header: &HeaderTable) -> Table {
    let right_width = TEXT_WIDTH_DXA - HEADER_LEFT_DXA;
    let rows = header
        .left
        .iter()
        .zip(&header.right)
        .map(|(left, right)| {
            TableRow::new(vec![
                TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_text(left)))
                    .width(HEADER_LEFT_DXA, WidthType::Dxa),
                TableCell::new()
                    .add_paragraph(
                        Paragraph::new()
                            .add_run(multiline_run(right))
                            .align(AlignmentType::Right),
                    )
                    .width(right_width, WidthType::Dxa),
            ])
        })
        .collect();

    Table::without_borders(rows).set_grid(vec![HEADER_LEFT_DXA, right_width])
}

fn grid_table(table: &GridTable, typography: &Typography) -> Table {
    let size = Typography::half_points(typography.table_pt);
    let column_width = TEXT_WIDTH_DXA / table.columns();

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .iter()
                .map(|cell| {
                    let run = Run::new().add_text(cell).size(size);
                    let run = if i == 0 { run.bold() } else { run };
                    TableCell::new()
                        .add_paragraph(Paragraph::new().add_run(run))
                        .width(column_width, WidthType::Dxa)
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    Table::new(rows).set_grid(vec![column_width; table.columns()])
}

/// One run with line breaks between `lines`.
fn multiline_run(lines: &[String]) -> Run {
    lines.iter().enumerate().fold(Run::new(), |run, (i, line)| {
        let run = if i > 0 {
            run.add_break(BreakType::TextWrapping)
        } else {
            run
        };
        run.add_text(line)
    })
}

const fn alignment(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        Align::Right => AlignmentType::Right,
    }
}
