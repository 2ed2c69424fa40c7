//! Plain-text rendering of a `RosterView`.

use rollcall_core::{ColumnView, RosterView, RowView};
use std::fmt::Write;

/// Renders the form line followed by the three columns.
pub fn render_view(view: &RosterView) -> String {
    let mut out = String::new();
    let input = if view.form.input.is_empty() {
        view.form.placeholder
    } else {
        view.form.input.as_str()
    };
    let _ = writeln!(out, "[ {input} ] <{}>", view.form.submit_label);

    for column in view.columns() {
        out.push('\n');
        render_column(&mut out, column);
    }
    out
}

fn render_column(out: &mut String, column: &ColumnView) {
    let _ = writeln!(out, "{} ({})", column.kind.title(), column.rows.len());
    if column.rows.is_empty() {
        out.push_str("  -\n");
        return;
    }
    let width = column
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in &column.rows {
        render_row(out, row, width);
    }
}

fn render_row(out: &mut String, row: &RowView, width: usize) {
    let actions = row
        .actions
        .iter()
        .map(|action| format!("[{}]", action.label))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "  #{:<14} {:<width$}  {actions}", row.id, row.name);
}

#[cfg(test)]
mod tests {
    use super::render_view;
    use rollcall_core::{EditMode, Presence, Roster, RosterEntry, RosterView};

    #[test]
    fn renders_columns_and_directional_labels() {
        let roster = Roster::from_entries(vec![
            RosterEntry::new(1, "Alice").with_presence(Presence::Present),
            RosterEntry::new(2, "Bob"),
        ])
        .unwrap();

        let text = render_view(&RosterView::project(&roster, EditMode::Idle, ""));

        assert!(text.starts_with("[ Enter student name ] <Add Student>"));
        assert!(text.contains("All Students (2)"));
        assert!(text.contains("[Edit] [Delete] [Mark Absent]"));
        assert!(text.contains("[Edit] [Delete] [Mark Present]"));
        assert!(text.contains("Present Students (1)"));
        assert!(text.contains("[Move to Absent]"));
        assert!(text.contains("Absent Students (0)\n  -\n"));
    }

    #[test]
    fn editing_shows_input_and_update_label() {
        let roster = Roster::from_entries(vec![RosterEntry::new(5, "Bob")]).unwrap();
        let text = render_view(&RosterView::project(&roster, EditMode::Editing(5), "Bob"));
        assert!(text.starts_with("[ Bob ] <Update Student>"));
    }
}
