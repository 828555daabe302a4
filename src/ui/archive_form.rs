use crate::app::AppState;
use crate::domain::FIELD_LABELS;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the form collecting the week's outcome totals
pub fn render_archive_form(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let form = &app.archiver;
    let mut lines = vec![Line::raw("")];

    for (index, label) in FIELD_LABELS.iter().enumerate() {
        let editing = form.editing_field == index;
        lines.push(Line::raw(if editing {
            format!("{}: (editing)", label)
        } else {
            format!("{}:", label)
        }));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.field(index).to_string(), modal_title_style()),
            if editing {
                Span::styled("█", modal_title_style())
            } else {
                Span::raw("")
            },
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("This week is "),
        Span::styled(format!("{}%", app.percent()), modal_title_style()),
        Span::raw(" complete. Archiving clears all checkboxes."),
    ]));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to archive  ·  Esc to cancel"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Close Out Week ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
