//! Frame rendering: navbar, the routed screen, key hints, and the notice popup.

use albumterm::prefs::PreferenceStore;
use albumterm::remote::AlbumStore;
use albumterm::router::{EditView, Route, View, ViewBody};
use albumterm::Album;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Notice, NoticeKind};
use crate::form::{AlbumForm, FormField};
use crate::palette::Palette;

pub(crate) const EMPTY_LIST_TEXT: &str = "No albums found.";
pub(crate) const EMPTY_EDIT_TEXT: &str = "Loading album details or no album selected...";

pub(crate) fn draw<S: AlbumStore, P: PreferenceStore>(frame: &mut Frame<'_>, app: &App<S, P>) {
    let view = app.view();
    let palette = app.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_navbar(frame, chunks[0], &view, palette);
    match view.body {
        ViewBody::List(albums) => draw_list(frame, chunks[1], albums, app.cursor(), palette),
        ViewBody::AddAlbum => {
            draw_form(frame, chunks[1], " Add New Album ", app.add_form(), None, palette);
        }
        ViewBody::UpdateAlbum(EditView::Ready(album)) => {
            let title = format!(" Update Album (ID: {}) ", album.id);
            draw_form(frame, chunks[1], &title, app.edit_form(), Some(album), palette);
        }
        ViewBody::UpdateAlbum(EditView::Empty) => {
            let body = Paragraph::new(EMPTY_EDIT_TEXT)
                .block(panel(" Update Album ", palette))
                .style(Style::default().fg(palette.muted));
            frame.render_widget(body, chunks[1]);
        }
    }
    draw_key_hints(frame, chunks[2], view.route, palette);

    if let Some(notice) = app.notice() {
        draw_notice(frame, area, notice, palette);
    }
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
}

fn draw_navbar(frame: &mut Frame<'_>, area: Rect, view: &View<'_>, palette: &Palette) {
    let bold = Modifier::BOLD;
    let line = Line::from(vec![
        Span::styled("ALBUMS", Style::default().fg(palette.brand).add_modifier(bold)),
        Span::styled("LIST", Style::default().fg(palette.brand_alt).add_modifier(bold)),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", view.nav.label),
            Style::default().fg(palette.text),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} (Ctrl-T: {})", view.hint.toggle_label, view.hint.toggle_title),
            Style::default().fg(palette.muted),
        ),
    ]);
    let navbar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(navbar, area);
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, albums: &[Album], cursor: usize, palette: &Palette) {
    let block = panel(" Albums ", palette);
    if albums.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST_TEXT)
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(empty, area);
        return;
    }

    let title_width = usize::from(area.width).saturating_sub(24);
    let items: Vec<ListItem> = albums
        .iter()
        .map(|album| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<5}", album.id), Style::default().fg(palette.muted)),
                Span::raw(truncate_to_width(&album.title, title_width)),
                Span::styled(
                    format!("  (user {})", album.user_id),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(palette.highlight_bg)
            .fg(palette.highlight_fg),
    );
    let mut state = ListState::default().with_selected(Some(cursor.min(albums.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_form(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form: &AlbumForm,
    current: Option<&Album>,
    palette: &Palette,
) {
    let (title_label, user_label) = match current {
        Some(album) => (
            format!("Current Title: {}", album.title),
            format!("Current User Id: {}", album.user_id),
        ),
        None => (
            "Enter Album Title:".to_string(),
            "Enter User Id:".to_string(),
        ),
    };
    let action = if current.is_some() {
        "Save Changes"
    } else {
        "Add Album"
    };

    let field = |label: String, which: FormField| -> Vec<Line<'static>> {
        let focused = form.focus() == which;
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
        } else {
            Style::default().fg(palette.text)
        };
        vec![
            Line::from(Span::styled(label, Style::default().fg(palette.muted))),
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} ", form.value(which)), value_style),
            ]),
            Line::default(),
        ]
    };

    let mut lines = field(user_label, FormField::UserId);
    lines.extend(field(title_label, FormField::Title));
    lines.push(Line::from(Span::styled(
        format!("[Enter] {action}"),
        Style::default()
            .fg(palette.brand)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(panel(title, palette)), area);
}

fn draw_key_hints(frame: &mut Frame<'_>, area: Rect, route: Route, palette: &Palette) {
    let hints = match route {
        Route::List => "j/k move  u edit  d delete  a add  q quit",
        Route::AddAlbum | Route::UpdateAlbum => "Tab switch field  Enter submit  Esc home",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(palette.muted)),
        area,
    );
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, notice: &Notice, palette: &Palette) {
    let width = area.width.saturating_sub(4).min(60);
    let popup = centered(area, width, 5);
    let (title, color) = match notice.kind {
        NoticeKind::Info => (" Notice ", palette.brand),
        NoticeKind::Error => (" Error ", palette.danger),
    };
    let inner_width = usize::from(width.saturating_sub(2));
    let body = Paragraph::new(vec![
        Line::from(truncate_to_width(&notice.message, inner_width)),
        Line::default(),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(palette.muted),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
    )
    .style(Style::default().bg(palette.background).fg(palette.text));

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `text` to at most `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with, seed, EchoStore};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Runtime;

    fn draw_into_test_backend<S: AlbumStore, P: PreferenceStore>(
        app: &App<S, P>,
        width: u16,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn list_screen_shows_brand_nav_and_titles() {
        let runtime = Runtime::new().expect("runtime");
        let app = app_with(
            &runtime,
            EchoStore {
                seed: seed(),
                ..EchoStore::default()
            },
        );
        let symbols = draw_into_test_backend(&app, 100, 20);
        assert!(symbols.contains("ALBUMSLIST"));
        assert!(symbols.contains("[Add Album]"));
        assert!(symbols.contains("Switch to Dark Mode"));
        assert!(symbols.contains("sunt qui excepturi"));
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let runtime = Runtime::new().expect("runtime");
        let app = app_with(&runtime, EchoStore::default());
        let symbols = draw_into_test_backend(&app, 80, 12);
        assert!(symbols.contains(EMPTY_LIST_TEXT));
    }

    #[test]
    fn edit_screen_shows_current_values_and_home_link() {
        let runtime = Runtime::new().expect("runtime");
        let mut app = app_with(
            &runtime,
            EchoStore {
                seed: seed(),
                ..EchoStore::default()
            },
        );
        app.handle_key(key(KeyCode::Enter));
        let symbols = draw_into_test_backend(&app, 100, 20);
        assert!(symbols.contains("Update Album (ID: 1)"));
        assert!(symbols.contains("Current User Id: 1"));
        assert!(symbols.contains("[Home]"));
    }

    #[test]
    fn notice_popup_overlays_screen() {
        let runtime = Runtime::new().expect("runtime");
        let mut app = app_with(&runtime, EchoStore::default());
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter));
        let symbols = draw_into_test_backend(&app, 80, 20);
        assert!(symbols.contains("Please fill in both User ID and Title."));
        assert!(symbols.contains("Press any key to continue"));
    }

    #[test]
    fn truncate_to_width_marks_cut_only_when_needed() {
        assert_eq!(truncate_to_width("abcdef", 6), "abcdef");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
