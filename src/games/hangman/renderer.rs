//! Hangman renderer: a pure projection of the controller's state

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::games::hangman::controller::{HangmanGame, KEYS_PER_ROW};
use crate::games::hangman::game::{BodyPart, KeyMark, KeyView, MaskCell, Session, Status, CAPACITY};

const GALLOWS: [&str; 7] = [
    "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
];

/// ASCII gallows with the given parts drawn in
pub fn gallows_lines(parts: &[BodyPart]) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = GALLOWS.iter().map(|row| row.chars().collect()).collect();
    for part in parts {
        let (row, col, glyph) = match part {
            BodyPart::Head => (2, 2, 'O'),
            BodyPart::Body => (3, 2, '|'),
            BodyPart::LeftArm => (3, 1, '/'),
            BodyPart::RightArm => (3, 3, '\\'),
            BodyPart::LeftLeg => (4, 1, '/'),
            BodyPart::RightLeg => (4, 3, '\\'),
        };
        rows[row][col] = glyph;
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

pub fn render(frame: &mut Frame, game: &HangmanGame) {
    let session = game.session();
    let in_round = !matches!(session.status(), Status::Loading | Status::Idle);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(9),
            Constraint::Length(if in_round { 4 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], game);

    if let Some(error) = session.last_error() {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    match session.status() {
        Status::Loading => frame.render_widget(
            Paragraph::new("Loading movie...").alignment(Alignment::Center),
            chunks[2],
        ),
        Status::Idle => frame.render_widget(
            Paragraph::new("[Enter] Try Again").alignment(Alignment::Center),
            chunks[2],
        ),
        _ => {
            render_board(frame, chunks[2], session);
            render_keyboard(frame, chunks[3], session, game.cursor());
        }
    }

    frame.render_widget(
        Paragraph::new("[A-Z] Guess  [←→↑↓/Space] Keyboard  [Tab] Difficulty  [Shift+Tab] Language  [F5] New Game  [Esc] Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_header(frame: &mut Frame, area: Rect, game: &HangmanGame) {
    let settings = game.settings();
    let line = Line::from(vec![
        Span::raw("Difficulty: "),
        Span::styled(settings.difficulty.label(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("    Language: "),
        Span::styled(settings.language.label(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .block(Block::default().title(" 🎬 MOVIE HANGMAN ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_board(frame: &mut Frame, area: Rect, session: &Session) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(area);

    let gallows: Vec<Line> = gallows_lines(session.visible_parts())
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(Color::Red)))
        .collect();
    frame.render_widget(Paragraph::new(gallows), columns[0]);

    let mut lines = vec![word_line(session), Line::raw("")];
    lines.push(Line::raw(format!("Wrong guesses: {} / {}", session.wrong_guesses(), CAPACITY)));
    lines.push(Line::raw(""));

    match session.status() {
        Status::Won => lines.push(Line::styled(
            "🎉 Congratulations! You Won!  [Enter] Play Again",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Status::Lost => lines.push(Line::styled(
            format!("😢 Game Over! The word was: {}  [Enter] Try Again", session.secret_word()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        _ => {}
    }

    if session.overview_visible() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Movie Overview:", Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::raw(session.overview()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), columns[1]);
}

fn word_line(session: &Session) -> Line<'static> {
    let spans: Vec<Span> = session
        .mask()
        .into_iter()
        .map(|cell| match cell {
            MaskCell::Revealed(c) => Span::styled(format!("{c} "), Style::default().add_modifier(Modifier::BOLD)),
            MaskCell::Hidden => Span::styled("_ ", Style::default().fg(Color::Gray)),
            MaskCell::Space => Span::raw("  "),
        })
        .collect();
    Line::from(spans)
}

fn key_style(key: &KeyView, highlighted: bool) -> Style {
    let style = match key.mark {
        KeyMark::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        KeyMark::Wrong => Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT),
        KeyMark::Unused if !key.enabled => Style::default().fg(Color::DarkGray),
        KeyMark::Unused => Style::default().fg(Color::White),
    };
    if highlighted {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_keyboard(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let keys = session.keyboard();
    let rows: Vec<Line> = keys
        .chunks(KEYS_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, key)| {
                    let highlighted = row * KEYS_PER_ROW + col == cursor;
                    Span::styled(format!(" {} ", key.letter), key_style(key, highlighted))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(rows)
            .block(Block::default().borders(Borders::TOP))
            .alignment(Alignment::Center),
        area,
    );
}
