use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::config::Config;
use crate::logging;
use crate::pager::Pager;
use crate::session::Session;
use crate::settings::{
    LINES_PER_PAGE_STEP, MAX_LINES_PER_PAGE, MIN_LINES_PER_PAGE, THEME_PRESET_LIST, Theme,
};
use crate::ui::windows::{
    bookmarks::BookmarksWindow, help::HelpWindow, settings::SettingsWindow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    #[default]
    Reader,
    GotoPage,
    Bookmarks,
    Settings,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

/// UI-specific state: active window, transient message, goto buffer.
pub struct UiState {
    pub active_window: WindowType,
    pub goto_input: String,
    pub settings_selected_index: usize,
    pub message: Option<String>,
    pub message_type: MessageType,
    pub message_time: Option<Instant>,
    pub should_quit: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_window: WindowType::Reader,
            goto_input: String::new(),
            settings_selected_index: 0,
            message: None,
            message_type: MessageType::Info,
            message_time: None,
            should_quit: false,
        }
    }

    pub fn set_message(&mut self, message: String, message_type: MessageType) {
        self.message = Some(message);
        self.message_type = message_type;
        self.message_time = Some(Instant::now());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.message_time = None;
    }

    /// Returns true if the current message has expired (older than 3 seconds).
    pub fn message_expired(&self) -> bool {
        self.message_time
            .is_some_and(|t| t.elapsed() >= Duration::from_secs(3))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The interactive reader: owns the terminal, the open session, and the
/// popup windows. Every session operation runs synchronously on this
/// thread; scans block until done.
pub struct Reader {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    session: Session,
    ui: UiState,
    bookmarks_window: BookmarksWindow,
}

impl Reader {
    pub fn new(config: Config, filepath: &Path) -> eyre::Result<Self> {
        let pager = Pager::new(config.settings.decode_policy);
        let session = Session::open(filepath, pager, config.settings.lines_per_page)?;
        logging::info(format!(
            "opened {} ({:.2} MB, {} pages)",
            session.document().display_name(),
            session.document().size_mb(),
            session.total_pages()
        ));

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            config,
            session,
            ui: UiState::new(),
            bookmarks_window: BookmarksWindow::new(),
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> eyre::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        loop {
            if self.ui.should_quit {
                break;
            }

            // Auto-clear expired messages before rendering
            if self.ui.message_expired() {
                self.ui.clear_message();
            }

            {
                let Self {
                    terminal,
                    config,
                    session,
                    ui,
                    bookmarks_window,
                } = self;
                terminal.draw(|frame| render(frame, config, session, ui, bookmarks_window))?;
            }

            // Poll with a timeout so the render loop wakes when a message
            // expires.
            let poll_timeout = match self.ui.message_time {
                Some(t) => {
                    let elapsed = t.elapsed();
                    let expiry = Duration::from_secs(3);
                    if elapsed < expiry {
                        expiry - elapsed
                    } else {
                        Duration::from_millis(100)
                    }
                }
                None => Duration::from_secs(60),
            };

            if !crossterm::event::poll(poll_timeout)? {
                continue;
            }

            if let Ok(event) = crossterm::event::read() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    // Paragraph wrapping adapts on the next draw.
                    _ => {}
                }
            }
        }

        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
        crossterm::terminal::disable_raw_mode()?;

        Ok(())
    }

    /// Handle keyboard input events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.ui.message.is_some() && self.ui.active_window == WindowType::Reader {
            self.ui.clear_message();
        }

        match self.ui.active_window {
            WindowType::GotoPage => self.handle_goto_keys(key),
            WindowType::Bookmarks => self.handle_bookmarks_keys(key),
            WindowType::Settings => self.handle_settings_keys(key),
            WindowType::Help => self.handle_help_keys(key),
            WindowType::Reader => self.handle_reader_keys(key),
        }
    }

    /// Handle keys in normal reading mode
    fn handle_reader_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.ui.should_quit = true,
            KeyCode::Char('l' | 'n' | ' ') | KeyCode::Right | KeyCode::PageDown => {
                self.navigate(Session::next_page);
            }
            KeyCode::Char('h' | 'p') | KeyCode::Left | KeyCode::PageUp => {
                self.navigate(Session::prev_page);
            }
            KeyCode::Home => self.navigate(|session| session.go_to_page(0)),
            KeyCode::End | KeyCode::Char('G') => {
                self.navigate(|session| {
                    let last = session.total_pages() - 1;
                    session.go_to_page(last)
                });
            }
            KeyCode::Char('g') => {
                self.ui.goto_input.clear();
                self.ui.active_window = WindowType::GotoPage;
            }
            KeyCode::Char('b') => {
                let label = self.session.add_bookmark();
                self.ui.set_message(format!("Added {label}"), MessageType::Info);
            }
            KeyCode::Char('m') => {
                self.bookmarks_window.open();
                self.ui.active_window = WindowType::Bookmarks;
            }
            KeyCode::Char('s') => {
                self.ui.settings_selected_index = THEME_PRESET_LIST
                    .iter()
                    .position(|theme| *theme == self.config.settings.theme)
                    .unwrap_or(0);
                self.ui.active_window = WindowType::Settings;
            }
            KeyCode::Char('?') => self.ui.active_window = WindowType::Help,
            KeyCode::Char('+' | '=') => self.adjust_page_size(LINES_PER_PAGE_STEP as isize),
            KeyCode::Char('-') => self.adjust_page_size(-(LINES_PER_PAGE_STEP as isize)),
            _ => {}
        }
    }

    fn handle_goto_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.ui.goto_input.clear();
                self.ui.active_window = WindowType::Reader;
            }
            KeyCode::Backspace => {
                self.ui.goto_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.ui.goto_input.len() < 9 {
                    self.ui.goto_input.push(c);
                }
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.ui.goto_input);
                self.ui.active_window = WindowType::Reader;
                match input.parse::<i64>() {
                    Ok(number) => self.navigate(|session| session.go_to_page_number(number)),
                    Err(_) => self.ui.set_message(
                        "Enter a valid page number".to_string(),
                        MessageType::Warning,
                    ),
                }
            }
            _ => {}
        }
    }

    fn handle_bookmarks_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'm') => {
                self.bookmarks_window.close();
                self.ui.active_window = WindowType::Reader;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.bookmarks_window.next_entry(self.session.bookmarks().len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.bookmarks_window.previous_entry(),
            KeyCode::Enter => {
                let selected = self
                    .session
                    .bookmarks()
                    .get(self.bookmarks_window.selected_index)
                    .map(|bookmark| bookmark.label.clone());
                if let Some(label) = selected {
                    self.bookmarks_window.close();
                    self.ui.active_window = WindowType::Reader;
                    match self.session.go_to_bookmark(&label) {
                        Ok(_) => self.ui.set_message(label, MessageType::Info),
                        Err(err) => self
                            .ui
                            .set_message(format!("Could not read page: {err}"), MessageType::Error),
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_settings_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 's') => {
                self.ui.active_window = WindowType::Reader;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.ui.settings_selected_index =
                    (self.ui.settings_selected_index + 1).min(THEME_PRESET_LIST.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.ui.settings_selected_index = self.ui.settings_selected_index.saturating_sub(1);
            }
            KeyCode::Enter => {
                let theme = THEME_PRESET_LIST[self.ui.settings_selected_index];
                self.config.settings.theme = theme;
                if let Err(err) = self.config.save() {
                    logging::warn(format!("could not save configuration: {err}"));
                }
                self.ui
                    .set_message(format!("{} theme", theme.label()), MessageType::Info);
                self.ui.active_window = WindowType::Reader;
            }
            _ => {}
        }
    }

    fn handle_help_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => {
                self.ui.active_window = WindowType::Reader;
            }
            _ => {}
        }
    }

    /// Run a navigation operation and surface any failure in the status
    /// bar. The session guarantees its state is untouched on error.
    fn navigate(&mut self, op: impl FnOnce(&mut Session) -> eyre::Result<u64>) {
        if let Err(err) = op(&mut self.session) {
            self.ui
                .set_message(format!("Could not read page: {err}"), MessageType::Error);
        }
    }

    fn adjust_page_size(&mut self, delta: isize) {
        let target = self.session.page_size() as isize + delta;
        if target < MIN_LINES_PER_PAGE as isize || target > MAX_LINES_PER_PAGE as isize {
            self.ui.set_message(
                format!(
                    "Lines per page stays between {MIN_LINES_PER_PAGE} and {MAX_LINES_PER_PAGE}"
                ),
                MessageType::Warning,
            );
            return;
        }
        match self.session.set_page_size(target as usize) {
            Ok(()) => {
                self.config.settings.lines_per_page = target as usize;
                if let Err(err) = self.config.save() {
                    logging::warn(format!("could not save configuration: {err}"));
                }
                self.ui
                    .set_message(format!("{target} lines per page"), MessageType::Info);
            }
            Err(err) => self
                .ui
                .set_message(format!("Could not repaginate: {err}"), MessageType::Error),
        }
    }
}

fn theme_colors(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Light => (Color::Black, Color::White),
        Theme::Dark => (Color::Rgb(224, 224, 224), Color::Rgb(45, 45, 45)),
        Theme::Sepia => (Color::Black, Color::Rgb(199, 237, 204)),
    }
}

fn render(
    frame: &mut Frame,
    config: &Config,
    session: &Session,
    ui: &UiState,
    bookmarks_window: &BookmarksWindow,
) {
    let (fg, bg) = theme_colors(config.settings.theme);
    let base_style = Style::default().fg(fg).bg(bg);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

    let start_line = session.page_start_line();
    let lines: Vec<Line> = session
        .page_lines()
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let text = raw.trim_end_matches(['\n', '\r']).to_string();
            if session.line_bookmarked(start_line + i as u64) {
                Line::styled(
                    text,
                    Style::default().fg(Color::Black).bg(Color::Rgb(255, 255, 153)),
                )
            } else {
                Line::from(text)
            }
        })
        .collect();

    let mut title = format!(" {} ", session.document().display_name());
    if session.current_page_bookmarked() {
        title.push_str("[bookmarked] ");
    }

    let paragraph = Paragraph::new(lines)
        .style(base_style)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    render_status_bar(frame, chunks[1], config, session, ui, base_style);

    match ui.active_window {
        WindowType::Bookmarks => {
            bookmarks_window.render(frame, chunks[0], session.bookmarks(), session.current_page());
        }
        WindowType::Settings => {
            let entries = settings_entries(config, session);
            SettingsWindow::render(frame, chunks[0], &entries, ui.settings_selected_index);
        }
        WindowType::Help => HelpWindow::render(frame, chunks[0]),
        _ => {}
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    config: &Config,
    session: &Session,
    ui: &UiState,
    base_style: Style,
) {
    if ui.active_window == WindowType::GotoPage {
        let prompt = format!(
            " Go to page: {}_  (Enter confirm, Esc cancel)",
            ui.goto_input
        );
        frame.render_widget(Paragraph::new(prompt).style(base_style), area);
        return;
    }

    if let Some(message) = &ui.message {
        let color = match ui.message_type {
            MessageType::Info => Color::Blue,
            MessageType::Warning => Color::Yellow,
            MessageType::Error => Color::Red,
        };
        let paragraph = Paragraph::new(format!(" {message}")).style(Style::default().fg(color));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut status = format!(
        " Page {}/{} | {} ({:.2} MB) | {} lines/page",
        session.current_page() + 1,
        session.total_pages(),
        session.document().display_name(),
        session.document().size_mb(),
        session.page_size()
    );
    if config.settings.show_progress_indicator {
        status.push_str(&format!(" | {:.0}%", session.progress() * 100.0));
    }
    frame.render_widget(Paragraph::new(status).style(base_style), area);
}

fn settings_entries(config: &Config, session: &Session) -> Vec<String> {
    THEME_PRESET_LIST
        .iter()
        .map(|theme| {
            let marker = if *theme == config.settings.theme {
                "(x)"
            } else {
                "( )"
            };
            format!("{} {} theme", marker, theme.label())
        })
        .chain([
            String::new(),
            format!("    {} lines per page (+/- in reader)", session.page_size()),
        ])
        .collect()
}
