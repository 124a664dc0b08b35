//! Main TUI application

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};

use crate::app::events::{is_force_quit, tab_number, AppEvent, EventHandler};
use crate::app::state::{AppState, Notice};
use crate::ui::layout::{AppLayout, DialogLayout};
use crate::ui::tabs::{BookingsTab, EmployeesTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::statusbar::{build_status_line, StatusItem};

/// Tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Employees = 0,
    Bookings = 1,
}

impl TabId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Employees => "Employees",
            Self::Bookings => "Bookings",
        }
    }

    pub fn all() -> &'static [TabId] {
        &[Self::Employees, Self::Bookings]
    }
}

/// Main TUI application
pub struct TuiApp {
    state: Arc<AppState>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,

    // UI state
    current_tab: usize,
    theme: Theme,
    show_help: bool,
    notice: Option<Notice>,

    // Tabs
    employees_tab: EmployeesTab,
    bookings_tab: BookingsTab,
}

impl TuiApp {
    pub fn new(state: Arc<AppState>) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let theme = Theme::from_name(&state.settings.theme);
        let employees_tab = EmployeesTab::new(&state);
        let bookings_tab = BookingsTab::new(&state);

        Ok(Self {
            state,
            terminal,
            event_handler: EventHandler::new(Duration::from_millis(100)),

            current_tab: 0,
            theme,
            show_help: false,
            notice: None,

            employees_tab,
            bookings_tab,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.employees_tab.request_page();
        self.bookings_tab.request_page();

        loop {
            // Apply finished store calls
            self.employees_tab.poll();
            self.bookings_tab.poll();
            self.collect_notices();

            self.draw()?;

            if let Some(event) = self.event_handler.next() {
                match event {
                    AppEvent::Key(key) => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    AppEvent::Resize(width, height) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    AppEvent::Tick => {}
                }
            }

            tokio::task::yield_now().await;
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    /// Returns false when the app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_force_quit(&key) {
            return false;
        }
        if self.show_help {
            self.show_help = false;
            return true;
        }

        let keys = &self.state.keys;
        let has_dialog = match TabId::all()[self.current_tab] {
            TabId::Employees => self.employees_tab.showing_dialog(),
            TabId::Bookings => self.bookings_tab.showing_dialog(),
        };

        // Global keys only apply when no dialog or filter has focus
        if !has_dialog {
            if keys.quit.matches_event(&key) {
                return false;
            }

            if keys.help.matches_event(&key) || key.code == KeyCode::F(1) {
                self.show_help = true;
                return true;
            }

            if let Some(tab) = tab_number(&key, TabId::all().len()) {
                self.current_tab = tab;
                return true;
            }

            let len = TabId::all().len();
            if keys.next_tab.matches_event(&key) {
                self.current_tab = (self.current_tab + 1) % len;
                return true;
            }
            if keys.prev_tab.matches_event(&key) {
                self.current_tab = (self.current_tab + len - 1) % len;
                return true;
            }
        }

        match TabId::all()[self.current_tab] {
            TabId::Employees => self.employees_tab.handle_key(key),
            TabId::Bookings => self.bookings_tab.handle_key(key),
        }
        self.collect_notices();
        true
    }

    fn collect_notices(&mut self) {
        for notice in [self.employees_tab.take_notice(), self.bookings_tab.take_notice()]
            .into_iter()
            .flatten()
        {
            self.notice = Some(notice);
        }
    }

    fn draw(&mut self) -> Result<()> {
        let theme = &self.theme;
        let current_tab = self.current_tab;
        let show_help = self.show_help;
        let employees_tab = &mut self.employees_tab;
        let bookings_tab = &mut self.bookings_tab;

        let mut items = vec![
            StatusItem::new("Employees", &employees_tab.total().to_string()).with_style(theme.accent()),
            StatusItem::new("Bookings", &bookings_tab.total().to_string()).with_style(theme.accent()),
        ];
        if let Some(notice) = &self.notice {
            items.push(StatusItem::notice(notice, theme));
        }
        items.push(StatusItem::new("", "?=help q=quit").with_style(theme.dim()));
        let status_line = build_status_line(items, "│");

        self.terminal.draw(|frame| {
            let layout = AppLayout::new(frame.area());

            // Tab bar
            let tab_titles: Vec<Line> = TabId::all()
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    let style = if i == current_tab {
                        theme.tab_active()
                    } else {
                        theme.tab_inactive()
                    };
                    Line::from(Span::styled(format!(" {} {} ", i + 1, tab.title()), style))
                })
                .collect();

            let tabs = Tabs::new(tab_titles)
                .select(current_tab)
                .highlight_style(theme.tab_active())
                .divider("|");

            frame.render_widget(tabs, layout.tabs);

            // Content
            let content_block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(format!(" {} ", TabId::all()[current_tab].title()));

            let inner = content_block.inner(layout.content);
            frame.render_widget(content_block, layout.content);

            match TabId::all()[current_tab] {
                TabId::Employees => employees_tab.render(frame, inner, theme),
                TabId::Bookings => bookings_tab.render(frame, inner, theme),
            }

            frame.render_widget(Paragraph::new(status_line), layout.status);

            match TabId::all()[current_tab] {
                TabId::Employees => employees_tab.render_overlays(frame, theme),
                TabId::Bookings => bookings_tab.render_overlays(frame, theme),
            }

            // Help overlay
            if show_help {
                render_help(frame, theme);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let help_area = DialogLayout::centered(area, 60, 26).dialog;

    let help_text = [
        "",
        "  Payroll Admin - Keyboard Shortcuts",
        "  ──────────────────────────────────",
        "",
        "  Navigation:",
        "    1-2, Tab      Switch tabs",
        "    ↑/↓, j/k      Move cursor",
        "    PgUp/PgDn     Previous/next page",
        "    + / -         More/fewer rows per page",
        "    [ / ]         Focus column",
        "    s             Sort by focused column",
        "",
        "  Actions:",
        "    Space         Select row",
        "    a             Select all on page",
        "    n             New record",
        "    e, Enter      Edit record",
        "    d, Delete     Delete selected",
        "    /             Filter",
        "    Esc           Clear filter/cancel",
        "    r             Refresh",
        "",
        "  Press any key to close",
    ];

    let help_block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.normal());

    let help_content = Paragraph::new(help_text.join("\n"))
        .block(help_block)
        .style(theme.normal());

    frame.render_widget(Clear, help_area);
    frame.render_widget(help_content, help_area);
}
