//! TUI bar chart using ratatui.

use chrono::{DateTime, Local, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use vizload_core::error::ChartError;
use vizload_core::types::{Dataset, Metric};

use crate::format::{chart_title, format_count};
use crate::ranking::{latest_update, rank_countries, CountryBar};

/// Dashboard state.
pub struct DashboardState {
    pub metric: Metric,
    pub top_n: usize,
    pub bars: Result<Vec<CountryBar>, ChartError>,
    pub source: String,
    pub updated: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Local>,
}

impl DashboardState {
    /// Build the state for a freshly loaded dataset.
    pub fn new(dataset: &Dataset, source: &str, metric: Metric, top_n: usize) -> Self {
        Self {
            metric,
            top_n,
            bars: rank_countries(dataset, metric, top_n),
            source: source.to_string(),
            updated: latest_update(dataset),
            fetched_at: Local::now(),
        }
    }

    /// Switch metric and re-rank.
    pub fn select(&mut self, metric: Metric, dataset: &Dataset) {
        self.metric = metric;
        self.bars = rank_countries(dataset, metric, self.top_n);
    }

    /// Apply a key press. Returns false when the dashboard should close.
    pub fn handle_key(&mut self, code: KeyCode, dataset: &Dataset) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Right | KeyCode::Tab => self.select(self.metric.next(), dataset),
            KeyCode::Left | KeyCode::BackTab => self.select(self.metric.prev(), dataset),
            KeyCode::Char(c) => {
                let picked = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Metric::from_index);
                if let Some(metric) = picked {
                    self.select(metric, dataset);
                }
            }
            _ => {}
        }
        true
    }
}

/// TUI Dashboard.
pub struct Dashboard {
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard until the user quits.
    pub fn run(&self, dataset: &Dataset, state: &mut DashboardState) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, dataset, state);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        dataset: &Dataset,
        state: &mut DashboardState,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f, state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !state.handle_key(key.code, dataset) {
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Metric selector
                Constraint::Min(10),   // Chart
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], state);
        self.render_selector(frame, chunks[1], state);
        self.render_chart(frame, chunks[2], state);
        self.render_footer(frame, chunks[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let count = state.bars.as_ref().map(Vec::len).unwrap_or(state.top_n);
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                chart_title(state.metric, count),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | Press 'q' to quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("Visualization"));
        frame.render_widget(header, area);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let titles: Vec<String> = Metric::all()
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{} {}", i + 1, m.label()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(state.metric.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title("Metric (←/→)"));
        frame.render_widget(tabs, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(state.metric.label());

        let bars = match &state.bars {
            Ok(bars) => bars,
            Err(err) => {
                let message = Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("Error updating visualization: {}", err),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from("Please check the log for more details."),
                ])
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(message, area);
                return;
            }
        };

        let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        let data: Vec<Bar> = bars
            .iter()
            .map(|b| {
                Bar::default()
                    .value(b.value.round() as u64)
                    .label(Line::from(b.location.clone()))
                    .text_value(format_count(b.value))
                    .style(Style::default().fg(shade(b.value, max)))
            })
            .collect();

        let slots = bars.len().max(1) as u16;
        let bar_width = (area.width.saturating_sub(2) / slots)
            .saturating_sub(1)
            .clamp(3, 16);

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&data))
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(chart, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let updated = state
            .updated
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let footer = Paragraph::new(Line::from(vec![
            Span::raw("Source: "),
            Span::styled(state.source.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw("  |  Data updated: "),
            Span::raw(updated),
            Span::raw("  |  Fetched: "),
            Span::raw(state.fetched_at.format("%H:%M:%S").to_string()),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(footer, area);
    }
}

/// Blue shade, darker for larger values.
fn shade(value: f64, max: f64) -> Color {
    let t = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
    Color::Rgb(lerp(198.0, 8.0), lerp(219.0, 48.0), lerp(239.0, 107.0))
}
