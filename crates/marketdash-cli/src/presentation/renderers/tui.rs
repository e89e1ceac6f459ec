//! Interactive dashboard
//!
//! The renderer owns the shell state (current route) and the page components.
//! Components own their own UI state and report changes upward; the renderer
//! re-presents the affected view model.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use marketdash_engine::ForecastTab;
use marketdash_types::Route;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::{
    navigation::navigation, present_data, present_forecasting, present_overview, present_reports,
};
use crate::presentation::view_models::{
    DataViewModel, ForecastingViewModel, NavigationViewModel, OverviewViewModel, ReportsViewModel,
};
use crate::presentation::views::tui::{
    DataAction, DataComponent, ForecastingComponent, NavBarView, OverviewComponent,
    ReportsComponent, StatusLineView,
};

/// Startup settings for the dashboard
#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub route: Route,
    pub tab: ForecastTab,
    pub apply_search_filter: bool,
    pub tick_rate: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            route: Route::Overview,
            tab: ForecastTab::Models,
            apply_search_filter: true,
            tick_rate: Duration::from_millis(250),
        }
    }
}

pub struct TuiRenderer {
    route: Route,
    apply_search_filter: bool,
    tick_rate: Duration,
    should_quit: bool,

    nav: NavigationViewModel,
    overview: OverviewViewModel,
    data: DataViewModel,
    forecasting: ForecastingViewModel,
    reports: ReportsViewModel,

    overview_page: OverviewComponent,
    data_page: DataComponent,
    forecasting_page: ForecastingComponent,
    reports_page: ReportsComponent,
}

impl TuiRenderer {
    pub fn new(options: TuiOptions) -> Self {
        Self {
            route: options.route,
            apply_search_filter: options.apply_search_filter,
            tick_rate: options.tick_rate,
            should_quit: false,
            nav: navigation(options.route.href()),
            overview: present_overview().content,
            data: present_data("", options.apply_search_filter).content,
            forecasting: present_forecasting(options.tab).content,
            reports: present_reports().content,
            overview_page: OverviewComponent::new(),
            data_page: DataComponent::new(),
            forecasting_page: ForecastingComponent::new(options.tab),
            reports_page: ReportsComponent::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn data(&self) -> &DataViewModel {
        &self.data
    }

    pub fn forecasting(&self) -> &ForecastingViewModel {
        &self.forecasting
    }

    /// Set up the terminal, run until quit, and restore the terminal even
    /// when the loop fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e.into());
            }
        };

        tracing::info!(route = %self.route, "dashboard started");
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(e) = &result {
            tracing::error!(error = %e, "dashboard stopped on error");
        } else {
            tracing::info!("dashboard closed");
        }
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.route == Route::Data && self.data_page.is_editing() {
            self.dispatch_data(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.navigate(Route::ALL[idx]);
            }
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::BackTab => self.navigate(self.route.previous()),
            _ => match self.route {
                Route::Data => self.dispatch_data(key),
                Route::Forecasting => {
                    if self.forecasting_page.handle_input(key) {
                        let tab = self.forecasting_page.active_tab();
                        tracing::debug!(tab = tab.name(), "forecasting tab changed");
                        self.forecasting.active_tab = tab;
                    }
                }
                Route::Overview | Route::Reports => {}
            },
        }
    }

    fn dispatch_data(&mut self, key: KeyEvent) {
        if let Some(DataAction::SearchChanged(query)) = self.data_page.handle_input(key) {
            self.data = present_data(&query, self.apply_search_filter).content;
            tracing::debug!(
                query = %query,
                shown = self.data.search.shown,
                applied = self.data.search.applied,
                "search updated"
            );
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.nav = navigation(route.href());
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("1-4", "page"), ("Tab", "next page")];
        match self.route {
            Route::Data if self.data_page.is_editing() => {
                return vec![("type", "search"), ("Enter/Esc", "done")];
            }
            Route::Data => hints.push(("/", "search")),
            Route::Forecasting => {
                hints.push(("←/→", "tab"));
                hints.push(("m/f/d", "models/features/diagnostics"));
            }
            Route::Overview | Route::Reports => {}
        }
        hints.push(("q", "quit"));
        hints
    }

    pub fn render(&self, f: &mut Frame) {
        let [nav, body, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        f.render_widget(NavBarView::new(&self.nav), nav);

        match self.route {
            Route::Overview => self.overview_page.render(f, body, &self.overview),
            Route::Data => self.data_page.render(f, body, &self.data),
            Route::Forecasting => self.forecasting_page.render(f, body, &self.forecasting),
            Route::Reports => self.reports_page.render(f, body, &self.reports),
        }

        let hints = self.hints();
        f.render_widget(StatusLineView::new(&hints), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{buffer_lines, terminal};
    use crossterm::event::KeyModifiers;

    fn press(tui: &mut TuiRenderer, code: KeyCode) {
        tui.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(tui: &TuiRenderer) -> String {
        let mut terminal = terminal(160, 48);
        terminal.draw(|f| tui.render(f)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_number_keys_select_routes() {
        let mut tui = TuiRenderer::new(TuiOptions::default());
        press(&mut tui, KeyCode::Char('3'));
        assert_eq!(tui.route(), Route::Forecasting);
        press(&mut tui, KeyCode::Char('2'));
        assert_eq!(tui.route(), Route::Data);
        press(&mut tui, KeyCode::Char('1'));
        assert_eq!(tui.route(), Route::Overview);
    }

    #[test]
    fn test_tab_cycles_and_wraps() {
        let mut tui = TuiRenderer::new(TuiOptions {
            route: Route::Reports,
            ..TuiOptions::default()
        });
        press(&mut tui, KeyCode::Tab);
        assert_eq!(tui.route(), Route::Overview);
        press(&mut tui, KeyCode::BackTab);
        assert_eq!(tui.route(), Route::Reports);
    }

    #[test]
    fn test_search_flow_filters_and_keeps_q() {
        let mut tui = TuiRenderer::new(TuiOptions {
            route: Route::Data,
            ..TuiOptions::default()
        });
        press(&mut tui, KeyCode::Char('/'));
        for c in "eq".chars() {
            press(&mut tui, KeyCode::Char(c));
        }
        assert!(!tui.should_quit());
        assert_eq!(tui.data().search.query, "eq");
        assert!(tui.data().search.applied);

        press(&mut tui, KeyCode::Backspace);
        press(&mut tui, KeyCode::Backspace);
        for c in "sales".chars() {
            press(&mut tui, KeyCode::Char(c));
        }
        assert_eq!(tui.data().sources.len(), 1);

        press(&mut tui, KeyCode::Esc);
        assert!(!tui.should_quit());
        press(&mut tui, KeyCode::Esc);
        assert!(tui.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_page() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let mut tui = TuiRenderer::new(TuiOptions::default());
        tui.handle_key_event(ctrl_c);
        assert!(tui.should_quit());

        let mut tui = TuiRenderer::new(TuiOptions {
            route: Route::Data,
            ..TuiOptions::default()
        });
        press(&mut tui, KeyCode::Char('/'));
        tui.handle_key_event(ctrl_c);
        assert!(tui.should_quit());
        assert_eq!(tui.data().search.query, "");
    }

    #[test]
    fn test_search_disabled_keeps_all_rows() {
        let mut tui = TuiRenderer::new(TuiOptions {
            route: Route::Data,
            apply_search_filter: false,
            ..TuiOptions::default()
        });
        press(&mut tui, KeyCode::Char('/'));
        press(&mut tui, KeyCode::Char('x'));
        assert_eq!(tui.data().search.query, "x");
        assert_eq!(tui.data().sources.len(), 5);
    }

    #[test]
    fn test_forecasting_tab_keys_update_view_model() {
        let mut tui = TuiRenderer::new(TuiOptions {
            route: Route::Forecasting,
            ..TuiOptions::default()
        });
        press(&mut tui, KeyCode::Char('f'));
        assert_eq!(tui.forecasting().active_tab, ForecastTab::Features);
        press(&mut tui, KeyCode::Left);
        assert_eq!(tui.forecasting().active_tab, ForecastTab::Models);
    }

    #[test]
    fn test_tab_keys_ignored_off_page() {
        let mut tui = TuiRenderer::new(TuiOptions::default());
        press(&mut tui, KeyCode::Char('d'));
        assert_eq!(tui.forecasting().active_tab, ForecastTab::Models);
        assert_eq!(tui.route(), Route::Overview);
    }

    #[test]
    fn test_screen_shows_active_page() {
        let mut tui = TuiRenderer::new(TuiOptions::default());
        let text = screen(&tui);
        assert!(text.contains("MarketAnalytics"));
        assert!(text.contains("Market Research Dashboard"));

        press(&mut tui, KeyCode::Char('4'));
        let text = screen(&tui);
        assert!(text.contains("Reports & Insights"));
        assert!(!text.contains("Market Research Dashboard"));
    }
}
