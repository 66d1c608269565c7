use crate::engine::{ChartMode, DirectoryModel, Engine, Scope};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Floors,
    Chart,
    Directory,
}

pub struct App {
    pub engine: Engine,
    pub focus_panel: FocusPanel,
    pub floor_cursor: usize, // 0 = "All Floors", 1+ = roster index
    pub chart_cursor: usize,
    pub directory_cursor: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let mut app = Self {
            engine,
            focus_panel: FocusPanel::Chart, // Start on the chart
            floor_cursor: 0,
            chart_cursor: 0,
            directory_cursor: 0,
            should_quit: false,
        };
        app.sync_floor_cursor();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.navigate_right(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char('m') => {
                let next = self.engine.selection().mode().next();
                self.set_mode(next);
            }
            KeyCode::Char('1') => self.set_mode(ChartMode::Distributed),
            KeyCode::Char('2') => self.set_mode(ChartMode::Bar),
            KeyCode::Char('3') => self.set_mode(ChartMode::Doughnut),
            KeyCode::Char('a') | KeyCode::Backspace => self.select(Scope::All),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => self.floor_cursor = self.floor_cursor.saturating_sub(1),
            FocusPanel::Chart => self.chart_cursor = self.chart_cursor.saturating_sub(1),
            FocusPanel::Directory => {
                self.directory_cursor = self.directory_cursor.saturating_sub(1);
            }
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                // 0 = "All Floors", then roster floors
                if self.floor_cursor < self.engine.registry().len() {
                    self.floor_cursor += 1;
                }
            }
            FocusPanel::Chart => {
                if self.chart_cursor < self.engine.chart().len().saturating_sub(1) {
                    self.chart_cursor += 1;
                }
            }
            FocusPanel::Directory => {
                if self.directory_cursor < self.directory_group_count().saturating_sub(1) {
                    self.directory_cursor += 1;
                }
            }
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Directory => self.focus_panel = FocusPanel::Chart,
            FocusPanel::Chart => self.focus_panel = FocusPanel::Floors,
            FocusPanel::Floors => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => self.focus_panel = FocusPanel::Chart,
            FocusPanel::Chart => self.focus_panel = FocusPanel::Directory,
            FocusPanel::Directory => {}
        }
    }

    fn activate(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                let scope = self.scope_at_cursor();
                self.select(scope);
            }
            FocusPanel::Chart => {
                if self.engine.activate(self.chart_cursor) {
                    self.chart_cursor = 0;
                    self.sync_floor_cursor();
                }
            }
            FocusPanel::Directory => {
                // Groups only exist in the all-floors directory
                if !self.engine.selection().scope().is_all() {
                    return;
                }
                let floor_name = self
                    .engine
                    .registry()
                    .floors()
                    .get(self.directory_cursor)
                    .map(|f| f.floor_name.clone());
                if let Some(name) = floor_name {
                    self.engine.toggle(&name);
                }
            }
        }
    }

    fn select(&mut self, scope: Scope) {
        self.engine.select(scope);
        self.chart_cursor = 0;
        self.sync_floor_cursor();
    }

    fn set_mode(&mut self, mode: ChartMode) {
        self.engine.set_mode(mode);
        self.chart_cursor = 0;
    }

    fn scope_at_cursor(&self) -> Scope {
        if self.floor_cursor == 0 {
            return Scope::All;
        }
        self.engine
            .registry()
            .floors()
            .get(self.floor_cursor - 1)
            .map_or(Scope::All, |f| Scope::Floor(f.floor_name.clone()))
    }

    /// Moves the floor picker cursor onto the selected scope.
    fn sync_floor_cursor(&mut self) {
        self.floor_cursor = match self.engine.selection().scope() {
            Scope::All => 0,
            Scope::Floor(name) => self
                .engine
                .registry()
                .floors()
                .iter()
                .position(|f| &f.floor_name == name)
                .map_or(0, |i| i + 1),
        };
    }

    fn directory_group_count(&self) -> usize {
        match self.engine.directory() {
            DirectoryModel::Grouped(groups) => groups.len(),
            _ => 0,
        }
    }
}
