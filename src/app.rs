use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Margin},
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::Action,
    cli::{Cli, DisplayMode},
    components::help::Help,
    config::Config,
    constants::{CANVAS_HEIGHT, CANVAS_WIDTH},
    pages::{game::GamePage, home::HomePage, Page},
    tui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    display_mode: DisplayMode,
    should_quit: bool,
    should_suspend: bool,
    show_help: bool,
    pages: Vec<Box<dyn Page>>,
    active_page_index: usize,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::new()?;

        let home_page = HomePage::new();
        let game_page = GamePage::new(cli.seed);

        Ok(Self {
            config,
            tick_rate: cli.tick_rate,
            frame_rate: cli.frame_rate,
            display_mode: cli.display_mode(),
            should_quit: false,
            should_suspend: false,
            show_help: false,
            pages: vec![Box::new(home_page), Box::new(game_page)],
            active_page_index: 0,
        })
    }

    fn get_active_page(&mut self) -> &mut Box<dyn Page> {
        &mut self.pages[self.active_page_index]
    }

    fn set_active_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.active_page_index = index;
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.enter()?;

        for page in self.pages.iter_mut() {
            page.register_keymap(&self.config.keybindings.pages)?;
        }

        for page in self.pages.iter_mut() {
            page.register_action_handler(action_tx.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.register_config_handler(self.config.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.init()?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        let mut action = None;

                        let active_page_id = self.get_active_page().id();
                        if let Some(keymap) = self.config.keybindings.pages.get(&active_page_id) {
                            action = keymap.0.get(&key);
                        };
                        if let Some(act) = self.config.keybindings.global.0.get(&key) {
                            action = Some(act)
                        }

                        if let Some(action) = action {
                            log::info!("Got action: {action:?}");
                            action_tx.send(action.clone())?;
                        }
                    },
                    _ => {},
                }
                if let Some(action) = self.get_active_page().handle_events(Some(e))? {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Tick => {},
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::ToggleShowHelp => self.show_help = !self.show_help,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui, &action_tx)?;
                    },
                    Action::Render => {
                        self.render(&mut tui, &action_tx)?;
                    },
                    Action::Error(e) => {
                        log::error!("{e}");
                    },
                    Action::StartGame => {
                        self.set_active_page(1);
                    },
                    Action::ShowHome => {
                        self.set_active_page(0);
                    },
                    _ => {},
                }
                if !self.show_help {
                    if let Some(action) = self.get_active_page().update(action)? {
                        action_tx.send(action)?
                    }
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?;
                tui.tick_rate(self.tick_rate);
                tui.frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn canvas_area(&self, frame_area: Rect) -> Rect {
        let (width, height) = match self.display_mode {
            DisplayMode::Fullscreen => return frame_area,
            DisplayMode::Windowed => (CANVAS_WIDTH + 2, CANVAS_HEIGHT + 2),
            DisplayMode::Large => (CANVAS_WIDTH * 2 + 2, CANVAS_HEIGHT * 2 + 2),
        };
        let [_, area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height.min(frame_area.height)),
            Constraint::Fill(1),
        ])
        .areas(frame_area);
        let [_, area, _] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(width.min(frame_area.width)), Constraint::Fill(1)])
                .areas(area);
        area
    }

    fn render(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            let area = self.canvas_area(f.area());

            let area = if self.display_mode == DisplayMode::Fullscreen {
                area
            } else {
                let border = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().bg(Color::Black));
                f.render_widget(border, area);
                area.inner(Margin { horizontal: 1, vertical: 1 })
            };

            if let Some(page) = self.pages.get_mut(self.active_page_index) {
                let r = page.draw(f, area);
                if let Err(e) = r {
                    action_tx.send(Action::Error(format!("Failed to draw: {:?}", e))).unwrap();
                }
            }

            if self.show_help {
                let r = self.draw_help(f, area);
                if let Err(e) = r {
                    action_tx.send(Action::Error(format!("Failed to draw: {:?}", e))).unwrap();
                }
            };
        })?;

        Ok(())
    }

    fn draw_help(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let active_page_id = self.get_active_page().id();
        let mut groups = vec![("System".to_string(), self.config.keybindings.global.clone())];
        if let Some(bindings) = self.config.keybindings.pages.get(&active_page_id) {
            groups.push((active_page_id.to_string(), bindings.clone()));
        }

        f.render_widget(Help::new(groups), rect);

        Ok(())
    }
}
