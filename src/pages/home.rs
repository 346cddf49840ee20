use std::collections::HashMap;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{Action, HomeAction},
    config::PageKeyBindings,
    constants::TITLE_TEXT,
    score::HighScoreStore,
    utils::get_data_dir,
};

#[derive(Builder)]
pub struct HomePage {
    #[builder(default)]
    pub action_tx: Option<UnboundedSender<Action>>,
    #[builder(default)]
    pub keymap: PageKeyBindings,
    best_score: u32,
}

impl HomePage {
    pub fn new() -> Self {
        HomePageBuilder::default()
            .best_score(0)
            .build()
            .unwrap_or(HomePage { action_tx: None, keymap: PageKeyBindings::default(), best_score: 0 })
    }

    fn reload_best_score(&mut self) {
        self.best_score = HighScoreStore::load(get_data_dir().join("highscore.json")).best();
    }
}

impl Page for HomePage {
    fn id(&self) -> PageId {
        PageId::Home
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn init(&mut self) -> Result<()> {
        self.reload_best_score();
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Home(HomeAction::Start) => return Ok(Some(Action::StartGame)),
            // Re-read the file when the game page hands control back, the
            // run that just ended may have set a new best.
            Action::ShowHome => self.reload_best_score(),
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let title_lines: Vec<&str> = TITLE_TEXT.lines().filter(|s| !s.is_empty()).collect();
        let num_title_lines = title_lines.len() as u16;

        let [title_area, score_area, hint_area] = Layout::vertical(vec![
            Constraint::Length(num_title_lines),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(layout::Flex::SpaceAround)
        .areas(rect);

        let lines = title_lines.iter().map(|line| Line::from(*line)).collect::<Vec<_>>();
        let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Yellow)).alignment(Alignment::Center);
        f.render_widget(paragraph, title_area);

        let score_line = if self.best_score > 0 {
            format!("Best score: {}", self.best_score)
        } else {
            "No high score yet".to_string()
        };
        let paragraph =
            Paragraph::new(score_line).style(Style::default().fg(Color::White)).alignment(Alignment::Center);
        f.render_widget(paragraph, score_area);

        let hint = vec![Line::from("Press Space to start"), Line::from("? for help, q to quit")];
        let paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)).alignment(Alignment::Center);
        f.render_widget(paragraph, hint_area);

        Ok(())
    }
}
