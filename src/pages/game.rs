use std::collections::HashMap;

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{Action, GameAction},
    components::{scenery::Scenery, sprite::Sprite},
    config::PageKeyBindings,
    constants::game,
    score::HighScoreStore,
    sim::{GamePhase, SimConfig, SimEvent, SimInput, Simulation},
    utils::get_data_dir,
};

pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    sim: Simulation,
    store: HighScoreStore,
    pending: SimInput,
    seed: Option<u64>,
}

impl GamePage {
    pub fn new(seed: Option<u64>) -> Self {
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            sim: Simulation::new(SimConfig::default(), seed),
            store: HighScoreStore::load(get_data_dir().join("highscore.json")),
            pending: SimInput::default(),
            seed,
        }
    }

    fn reset(&mut self) {
        self.sim = Simulation::new(SimConfig::default(), self.seed);
        self.pending = SimInput::default();
    }

    fn step(&mut self) {
        let input = std::mem::take(&mut self.pending);
        let events = self.sim.tick(&input);
        for event in &events {
            // Named cues for the audio collaborator.
            log::debug!("cue: {event}");
        }
        // `record` only persists improvements, so updating on every score
        // keeps the best current even if the process dies mid-run.
        if events.iter().any(|event| matches!(event, SimEvent::Score | SimEvent::Hit | SimEvent::Crash)) {
            self.store.record(self.sim.score());
        }
    }

    fn pipe_text(width: u16, height: u16, edge_at_bottom: bool) -> String {
        let body_row: String = std::iter::repeat(game::PIPE_BODY).take(width as usize).collect();
        let edge_row: String = std::iter::repeat(game::PIPE_EDGE).take(width as usize).collect();

        let body_rows = std::iter::repeat_with(|| body_row.clone()).take(height.saturating_sub(1) as usize);
        let edge_rows = std::iter::repeat_with(|| edge_row.clone()).take(height.min(1) as usize);
        let rows: Vec<String> =
            if edge_at_bottom { body_rows.chain(edge_rows).collect() } else { edge_rows.chain(body_rows).collect() };

        rows.join("\n")
    }

    fn draw_overlay(&self, f: &mut Frame<'_>, rect: Rect, lines: Vec<Line>) {
        let height = lines.len() as u16;
        let [area] = Layout::vertical(vec![Constraint::Length(height)]).flex(layout::Flex::Center).areas(rect);
        let paragraph =
            Paragraph::new(lines).style(Style::default().fg(game::OVERLAY_COLOR)).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
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

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.step(),
            Action::StartGame => self.reset(),
            Action::Game(GameAction::Flap) => self.pending.flap = true,
            Action::Game(GameAction::Pause) => self.pending.pause = true,
            Action::Game(GameAction::Restart) => self.pending.restart = true,
            Action::Game(GameAction::Leave) => return Ok(Some(Action::ShowHome)),
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let config = self.sim.config().clone();
        let sx = rect.width as f32 / config.play_width;
        let sy = rect.height as f32 / config.play_height;
        let col = |x: f32| (x * sx).round() as i32;
        let row = |y: f32| (y * sy).round() as i32;

        // Ground strip, scrolled in lockstep with the pipes.
        let ground_rows = (rect.height as i32 - row(config.ground_top())).max(1) as u16;
        let scroll = (-self.sim.ground().offsets[0]).rem_euclid(config.play_width);
        f.render_widget(Scenery::new(ground_rows, col(scroll) as u16), rect);

        let pipe_cols = ((config.pipe_width * sx).round() as u16).max(1);
        let pipe_style = match game::PIPE_COLOR {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        for pipe in self.sim.pipes() {
            let upper_rows = row(pipe.gap_offset).max(0) as u16;
            if upper_rows > 0 {
                let sprite = Sprite::new(Self::pipe_text(pipe_cols, upper_rows, true))
                    .origin(col(pipe.x), 0)
                    .style(pipe_style);
                f.render_widget(sprite, rect);
            }
            let lower_top = row(pipe.gap_offset + config.pipe_gap);
            let lower_rows = (rect.height as i32 - ground_rows as i32 - lower_top).max(0) as u16;
            if lower_rows > 0 {
                let sprite = Sprite::new(Self::pipe_text(pipe_cols, lower_rows, false))
                    .origin(col(pipe.x), lower_top)
                    .style(pipe_style);
                f.render_widget(sprite, rect);
            }
        }

        let obstacle_style = match game::OBSTACLE_COLOR {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        for obstacle in self.sim.obstacles() {
            let sprite =
                Sprite::new(game::OBSTACLE_TEXT).origin(col(obstacle.x), row(obstacle.y)).style(obstacle_style);
            f.render_widget(sprite, rect);
        }

        let character = self.sim.character();
        let bird_style = match game::BIRD_COLOR {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        let sprite =
            Sprite::new(game::BIRD_TEXT).origin(col(character.x), row(character.y)).style(bird_style).transparent(true);
        f.render_widget(sprite, rect);

        let score_line = format!("Score: {}   Best: {}", self.sim.score(), self.store.best());
        let paragraph =
            Paragraph::new(score_line).style(Style::default().fg(game::SCORE_COLOR)).alignment(Alignment::Center);
        f.render_widget(paragraph, Rect { x: rect.x, y: rect.y, width: rect.width, height: 1 });

        match self.sim.phase() {
            GamePhase::Menu => {
                self.draw_overlay(f, rect, vec![Line::from("Press Space to flap")]);
            },
            GamePhase::Paused => {
                self.draw_overlay(f, rect, vec![Line::from("PAUSED"), Line::from("p to resume")]);
            },
            GamePhase::GameOver => {
                self.draw_overlay(f, rect, vec![
                    Line::from("GAME OVER"),
                    Line::from(format!("Score: {}", self.sim.score())),
                    Line::from(format!("Best: {}", self.store.best())),
                    Line::from(""),
                    Line::from("r to restart, esc for menu"),
                ]);
            },
            GamePhase::Playing => {},
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_page(name: &str) -> GamePage {
        let mut path = std::env::temp_dir();
        path.push(format!("flappy-rs-page-{name}-{}.json", std::process::id()));
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            sim: Simulation::new(SimConfig::default(), Some(11)),
            store: HighScoreStore::load(path),
            pending: SimInput::default(),
            seed: Some(11),
        }
    }

    #[test]
    fn test_flap_is_consumed_by_one_tick() {
        let mut page = test_page("flap");
        page.update(Action::Game(GameAction::Flap)).unwrap();
        page.update(Action::Tick).unwrap();
        assert_eq!(page.sim.phase(), GamePhase::Playing);
        let velocity_after_flap = page.sim.character().velocity;

        // No new flap queued, the character keeps falling.
        page.update(Action::Tick).unwrap();
        assert!(page.sim.character().velocity > velocity_after_flap);
    }

    #[test]
    fn test_leave_hands_control_back_to_home() {
        let mut page = test_page("leave");
        let action = page.update(Action::Game(GameAction::Leave)).unwrap();
        assert_eq!(action, Some(Action::ShowHome));
    }

    #[test]
    fn test_start_game_resets_the_session() {
        let mut page = test_page("reset");
        page.update(Action::Game(GameAction::Flap)).unwrap();
        page.update(Action::Tick).unwrap();
        assert_eq!(page.sim.phase(), GamePhase::Playing);

        page.update(Action::StartGame).unwrap();
        assert_eq!(page.sim.phase(), GamePhase::Menu);
        assert_eq!(page.sim.score(), 0);
    }

    #[test]
    fn test_run_end_records_the_high_score() {
        let mut page = test_page("record");
        page.update(Action::Game(GameAction::Flap)).unwrap();
        page.update(Action::Tick).unwrap();
        // Let the character fall into the ground.
        for _ in 0..300 {
            page.update(Action::Tick).unwrap();
            if page.sim.phase() == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(page.sim.phase(), GamePhase::GameOver);
        assert_eq!(page.store.best(), page.sim.score());
        let mut path = std::env::temp_dir();
        path.push(format!("flappy-rs-page-record-{}.json", std::process::id()));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_pipe_text_has_one_edge_row() {
        let text = GamePage::pipe_text(3, 4, false);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "███");
        assert_eq!(rows[1], "|||");

        let text = GamePage::pipe_text(2, 2, true);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows, vec!["||", "██"]);
    }
}
