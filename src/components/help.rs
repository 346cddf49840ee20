use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Row, Table, Widget},
};

use crate::{
    action::Action,
    config::{key_event_to_string, PageKeyBindings},
};

fn action_label(action: &Action) -> String {
    match action {
        Action::Home(inner) => inner.to_string(),
        Action::Game(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug)]
pub struct Help {
    keybinding_groups: Vec<(String, Vec<(String, String)>)>,
    column_spacing: u16,
    margin_vertical: u16,
    margin_horizantal: u16,
}

impl Help {
    pub fn new(keybinding_groups: Vec<(String, PageKeyBindings)>) -> Self {
        let groups = keybinding_groups
            .into_iter()
            .map(|(group_name, keybindings)| {
                let mut keybindings: Vec<(String, String)> = keybindings
                    .0
                    .into_iter()
                    .map(|(event, action)| (key_event_to_string(&event), action_label(&action)))
                    .collect();
                keybindings.sort_by_key(|(key, _)| key.clone());
                (group_name, keybindings)
            })
            .collect();

        Self { keybinding_groups: groups, column_spacing: 5, margin_vertical: 1, margin_horizantal: 2 }
    }

    fn render_group(
        &self,
        area: Rect,
        buf: &mut Buffer,
        group_name: &String,
        keybindings: &Vec<(String, String)>,
        key_length: u16,
        val_length: u16,
    ) {
        let rows: Vec<Row> =
            keybindings.iter().map(|(key, val)| Row::new(vec![key.clone(), val.clone()])).collect();
        let widths = vec![Constraint::Length(key_length), Constraint::Min(val_length)];

        let table = Table::new(rows, widths)
            .column_spacing(self.column_spacing)
            .header(Row::new(vec!["Key", "Command"]).style(Style::new().bold()).bottom_margin(1))
            .block(
                Block::new()
                    .title(group_name.clone())
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().bold().fg(Color::Cyan))
                    .padding(ratatui::widgets::Padding::symmetric(self.margin_horizantal, self.margin_vertical)),
            );

        Clear::default().render(area, buf);
        table.render(area, buf);
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let group_names: Vec<&String> = self.keybinding_groups.iter().map(|(name, _)| name).collect();
        let group_keybindings: Vec<&Vec<(String, String)>> =
            self.keybinding_groups.iter().map(|(_, bindings)| bindings).collect();

        let key_length = group_keybindings
            .iter()
            .map(|keybindings| keybindings.iter().map(|(key, _)| key.len()).max().unwrap_or(0))
            .max()
            .unwrap_or(0) as u16;
        let val_length = group_keybindings
            .iter()
            .map(|keybindings| keybindings.iter().map(|(_, val)| val.len()).max().unwrap_or(0))
            .max()
            .unwrap_or(0) as u16;

        // column spacing + margins + borders
        let width = key_length + val_length + self.column_spacing + (self.margin_horizantal * 2) + 2;
        let heights: Vec<u16> = group_keybindings
            .iter()
            .map(|keybindings| {
                let len = keybindings.len() as u16;
                // margins + header + borders
                len + (self.margin_vertical * 2) + 2 + 2
            })
            .collect();

        let area = Layout::default()
            .flex(ratatui::layout::Flex::Center)
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints(vec![Constraint::Length(width)])
            .split(area)[0];

        let areas = Layout::default()
            .flex(ratatui::layout::Flex::Center)
            .direction(ratatui::layout::Direction::Vertical)
            .constraints(heights.iter().map(|h| Constraint::Length(*h)).collect::<Vec<_>>())
            .split(area);

        for i in 0..self.keybinding_groups.len() {
            self.render_group(areas[i], buf, group_names[i], group_keybindings[i], key_length, val_length);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::GameAction;

    #[test]
    fn test_page_actions_use_their_inner_name() {
        assert_eq!(action_label(&Action::Game(GameAction::Flap)), "Flap");
        assert_eq!(action_label(&Action::Quit), "Quit");
    }

    #[test]
    fn test_groups_are_sorted_by_key() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        let mut bindings = PageKeyBindings::default();
        bindings.0.insert(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty()), Action::Game(GameAction::Restart));
        bindings.0.insert(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::empty()), Action::Game(GameAction::Pause));

        let help = Help::new(vec![("Game".to_string(), bindings)]);
        let keys: Vec<&str> = help.keybinding_groups[0].1.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["p", "r"]);
    }
}
