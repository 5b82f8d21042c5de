use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::bookmarks::BookmarkStore;
use crate::ui::windows::centered_popup_area;

pub struct BookmarksWindow {
    pub visible: bool,
    pub selected_index: usize,
}

impl BookmarksWindow {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected_index: 0,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn next_entry(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    pub fn previous_entry(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, bookmarks: &BookmarkStore, current_page: u64) {
        if !self.visible {
            return;
        }

        let popup_area = centered_popup_area(area, 50, 50);
        frame.render_widget(Clear, popup_area);

        if bookmarks.is_empty() {
            let empty_text = vec![
                Line::from("No bookmarks yet"),
                Line::from(""),
                Line::from(Span::styled(
                    "Press b on a page to add one",
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
            ];
            let paragraph = Paragraph::new(empty_text)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title("Bookmarks").borders(Borders::ALL));
            frame.render_widget(paragraph, popup_area);
            return;
        }

        let items: Vec<ListItem> = bookmarks
            .iter()
            .enumerate()
            .map(|(i, bookmark)| {
                let style = if i == self.selected_index {
                    Style::default().bg(Color::Blue).fg(Color::White)
                } else {
                    Style::default()
                };
                let marker = if bookmark.page_index == current_page {
                    "* "
                } else {
                    "  "
                };
                ListItem::new(Line::from(format!("{}{}", marker, bookmark.label))).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Bookmarks").borders(Borders::ALL));
        frame.render_widget(list, popup_area);
    }
}
