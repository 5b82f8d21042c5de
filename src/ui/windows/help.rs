use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpWindow;

const HELP_TEXT: &[&str] = &[
    " Key Bindings:",
    "   l / Right / Space n  Next Page",
    "   h / Left / p         Previous Page",
    "   Home                 First Page",
    "   End / G              Last Page",
    "   g                    Go To Page...",
    "",
    " Bookmarks:",
    "   b                    Add Bookmark Here",
    "   m                    Bookmark List",
    "",
    " Display:",
    "   + / -                More/Fewer Lines Per Page",
    "   s                    Settings (Theme)",
    "",
    "   q                    Quit / Close Window",
    "   ?                    Help",
];

impl HelpWindow {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_content: Vec<Line> = HELP_TEXT.iter().map(|&s| Line::from(s)).collect();

        let max_width = help_content.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let width = (max_width + 4).min(area.width);
        let height = (help_content.len() as u16 + 2).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);
        let paragraph = Paragraph::new(help_content)
            .block(Block::default().title("Help").borders(Borders::ALL));
        frame.render_widget(paragraph, popup_area);
    }
}
