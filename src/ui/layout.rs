use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the due banner, borders included
const BANNER_HEIGHT: u16 = 3;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub banner_area: Option<Rect>,
    pub list_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Due banner (only while an item is due)
/// - To-do list fills the rest
pub fn create_layout(area: Rect, show_banner: bool) -> MainLayout {
    let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Keybindings bar
            Constraint::Length(banner_height), // Due banner
            Constraint::Min(0),                // List
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        banner_area: show_banner.then_some(chunks[1]),
        list_area: chunks[2],
    }
}

/// Create a centered area for the add forms
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_without_banner() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.banner_area.is_none());
        assert_eq!(layout.list_area.height, 49);
    }

    #[test]
    fn test_create_layout_with_banner() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, true);

        let banner = layout.banner_area.unwrap();
        assert_eq!(banner.height, BANNER_HEIGHT);
        assert_eq!(banner.y, 1);
        assert_eq!(layout.list_area.height, 50 - 1 - BANNER_HEIGHT);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 14);
    }
}
