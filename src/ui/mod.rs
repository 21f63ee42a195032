pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::{render_due_banner, render_list_pane};
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Banner visibility is derived from the store on every frame
    let layout = create_layout(size, app.has_due_item());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    if let Some(banner_area) = layout.banner_area {
        render_due_banner(f, banner_area);
    }

    render_list_pane(f, app, layout.list_area);

    // Render input form if active
    if app.ui_mode != UiMode::Normal {
        render_input_form(f, app, size);
    }
}
