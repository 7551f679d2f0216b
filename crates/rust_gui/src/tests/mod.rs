//! Integration tests across the controller and the widget set
//!
//! `support` holds the helpers the inline widget tests share.

mod input_integration;
mod tree_integration;

pub(crate) mod support {
    use crate::config::GuiConfig;
    use crate::foundation::logging;
    use crate::input::{KeyCode, MouseButton};
    use crate::rendering::{AssetTable, CommandRecorder, MonoFont};
    use crate::ui::Gui;

    const FRAME: f32 = 1.0 / 60.0;

    /// Controller with the default configuration
    pub(crate) fn gui() -> Gui {
        logging::init_with_level(log::LevelFilter::Debug);
        Gui::new(GuiConfig::default())
    }

    /// Asset table holding the default monospace font
    pub(crate) fn assets() -> AssetTable {
        AssetTable::new().with_font(MonoFont::new("normal", 8.0, 16.0))
    }

    pub(crate) fn draw(gui: &mut Gui) -> CommandRecorder {
        draw_with(gui, &assets())
    }

    pub(crate) fn draw_with(gui: &mut Gui, assets: &AssetTable) -> CommandRecorder {
        let mut recorder = CommandRecorder::new();
        gui.draw(&mut recorder, assets);
        recorder
    }

    /// Move to `(x, y)` and press the left button for one frame
    pub(crate) fn press(gui: &mut Gui, x: f32, y: f32) {
        gui.update_mouse_position(x, y);
        gui.update_mouse_button(MouseButton::Left, true);
        gui.act(FRAME);
    }

    /// Move to `(x, y)` and release the left button for one frame
    pub(crate) fn release(gui: &mut Gui, x: f32, y: f32) {
        gui.update_mouse_position(x, y);
        gui.update_mouse_button(MouseButton::Left, false);
        gui.act(FRAME);
    }

    pub(crate) fn click(gui: &mut Gui, x: f32, y: f32) {
        press(gui, x, y);
        release(gui, x, y);
    }

    /// Press and release a key over one frame
    pub(crate) fn key(gui: &mut Gui, key: KeyCode) {
        gui.key_down(key);
        gui.act(FRAME);
        gui.key_up(key);
    }
}
