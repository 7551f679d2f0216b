//! Settings menu demo
//!
//! Builds a two-page menu (main and settings) bound to an in-memory settings
//! struct, then drives it with a scripted sequence of input frames the way a
//! window loop would. Draw calls go to a `CommandRecorder`; the last frame is
//! summarized in the log.
//!
//! Pass a `.toml` or `.ron` path to load a `GuiConfig`.

use rust_gui::config::{Config, GuiConfig};
use rust_gui::foundation::math::Vec2;
use rust_gui::input::{Binding, KeyCode, MouseButton, SharedBinding};
use rust_gui::rendering::{AssetTable, CommandRecorder, DrawCommand, MonoFont};
use rust_gui::ui::widgets::{Button, FullCheckBox, InputBindBox, Label, PagesControl, Panel, TextBox, TrackBar};
use rust_gui::ui::{Align, Gui, GuiError, NodeId, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

/// Values the settings page edits
#[derive(Debug, Clone)]
struct Settings {
    name: String,
    volume: f64,
    fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            volume: 0.5,
            fullscreen: false,
        }
    }
}

/// Nodes the script interacts with
struct Controls {
    open_settings: NodeId,
    name: NodeId,
    volume: NodeId,
    fullscreen: NodeId,
    jump: NodeId,
    back: NodeId,
}

/// Settings menu driven by scripted input
pub struct MenuApp {
    gui: Gui,
    assets: AssetTable,
    surface: CommandRecorder,
    settings: Rc<RefCell<Settings>>,
    jump: SharedBinding,
    controls: Controls,
    frames: u32,
}

fn show_page(gui: &mut Gui, name: &str) {
    if let Err(e) = gui.set_page(name, true) {
        log::warn!("Could not open page '{}': {}", name, e);
    }
}

impl MenuApp {
    pub fn new(config: GuiConfig) -> Result<Self, GuiError> {
        log::info!("Creating settings menu...");
        let font = MonoFont::new(config.default_font.clone(), config.glyph_width, config.line_height);
        let assets = AssetTable::new().with_font(font);

        let mut gui = Gui::new(config);
        let settings = Rc::new(RefCell::new(Settings::default()));
        let jump = Binding::key(KeyCode::Space).shared();
        let controls = Self::build(&mut gui, &settings, &jump)?;
        gui.set_page("main", false)?;

        Ok(Self {
            gui,
            assets,
            surface: CommandRecorder::new(),
            settings,
            jump,
            controls,
            frames: 0,
        })
    }

    fn build(gui: &mut Gui, settings: &Rc<RefCell<Settings>>, jump: &SharedBinding) -> Result<Controls, GuiError> {
        // Main page
        let main = gui.spawn(Panel::new(Vec2::new(220.0, 0.0)).with_interval(4.0));
        let title = gui.spawn(Label::new("Rusteroids").with_align(Align::Center));
        let open_settings = gui.spawn(Button::with_text("Settings").on_action(|gui| show_page(gui, "settings")));
        let quit = gui.spawn(Button::with_text("Quit").on_action(|_| log::info!("Quit requested")));
        for id in [title, open_settings, quit] {
            gui.add_to(main, id)?;
        }

        // Settings page
        let page = gui.spawn(Panel::new(Vec2::new(320.0, 0.0)).with_interval(4.0));

        let read = Rc::clone(settings);
        let write = Rc::clone(settings);
        let name = gui.spawn(
            TextBox::new("Player name")
                .with_supplier(move || read.borrow().name.clone())
                .with_consumer(move |text| write.borrow_mut().name = text)
                .with_validator(|text| !text.trim().is_empty())
                .on_edit_start(|| log::debug!("Editing player name")),
        );

        let read = Rc::clone(settings);
        let write = Rc::clone(settings);
        let initial = settings.borrow().volume;
        let volume = gui.spawn(
            TrackBar::new(0.0, 1.0, initial, 0.05, 8)
                .with_supplier(move || read.borrow().volume)
                .with_consumer(move |value| write.borrow_mut().volume = value),
        );

        let read = Rc::clone(settings);
        let write = Rc::clone(settings);
        let fullscreen = gui.spawn(
            FullCheckBox::new("Fullscreen", Vec2::new(200.0, 24.0), false)
                .with_supplier(move || read.borrow().fullscreen)
                .with_consumer(move |checked| write.borrow_mut().fullscreen = checked),
        );

        let row = gui.spawn(Panel::new(Vec2::new(0.0, 0.0)).with_orientation(Orientation::Horizontal));
        let jump_label = gui.spawn(Label::new("Jump"));
        let jump_box = gui.spawn(InputBindBox::new(Rc::clone(jump)));
        gui.add_to(row, jump_label)?;
        gui.add_to(row, jump_box)?;

        let back = gui.spawn(Button::with_text("Back").on_action(|gui| {
            if let Err(e) = gui.back() {
                log::warn!("Could not go back: {}", e);
            }
        }));
        for id in [name, volume, fullscreen, row, back] {
            gui.add_to(page, id)?;
        }

        let menu = gui.menu();
        gui.with_widget(menu, |pages: &mut PagesControl, cx| {
            pages.add_page(cx, "main", main)?;
            pages.add_page(cx, "settings", page)
        })??;

        let fullscreen = gui
            .widget::<FullCheckBox>(fullscreen)
            .and_then(FullCheckBox::checkbox)
            .unwrap_or(fullscreen);
        Ok(Controls {
            open_settings,
            name,
            volume,
            fullscreen,
            jump: jump_box,
            back,
        })
    }

    /// One GUI frame: update with this frame's input, then redraw
    fn frame(&mut self) {
        self.gui.act(FRAME);
        self.surface.clear();
        self.gui.draw(&mut self.surface, &self.assets);
        self.frames += 1;
    }

    /// Point inside a node at the given fraction of its size
    fn point(&self, id: NodeId, fx: f32, fy: f32) -> Vec2 {
        let size = self.gui.node(id).map_or_else(Vec2::zeros, |node| node.size);
        self.gui.calc_coord(id) + Vec2::new(size.x * fx, size.y * fy)
    }

    fn click_at(&mut self, point: Vec2) {
        self.gui.update_mouse_position(point.x, point.y);
        self.gui.update_mouse_button(MouseButton::Left, true);
        self.frame();
        self.gui.update_mouse_button(MouseButton::Left, false);
        self.frame();
    }

    fn click(&mut self, id: NodeId) {
        let center = self.point(id, 0.5, 0.5);
        self.click_at(center);
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.gui.char_typed(ch);
        }
        self.frame();
    }

    fn key(&mut self, key: KeyCode) {
        self.gui.key_down(key);
        self.frame();
        self.gui.key_up(key);
    }

    /// Drive the menu through a settings session
    pub fn run(&mut self) {
        self.frame();

        log::info!("Opening settings page");
        self.click(self.controls.open_settings);

        log::info!("Entering player name");
        self.click(self.controls.name);
        self.type_text("Ferris");
        self.key(KeyCode::Enter);

        log::info!("Dragging volume slider");
        let start = self.point(self.controls.volume, 0.5, 0.5);
        let end = self.point(self.controls.volume, 0.8, 0.5);
        self.gui.update_mouse_position(start.x, start.y);
        self.gui.update_mouse_button(MouseButton::Left, true);
        self.frame();
        self.gui.update_mouse_position(end.x, end.y);
        self.frame();
        self.gui.update_mouse_button(MouseButton::Left, false);
        self.frame();

        log::info!("Toggling fullscreen");
        self.click(self.controls.fullscreen);

        log::info!("Rebinding jump");
        self.click(self.controls.jump);
        self.key(KeyCode::W);

        log::info!("Scrolling over the page");
        self.gui.scroll(-1);
        self.frame();

        log::info!("Going back");
        self.click(self.controls.back);
    }

    /// Log the settings and the last frame's draw calls
    pub fn report(&self) {
        log::info!("Ran {} frames, {} nodes alive", self.frames, self.gui.node_count());
        log::info!("Settings: {:?}", self.settings.borrow());
        log::info!("Jump bound to {}", self.jump.borrow().text());

        let commands = self.surface.commands();
        let rects = commands.iter().filter(|cmd| matches!(cmd, DrawCommand::Rect { .. })).count();
        let clips = commands.iter().filter(|cmd| matches!(cmd, DrawCommand::PushScissor(_))).count();
        log::info!("Last frame: {} commands, {} rects, {} clip areas", commands.len(), rects, clips);
        for text in self.surface.texts() {
            log::debug!("  text: {}", text);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting settings menu demo");

    let config = match std::env::args().nth(1) {
        Some(path) => GuiConfig::load_from_file(&path)?,
        None => GuiConfig::default(),
    };

    let mut app = MenuApp::new(config)?;
    app.run();
    app.report();

    log::info!("Settings menu demo finished");
    Ok(())
}
