//! Input dispatch tests
//!
//! A probe widget logs every hook it receives so the order of hover, press,
//! focus and keyboard delivery can be checked frame by frame.

use crate::foundation::math::Vec2;
use crate::input::{KeyCode, MouseButton};
use crate::ui::widget::{DrawCx, Widget, WidgetCx};
use crate::ui::{Gui, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Probe {
    name: &'static str,
    log: Log,
    keeper: bool,
}

impl Probe {
    fn record(&self, event: impl std::fmt::Display) {
        self.log.borrow_mut().push(format!("{} {}", self.name, event));
    }
}

impl Widget for Probe {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        cx.node_mut().size = Vec2::new(50.0, 50.0);
    }

    fn draw(&mut self, _cx: &mut DrawCx<'_, '_>) {}

    fn click(&mut self, _cx: &mut WidgetCx<'_>, _x: f32, _y: f32) {
        self.record("click");
    }

    fn clicked(&mut self, _cx: &mut WidgetCx<'_>, button: MouseButton) {
        self.record(format!("clicked {}", button.name()));
    }

    fn mouse_move(&mut self, _cx: &mut WidgetCx<'_>, _x: f32, _y: f32) {
        self.record("move");
    }

    fn mouse_release(&mut self, _cx: &mut WidgetCx<'_>, _x: f32, _y: f32) {
        self.record("release");
    }

    fn typed(&mut self, _cx: &mut WidgetCx<'_>, ch: char) {
        self.record(format!("typed {ch}"));
    }

    fn key_pressed(&mut self, _cx: &mut WidgetCx<'_>, key: KeyCode) {
        self.record(format!("key {}", key.name()));
    }

    fn focus(&mut self, _cx: &mut WidgetCx<'_>) {
        self.record("focus");
    }

    fn defocus(&mut self, _cx: &mut WidgetCx<'_>) {
        self.record("defocus");
    }

    fn is_focus_keeper(&self) -> bool {
        self.keeper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support;

    fn probe(gui: &mut Gui, log: &Log, name: &'static str, x: f32) -> NodeId {
        let id = gui.spawn(Probe { name, log: Rc::clone(log), keeper: false });
        let root = gui.root();
        gui.add_at(root, id, Vec2::new(x, 100.0)).unwrap();
        id
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.borrow_mut())
    }

    #[test]
    fn test_press_and_release_order() {
        let mut gui = support::gui();
        let log = Log::default();
        let a = probe(&mut gui, &log, "a", 100.0);

        support::press(&mut gui, 110.0, 110.0);
        assert_eq!(take(&log), ["a click", "a focus", "a move"]);
        assert_eq!(gui.pressed(), Some(a));
        assert_eq!(gui.get_focused(), Some(a));
        assert!(gui.node(a).unwrap().is_pressed());

        // the release goes to the pressed node wherever the cursor is
        support::release(&mut gui, 700.0, 500.0);
        assert_eq!(take(&log), ["a release"]);
        assert_eq!(gui.pressed(), None);
        assert!(!gui.node(a).unwrap().is_pressed());
    }

    #[test]
    fn test_focus_moves_with_single_defocus() {
        let mut gui = support::gui();
        let log = Log::default();
        let a = probe(&mut gui, &log, "a", 100.0);
        let b = probe(&mut gui, &log, "b", 200.0);

        support::click(&mut gui, 110.0, 110.0);
        take(&log);
        support::click(&mut gui, 210.0, 110.0);
        assert_eq!(take(&log), ["b click", "a defocus", "b focus", "b move", "b release"]);
        assert!(!gui.node(a).unwrap().is_focused());
        assert!(gui.node(b).unwrap().is_focused());

        // empty space drops focus
        support::click(&mut gui, 700.0, 500.0);
        assert_eq!(take(&log), ["b defocus"]);
        assert_eq!(gui.get_focused(), None);
    }

    #[test]
    fn test_keyboard_waits_for_the_frame_after_focus() {
        let mut gui = support::gui();
        let log = Log::default();
        probe(&mut gui, &log, "a", 100.0);

        gui.char_typed('x');
        support::click(&mut gui, 110.0, 110.0);
        assert!(!take(&log).iter().any(|event| event.contains("typed")));

        gui.char_typed('y');
        gui.key_down(KeyCode::Space);
        gui.act(0.016);
        assert_eq!(take(&log), ["a typed y", "a key space"]);
    }

    #[test]
    fn test_held_key_repeats_deliver_each_press() {
        let mut gui = support::gui();
        let log = Log::default();
        probe(&mut gui, &log, "a", 100.0);
        support::click(&mut gui, 110.0, 110.0);
        take(&log);

        gui.key_down(KeyCode::Backspace);
        gui.key_down(KeyCode::Backspace);
        gui.act(0.016);
        assert_eq!(take(&log), ["a key backspace", "a key backspace"]);
    }

    #[test]
    fn test_escape_defocuses_without_delivery() {
        let mut gui = support::gui();
        let log = Log::default();
        probe(&mut gui, &log, "a", 100.0);
        support::click(&mut gui, 110.0, 110.0);
        take(&log);

        support::key(&mut gui, KeyCode::Escape);
        assert_eq!(take(&log), ["a defocus"]);
        assert_eq!(gui.get_focused(), None);
    }

    #[test]
    fn test_other_buttons_reach_focused_node() {
        let mut gui = support::gui();
        let log = Log::default();
        let a = probe(&mut gui, &log, "a", 100.0);
        support::click(&mut gui, 110.0, 110.0);
        take(&log);

        gui.update_mouse_position(600.0, 500.0);
        gui.update_mouse_button(MouseButton::Right, true);
        gui.act(0.016);
        assert_eq!(take(&log), ["a clicked right mouse button"]);
        assert_eq!(gui.get_focused(), Some(a));
    }

    #[test]
    fn test_drag_reports_moves_only_when_cursor_moves() {
        let mut gui = support::gui();
        let log = Log::default();
        probe(&mut gui, &log, "a", 100.0);
        support::press(&mut gui, 110.0, 110.0);
        take(&log);

        gui.act(0.016);
        assert!(take(&log).is_empty());

        gui.update_mouse_position(400.0, 110.0);
        gui.act(0.016);
        assert_eq!(take(&log), ["a move"]);
    }

    #[test]
    fn test_hover_follows_cursor() {
        let mut gui = support::gui();
        let log = Log::default();
        let a = probe(&mut gui, &log, "a", 100.0);

        gui.update_mouse_position(120.0, 120.0);
        gui.act(0.016);
        assert_eq!(gui.hovered(), Some(a));
        assert!(gui.node(a).unwrap().is_hovered());

        gui.update_mouse_position(700.0, 500.0);
        gui.act(0.016);
        assert_eq!(gui.hovered(), None);
        assert!(!gui.node(a).unwrap().is_hovered());
    }

    #[test]
    fn test_locked_cursor_is_ignored() {
        let mut gui = support::gui();
        let log = Log::default();
        probe(&mut gui, &log, "a", 100.0);
        gui.set_cursor_locked(true);

        support::click(&mut gui, 110.0, 110.0);
        assert!(take(&log).is_empty());
        assert_eq!(gui.hovered(), None);
        assert_eq!(gui.get_focused(), None);
    }

    #[test]
    fn test_removing_nodes_clears_interaction_state() {
        let mut gui = support::gui();
        let log = Log::default();
        let a = probe(&mut gui, &log, "a", 100.0);
        support::press(&mut gui, 110.0, 110.0);
        take(&log);

        gui.remove(a).unwrap();
        assert_eq!(take(&log), ["a defocus"]);
        assert_eq!(gui.hovered(), None);
        assert_eq!(gui.pressed(), None);
        assert_eq!(gui.get_focused(), None);

        // releasing afterwards reaches nobody
        support::release(&mut gui, 110.0, 110.0);
        assert!(take(&log).is_empty());
    }

    #[test]
    fn test_focus_keeper_catches_focus() {
        let mut gui = support::gui();
        let log = Log::default();
        let id = gui.spawn(Probe { name: "k", log: Rc::clone(&log), keeper: true });
        gui.add(id).unwrap();

        assert!(!gui.is_focus_caught());
        gui.set_focus(Some(id));
        assert!(gui.is_focus_caught());
        gui.set_focus(Some(id));
        assert_eq!(take(&log), ["k focus"]);
    }
}
