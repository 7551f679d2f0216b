//! Tree structure, ownership and layout tests
//!
//! Exercises attach/detach rules, node lifetime through owners (parents,
//! the registry), hit-testing, auto-layout and scrolling through `Gui`.

use crate::foundation::math::Vec2;
use crate::rendering::DrawCommand;
use crate::ui::widgets::{Button, Container, Label, Panel};
use crate::ui::{Gui, GuiError, Insets, NodeId, Orientation};
use std::cell::Cell;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support;

    fn container(gui: &mut Gui, width: f32, height: f32) -> NodeId {
        gui.spawn(Container::new(Vec2::new(width, height)))
    }

    fn placed(gui: &mut Gui, position: Vec2, size: Vec2) -> NodeId {
        let id = gui.spawn(Container::new(size));
        let root = gui.root();
        gui.add_at(root, id, position).unwrap();
        id
    }

    #[test]
    fn test_attach_rules() {
        let mut gui = support::gui();
        let a = container(&mut gui, 100.0, 100.0);
        let b = container(&mut gui, 50.0, 50.0);
        let label = gui.spawn(Label::new("x"));

        gui.add_to(a, b).unwrap();
        assert_eq!(gui.node(b).unwrap().parent(), Some(a));
        assert_eq!(gui.add_to(a, b), Err(GuiError::AlreadyAttached { node: b, parent: a }));
        assert_eq!(gui.add_to(b, a), Err(GuiError::WouldCreateCycle { node: a, parent: b }));
        assert_eq!(gui.add_to(a, a), Err(GuiError::WouldCreateCycle { node: a, parent: a }));
        assert_eq!(gui.add_to(label, a), Err(GuiError::NotAContainer(label)));
        assert_eq!(gui.remove_from(a, label), Err(GuiError::NotAChild { node: label, parent: a }));
    }

    #[test]
    fn test_release_destroys_floating_subtree() {
        let mut gui = support::gui();
        let before = gui.node_count();
        let a = container(&mut gui, 100.0, 100.0);
        let b = container(&mut gui, 50.0, 50.0);
        gui.add_to(a, b).unwrap();

        gui.release(a).unwrap();
        assert!(!gui.contains(a));
        assert!(!gui.contains(b));
        assert_eq!(gui.node_count(), before);
        assert_eq!(gui.release(a), Err(GuiError::UnknownNode(a)));
    }

    #[test]
    fn test_release_ignores_owned_nodes() {
        let mut gui = support::gui();
        let a = container(&mut gui, 10.0, 10.0);
        gui.add(a).unwrap();

        gui.release(a).unwrap();
        assert!(gui.contains(a));
    }

    #[test]
    fn test_remove_destroys_unowned_subtree() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(100.0, 10.0)));
        let label = gui.spawn(Label::new("inside"));
        gui.add_to(panel, label).unwrap();
        gui.add(panel).unwrap();

        gui.remove(panel).unwrap();
        assert!(!gui.contains(panel));
        assert!(!gui.contains(label));
        assert_eq!(gui.add(panel), Err(GuiError::UnknownNode(panel)));
    }

    #[test]
    fn test_registry_keeps_nodes_alive() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(100.0, 10.0)));
        gui.store("settings", panel).unwrap();
        gui.add(panel).unwrap();

        gui.remove(panel).unwrap();
        assert!(gui.contains(panel));
        assert_eq!(gui.get("settings"), Some(panel));

        // can be shown again after removal
        gui.add(panel).unwrap();
        gui.remove(panel).unwrap();

        assert!(gui.unstore("settings"));
        assert!(!gui.unstore("settings"));
        assert!(!gui.contains(panel));
        assert_eq!(gui.get("settings"), None);
    }

    #[test]
    fn test_store_replacement_releases_previous() {
        let mut gui = support::gui();
        let first = container(&mut gui, 10.0, 10.0);
        let second = container(&mut gui, 10.0, 10.0);
        gui.store("slot", first).unwrap();
        gui.store("slot", second).unwrap();

        assert!(!gui.contains(first));
        assert_eq!(gui.get("slot"), Some(second));
    }

    #[test]
    fn test_stored_and_attached_node_needs_both_released() {
        let mut gui = support::gui();
        let a = container(&mut gui, 10.0, 10.0);
        gui.add(a).unwrap();
        gui.store("a", a).unwrap();

        assert!(gui.unstore("a"));
        assert!(gui.contains(a));
        gui.remove(a).unwrap();
        assert!(!gui.contains(a));
    }

    #[test]
    fn test_add_back_inserts_first() {
        let mut gui = support::gui();
        let parent = container(&mut gui, 100.0, 100.0);
        let a = container(&mut gui, 10.0, 10.0);
        let b = container(&mut gui, 10.0, 10.0);
        let c = container(&mut gui, 10.0, 10.0);

        gui.add_to(parent, a).unwrap();
        gui.add_to(parent, b).unwrap();
        gui.add_back(parent, c).unwrap();
        assert_eq!(gui.children(parent), &[c, a, b]);
    }

    #[test]
    fn test_hit_test_prefers_last_added() {
        let mut gui = support::gui();
        let below = placed(&mut gui, Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0));
        let above = placed(&mut gui, Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0));
        let point = Vec2::new(50.0, 50.0);

        assert_eq!(gui.get_at(gui.root(), point), Some(above));

        gui.node_mut(above).unwrap().visible = false;
        assert_eq!(gui.get_at(gui.root(), point), Some(below));

        gui.node_mut(below).unwrap().interactive = false;
        assert_eq!(gui.get_at(gui.root(), point), Some(gui.root()));
    }

    #[test]
    fn test_non_interactive_parent_hides_children() {
        let mut gui = support::gui();
        let parent = placed(&mut gui, Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0));
        let child = container(&mut gui, 50.0, 50.0);
        gui.add_to(parent, child).unwrap();
        let point = Vec2::new(20.0, 20.0);

        assert_eq!(gui.get_at(gui.root(), point), Some(child));
        gui.node_mut(parent).unwrap().interactive = false;
        assert_eq!(gui.get_at(gui.root(), point), Some(gui.root()));
    }

    #[test]
    fn test_bounds_are_half_open() {
        let mut gui = support::gui();
        let id = placed(&mut gui, Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));

        assert!(gui.is_inside(id, Vec2::new(10.0, 10.0)));
        assert!(gui.is_inside(id, Vec2::new(29.9, 29.9)));
        assert!(!gui.is_inside(id, Vec2::new(30.0, 15.0)));
        assert!(!gui.is_inside(id, Vec2::new(15.0, 30.0)));
    }

    #[test]
    fn test_horizontal_layout_with_interval_and_margin() {
        let mut gui = support::gui();
        let row = gui.spawn(Container::new(Vec2::new(300.0, 50.0)).with_orientation(Orientation::Horizontal));
        gui.node_mut(row).unwrap().container_mut().unwrap().interval = 5.0;

        let cells: Vec<NodeId> = (0..3).map(|_| container(&mut gui, 20.0, 10.0)).collect();
        gui.node_mut(cells[1]).unwrap().margin = Insets::new(3.0, 4.0, 0.0, 0.0);
        for &cell in &cells {
            gui.add_to(row, cell).unwrap();
        }

        let positions: Vec<Vec2> = cells.iter().map(|&cell| gui.node(cell).unwrap().position).collect();
        assert_eq!(
            positions,
            vec![Vec2::new(0.0, 0.0), Vec2::new(28.0, 4.0), Vec2::new(53.0, 0.0)]
        );
        // horizontal children keep their width
        assert_eq!(gui.node(cells[0]).unwrap().size, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_vertical_layout_stretches_resizing_children() {
        let mut gui = support::gui();
        let column = gui.spawn(Container::new(Vec2::new(200.0, 300.0)).with_orientation(Orientation::Vertical));
        gui.node_mut(column).unwrap().container_mut().unwrap().padding = Insets::uniform(4.0);
        let stretched = container(&mut gui, 10.0, 10.0);
        let fixed = container(&mut gui, 10.0, 10.0);
        gui.node_mut(fixed).unwrap().resizing = false;

        gui.add_to(column, stretched).unwrap();
        gui.add_to(column, fixed).unwrap();

        assert_eq!(gui.node(stretched).unwrap().size, Vec2::new(192.0, 10.0));
        assert_eq!(gui.node(fixed).unwrap().size, Vec2::new(10.0, 10.0));
        assert_eq!(gui.node(fixed).unwrap().position, Vec2::new(4.0, 14.0));
    }

    #[test]
    fn test_child_resize_propagates_to_fitting_parent() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(100.0, 10.0)));
        let child = container(&mut gui, 50.0, 20.0);
        gui.add_to(panel, child).unwrap();
        assert_eq!(gui.node(panel).unwrap().size.y, 24.0);

        gui.set_size(child, Vec2::new(50.0, 40.0));
        assert_eq!(gui.node(panel).unwrap().size.y, 44.0);
        assert_eq!(gui.node(child).unwrap().size.x, 96.0);
    }

    #[test]
    fn test_scroll_clamps_and_bubbles() {
        let mut gui = support::gui();
        let list = gui.spawn(Container::new(Vec2::new(200.0, 100.0)).with_orientation(Orientation::Vertical));
        let root = gui.root();
        gui.add_at(root, list, Vec2::new(100.0, 100.0)).unwrap();
        for _ in 0..3 {
            let row = container(&mut gui, 200.0, 80.0);
            gui.add_to(list, row).unwrap();
        }
        let scroll = |gui: &Gui| gui.node(list).unwrap().container().unwrap().scroll();

        // the rows cannot scroll, so the wheel reaches the list
        gui.update_mouse_position(150.0, 150.0);
        gui.scroll(-1);
        gui.act(0.016);
        assert_eq!(scroll(&gui), -40.0);

        gui.scroll(-10);
        gui.act(0.016);
        assert_eq!(scroll(&gui), -140.0);

        gui.scroll(10);
        gui.act(0.016);
        assert_eq!(scroll(&gui), 0.0);
    }

    #[test]
    fn test_scroll_offsets_children() {
        let mut gui = support::gui();
        let list = gui.spawn(Container::new(Vec2::new(200.0, 100.0)).with_orientation(Orientation::Vertical));
        gui.add(list).unwrap();
        let rows: Vec<NodeId> = (0..3).map(|_| container(&mut gui, 200.0, 80.0)).collect();
        for &row in &rows {
            gui.add_to(list, row).unwrap();
        }

        gui.node_mut(list).unwrap().container_mut().unwrap().scroll = -60.0;
        assert_eq!(gui.calc_coord(rows[1]), Vec2::new(0.0, 20.0));
        assert_eq!(gui.get_at(gui.root(), Vec2::new(10.0, 10.0)), Some(rows[0]));
        assert_eq!(gui.get_at(gui.root(), Vec2::new(10.0, 30.0)), Some(rows[1]));
    }

    #[test]
    fn test_scroll_bubbles_past_buttons() {
        let mut gui = support::gui();
        let list = gui.spawn(Container::new(Vec2::new(200.0, 100.0)).with_orientation(Orientation::Vertical));
        gui.add(list).unwrap();
        for _ in 0..4 {
            let button = gui.spawn(Button::with_text("row").with_size(Vec2::new(200.0, 40.0)));
            gui.add_to(list, button).unwrap();
        }

        gui.update_mouse_position(10.0, 10.0);
        gui.scroll(-1);
        gui.act(0.016);
        assert_eq!(gui.node(list).unwrap().container().unwrap().scroll(), -40.0);
    }

    #[test]
    fn test_interval_events_fire_through_act() {
        let mut gui = support::gui();
        let shown = container(&mut gui, 10.0, 10.0);
        let hidden = container(&mut gui, 10.0, 10.0);
        gui.add(shown).unwrap();
        gui.add(hidden).unwrap();
        gui.node_mut(hidden).unwrap().visible = false;

        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        gui.listen_interval(shown, 0.1, Rc::new(move |_: &mut Gui| counter.set(counter.get() + 1)), 3)
            .unwrap();
        let counter = Rc::clone(&fired);
        gui.listen_interval(hidden, 0.1, Rc::new(move |_: &mut Gui| counter.set(counter.get() + 100)), -1)
            .unwrap();

        for _ in 0..20 {
            gui.act(0.06);
        }
        assert_eq!(fired.get(), 3);

        let label = gui.spawn(Label::new("x"));
        let result = gui.listen_interval(label, 1.0, Rc::new(|_: &mut Gui| {}), 1);
        assert_eq!(result, Err(GuiError::NotAContainer(label)));
    }

    #[test]
    fn test_interval_rejects_non_positive_period() {
        let mut gui = support::gui();
        let host = container(&mut gui, 10.0, 10.0);
        gui.add(host).unwrap();

        for period in [0.0, -1.0, f32::NAN] {
            let result = gui.listen_interval(host, period, Rc::new(|_: &mut Gui| {}), -1);
            assert_eq!(result, Err(GuiError::InvalidInterval));
        }
        assert!(gui.node(host).unwrap().container().unwrap().intervals.is_empty());
    }

    #[test]
    fn test_interval_callback_can_restructure_tree() {
        let mut gui = support::gui();
        let host = container(&mut gui, 10.0, 10.0);
        let doomed = container(&mut gui, 10.0, 10.0);
        gui.add(host).unwrap();
        gui.add_to(host, doomed).unwrap();

        let action = Rc::new(move |gui: &mut Gui| {
            let _ = gui.remove_from(host, doomed);
        });
        gui.listen_interval(host, 0.01, action, 1).unwrap();
        gui.act(0.016);

        assert!(!gui.contains(doomed));
        assert!(gui.children(host).is_empty());
    }

    #[test]
    fn test_draw_balances_clip_areas_and_skips_hidden() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(100.0, 10.0)));
        let shown = gui.spawn(Label::new("shown"));
        let hidden = gui.spawn(Label::new("hidden"));
        gui.add_to(panel, shown).unwrap();
        gui.add_to(panel, hidden).unwrap();
        gui.node_mut(hidden).unwrap().visible = false;
        gui.add(panel).unwrap();

        let recorder = support::draw(&mut gui);
        let pushes = recorder
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::PushScissor(_)))
            .count();
        let pops = recorder
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::PopScissor))
            .count();

        assert_eq!(pushes, pops);
        assert_eq!(recorder.scissor_depth(), 0);
        assert_eq!(recorder.texts().collect::<Vec<_>>(), vec!["shown"]);
    }
}
