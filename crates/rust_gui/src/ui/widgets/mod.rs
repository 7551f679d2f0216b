//! Widget set
//!
//! Leaf widgets (labels, images, check boxes, track bars), containers
//! (plain, panel, page switcher) and composites that own child nodes
//! (buttons, text boxes, binding boxes, labelled check boxes).

pub mod bind_box;
pub mod button;
pub mod check_box;
pub mod container;
pub mod image;
pub mod label;
pub mod pages;
pub mod panel;
pub mod text_box;
pub mod track_bar;

pub use bind_box::InputBindBox;
pub use button::{Button, RichButton};
pub use check_box::{CheckBox, FullCheckBox};
pub use container::Container;
pub use image::Image;
pub use label::Label;
pub use pages::PagesControl;
pub use panel::{Panel, DEFAULT_PADDING};
pub use text_box::TextBox;
pub use track_bar::TrackBar;
