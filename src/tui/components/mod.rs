// Components module - reusable UI building blocks
//
// Shell components are rendered around the page on every frame:
// - Nav bar: brand, section links or menu button, theme indicator
// - Menu panel: compact-layout navigation overlay
// - Status bar: current section and key hints
//
// Each component is a focused, single-responsibility module.

pub mod formatters;
pub mod menu_panel;
pub mod nav_bar;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
