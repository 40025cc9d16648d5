//! Presentational primitives for the portfolio desktop shell.
//!
//! Components here own no state. They emit the stable `data-ui-*` attribute contract the
//! desktop stylesheet targets and forward DOM events to optional callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, LauncherMenu,
    MenuItem, PopoverSurface, ResizeHandle, TaskbarButton, TaskbarSection, TrayButton,
    WindowBody, WindowControlButton, WindowFrame, WindowTitleBar,
};
