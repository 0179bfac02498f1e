// Central application state shared by the app submodules.
// - Stores the tab collection, selection, session flag, and notice state.
// - Owns the bridge handle all external calls go through.
// - Exposes cross-cutting helpers used by event handling and rendering code.
mod keys;
mod session;
mod tabs;

use std::{env, io, path::PathBuf};

use crate::{
    bridge::ScriptBridge,
    model::{Notice, Rename, ScriptTab},
};

pub struct App {
    bridge: Box<dyn ScriptBridge>,
    start_dir: PathBuf,
    pub(crate) tabs: Vec<ScriptTab>,
    pub(crate) selected: usize,
    pub(crate) attached: bool,
    pub(crate) status_message: String,
    pub(crate) notice: Option<Notice>,
    pub(crate) rename: Option<Rename>,
    pub(crate) show_keybinds: bool,
    should_quit: bool,
}

impl App {
    pub fn new(bridge: Box<dyn ScriptBridge>, start_dir: Option<PathBuf>) -> io::Result<Self> {
        let start_dir = match start_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let mut app = Self {
            bridge,
            start_dir,
            tabs: Vec::new(),
            selected: 0,
            attached: false,
            status_message: String::new(),
            notice: None,
            rename: None,
            show_keybinds: false,
            should_quit: false,
        };
        app.add_tab();
        app.status_message = "Detached. Ctrl+a attaches, F1 shows keybinds.".to_string();
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_keybinds(&mut self) {
        self.show_keybinds = !self.show_keybinds;
    }

    pub fn hide_keybinds(&mut self) {
        self.show_keybinds = false;
    }

    pub(crate) fn raise_notice(&mut self, notice: Notice) {
        self.status_message = notice.body.clone();
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn active_tab(&self) -> Option<&ScriptTab> {
        self.tabs.get(self.selected)
    }

    pub(crate) fn active_tab_mut(&mut self) -> Option<&mut ScriptTab> {
        self.tabs.get_mut(self.selected)
    }
}
