use crate::config::Config;
use crate::constants::{ERROR_FORM_INVALID, SUCCESS_FORM_RESET, SUCCESS_FRIEND_ADDED, SUCCESS_FRIEND_REMOVED};
use crate::logger::Logger;
use crate::pagination::Pager;
use crate::store::{Friend, FriendField, FriendStore, StoreError};
use crate::ui::components::{
    DialogComponent, FriendsFormComponent, FriendsTableComponent, SelectionPanel, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::{LayoutManager, MainAreas};
use crate::validation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use serde_json::json;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// One-shot status bar message, cleared by the next key press
    pub status_message: Option<String>,
}

pub struct AppComponent {
    // Component composition
    table: FriendsTableComponent,
    form: FriendsFormComponent,
    dialog: DialogComponent,

    // The single source of truth for both panes
    store: FriendStore,
    state: AppState,
    logger: Logger,

    mouse_enabled: bool,
    table_width_percent: u16,
    last_areas: Option<MainAreas>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let pager = Pager::new(config.ui.page_size).unwrap_or_default();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            table: FriendsTableComponent::new(pager),
            form: FriendsFormComponent::new(),
            dialog,
            store: FriendStore::new(config.seed.friends.clone()),
            state: AppState::default(),
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            table_width_percent: config.ui.table_width_percent,
            last_areas: None,
            should_quit: false,
        };
        log::info!("App: started with {} friends", app.store.len());
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &FriendStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn table(&self) -> &FriendsTableComponent {
        &self.table
    }

    pub fn form(&self) -> &FriendsFormComponent {
        &self.form
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push the store snapshot to every component
    fn sync_component_data(&mut self) {
        let friends = self.store.friends().to_vec();
        self.table.update_data(friends.clone());
        self.form.update_data(friends);
        self.dialog.page_count = self.table.pager.page_count(self.store.len());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        match focus {
            Focus::Table => {
                self.form.on_blur();
                self.table.on_focus();
            }
            Focus::Form => {
                self.table.on_blur();
                self.form.on_focus();
                // Edit the row the table cursor is on
                if self.form.focused_row != self.table.cursor {
                    self.form.focus_field(self.table.cursor, FriendField::Name);
                }
            }
        }
    }

    fn store_error(context: &str, error: StoreError) -> Action {
        log::error!("{}: {}", context, error);
        Action::ShowDialog(DialogType::Error(format!("{}: {}", context, error)))
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::info!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        // Plain letters are text while the form is focused
        if self.state.focus == Focus::Form {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('L') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Route a key press: dialog first, then global keys, then the focused pane
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.state.focus {
            Focus::Table => self.table.handle_key_events(key),
            Focus::Form => self.form.handle_key_events(key),
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }

        let action = self.table.handle_mouse(mouse);
        if !matches!(action, Action::None) {
            if self.state.focus != Focus::Table {
                self.set_focus(Focus::Table);
            }
            return action;
        }

        if let Some(areas) = self.last_areas {
            if self.state.focus != Focus::Form
                && matches!(mouse.kind, crossterm::event::MouseEventKind::Down(_))
                && LayoutManager::contains(areas.form, mouse.column, mouse.row)
            {
                return Action::Focus(Focus::Form);
            }
        }
        Action::None
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::ToggleSelect(index) => match self.store.toggle_select(index) {
                Ok(_) => {
                    match self.store.selected_index() {
                        Some(selected) => log::info!("Selection: row {} selected", selected),
                        None => log::info!("Selection: row {} deselected", index),
                    }
                    self.sync_component_data();
                    Action::None
                }
                Err(e) => Self::store_error("Select failed", e),
            },
            Action::AddFriend => match self.store.append(Friend::blank()) {
                Ok(friends) => {
                    let last = friends.len() - 1;
                    log::info!("Form: added friend at row {}", last);
                    self.sync_component_data();
                    self.table.move_cursor_to(last);
                    self.form.focus_field(last, FriendField::Name);
                    self.state.status_message = Some(SUCCESS_FRIEND_ADDED.to_string());
                    Action::None
                }
                Err(e) => Self::store_error("Add failed", e),
            },
            Action::RemoveFriend(index) => {
                let name = self.store.get(index).map(|f| f.name.clone());
                match self.store.remove_at(index) {
                    Ok(_) => {
                        log::info!("Form: removed friend '{}' at row {}", name.unwrap_or_default(), index);
                        self.form.remove_errors_at(index);
                        self.sync_component_data();
                        self.state.status_message = Some(SUCCESS_FRIEND_REMOVED.to_string());
                        Action::None
                    }
                    Err(e) => Self::store_error("Remove failed", e),
                }
            }
            Action::UpdateField { index, field, value } => match self.store.update_field(index, field, value) {
                Ok(_) => {
                    self.sync_component_data();
                    Action::None
                }
                Err(e) => Self::store_error("Edit failed", e),
            },
            Action::ResetForm => {
                self.store.reset();
                self.form.clear_errors();
                self.table.pager.first_page();
                self.table.cursor = 0;
                self.form.focus_field(0, FriendField::Name);
                self.sync_component_data();
                log::info!("Form: reset to {} friends", self.store.len());
                self.state.status_message = Some(SUCCESS_FORM_RESET.to_string());
                Action::None
            }
            Action::SubmitForm => self.submit(),
            Action::Focus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                log::debug!("Dialog: showing {:?}", dialog_type);
                // Dialog component will handle the actual dialog setup
                self.dialog.update(action)
            }
            Action::HideDialog | Action::DialogScrollUp | Action::DialogScrollDown => self.dialog.update(action),
            other => {
                // Pagination belongs to the table
                let remaining = self.table.update(other);
                self.dialog.page_count = self.table.pager.page_count(self.store.len());
                remaining
            }
        }
    }

    fn submit(&mut self) -> Action {
        let errors = validation::validate_all(self.store.friends());
        let invalid = validation::has_errors(&errors);
        self.form.set_errors(errors);

        if invalid {
            log::warn!("Form: submit rejected by validation");
            self.form.focus_first_error();
            return Action::ShowDialog(DialogType::Error(ERROR_FORM_INVALID.to_string()));
        }

        let values = json!({ "friends": self.store.friends() });
        match serde_json::to_string_pretty(&values) {
            Ok(pretty) => {
                log::info!("Form: submitted {} friends", self.store.len());
                Action::ShowDialog(DialogType::Submitted(pretty))
            }
            Err(e) => {
                log::error!("Form: failed to serialize values: {}", e);
                Action::ShowDialog(DialogType::Error(e.to_string()))
            }
        }
    }

    /// Run an action and everything it leads to
    pub fn dispatch(&mut self, mut action: Action) {
        while !matches!(action, Action::None) {
            action = self.handle_app_action(action);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.state.status_message = None;
                self.route_key(key)
            }
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let selection_height = SelectionPanel::height(self.store.friends());
        let areas = LayoutManager::main_layout(rect, self.table_width_percent, selection_height);
        self.last_areas = Some(areas);

        self.table.render(f, areas.table);
        SelectionPanel::render(f, areas.selection, self.store.friends());
        self.form.render(f, areas.form);
        StatusBar::render(f, areas.status, self.state.focus, self.state.status_message.as_deref());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
