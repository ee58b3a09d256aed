//! Application state management for the Little Lemon client
//!
//! This module contains the main application state: it owns the menu cache,
//! the displayed menu, the filter state and the user profile, handles
//! keyboard input and decides when the cache is queried again.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::cache::MenuCache;
use crate::cli::StartupConfig;
use crate::data::{Category, FilterState, MenuItem, MenuSource};
use crate::profile::{Notification, OnboardingForm, ProfileField, UserProfile};

/// How long search input must be idle before it is committed to a query
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the menu is read or fetched
    Loading,
    /// First name and email entry for a user who has not onboarded
    Onboarding,
    /// Hero header, search bar, category chips and menu list
    Menu,
    /// Profile details and notification preferences
    Profile,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Index of currently selected item in the menu list
    pub selected_index: usize,
    /// Menu currently on screen; a copy of the last successful query
    pub menu: Vec<MenuItem>,
    /// Filter used by the last issued query
    pub filter: FilterState,
    /// Text in the search bar, committed to `filter.text` after the debounce
    pub search_bar_text: String,
    /// Whether keystrokes go to the search bar
    pub search_active: bool,
    /// Profile of the current user, as last saved
    pub profile: UserProfile,
    /// Copy of `profile` being edited on the profile view
    pub draft: UserProfile,
    /// Index into `ProfileField::all()` of the highlighted field
    pub profile_field: usize,
    /// Whether keystrokes go to the highlighted profile field
    pub editing: bool,
    /// Inputs of the onboarding view
    pub onboarding: OnboardingForm,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// When the menu was loaded
    pub last_refresh: Option<DateTime<Local>>,
    /// Deadline after which the search bar text is committed
    search_deadline: Option<Instant>,
    /// Whether a filter was given on the command line
    startup_filter: bool,
    /// Local menu table
    cache: MenuCache,
}

impl App {
    /// Creates a new App around an initialized cache and startup settings
    pub fn new(cache: MenuCache, config: StartupConfig) -> Self {
        let startup_filter = config.has_filter();
        Self {
            state: AppState::Loading,
            selected_index: 0,
            menu: Vec::new(),
            search_bar_text: config.initial_filter.text.clone(),
            filter: config.initial_filter,
            search_active: false,
            draft: config.profile.clone(),
            profile: config.profile,
            profile_field: 0,
            editing: false,
            onboarding: OnboardingForm::default(),
            should_quit: false,
            show_help: false,
            last_refresh: None,
            search_deadline: None,
            startup_filter,
            cache,
        }
    }

    /// Loads the menu (from the table, or from `source` on a miss)
    ///
    /// A startup filter is applied straight away. If the fetched menu could
    /// not be saved the filter runs over the fetched items instead of the
    /// empty table. Ends in Onboarding for a user who has not onboarded,
    /// otherwise in Menu, even if nothing could be loaded.
    pub async fn load_menu<S: MenuSource>(&mut self, source: &S) {
        self.menu = self.cache.load(source).await;
        self.last_refresh = Some(Local::now());

        if self.startup_filter {
            if self.cache.has_rows() {
                self.run_query();
            } else {
                let filter = &self.filter;
                self.menu.retain(|item| filter.matches(item));
            }
        }

        self.selected_index = 0;
        self.state = if self.profile.is_onboarding_complete {
            AppState::Menu
        } else {
            AppState::Onboarding
        };
    }

    /// Re-issues the filtered query and replaces the displayed menu.
    ///
    /// A failed query leaves the current menu on screen.
    pub fn run_query(&mut self) {
        if let Some(items) = self.cache.query(&self.filter) {
            self.menu = items;
            if self.selected_index >= self.menu.len() {
                self.selected_index = 0;
            }
        }
    }

    /// Returns the currently selected menu item, if any
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.menu.get(self.selected_index)
    }

    /// The highlighted field on the profile view
    pub fn selected_field(&self) -> ProfileField {
        ProfileField::all()[self.profile_field % ProfileField::all().len()]
    }

    /// Whether the draft differs from the saved profile
    pub fn has_unsaved_changes(&self) -> bool {
        self.draft != self.profile
    }

    /// Whether search input is waiting for its debounce to elapse
    pub fn search_pending(&self) -> bool {
        self.search_deadline.is_some()
    }

    /// Commits debounced search input once its deadline has passed
    ///
    /// Called from the event loop on every iteration.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.search_deadline else {
            return;
        };
        if now < deadline {
            return;
        }

        self.search_deadline = None;
        if self.filter.text != self.search_bar_text {
            self.filter.text = self.search_bar_text.clone();
            debug!(text = %self.filter.text, "Search input committed");
            self.run_query();
        }
    }

    fn schedule_search(&mut self) {
        self.search_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    fn toggle_category(&mut self, category: Category) {
        self.filter.toggle(category);
        self.run_query();
    }

    fn open_profile(&mut self) {
        self.draft = self.profile.clone();
        self.profile_field = 0;
        self.editing = false;
        self.state = AppState::Profile;
    }

    fn save_profile(&mut self) {
        self.draft.update_initials();
        self.profile = self.draft.clone();
        info!("Profile changes saved");
    }

    fn log_out(&mut self) {
        self.profile.log_out();
        self.draft = self.profile.clone();
        self.onboarding = OnboardingForm::default();
        self.editing = false;
        self.state = AppState::Onboarding;
        info!("Logged out");
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit the application (`Esc` also quits from the menu)
    /// - `Up`/`k`, `Down`/`j`: Move selection in the menu list
    /// - `/`: Focus the search bar (`Enter`/`Esc` leave it)
    /// - `1`-`3`: Toggle the Starters, Mains, Desserts chips
    /// - `0`: Clear all category chips
    /// - `p`: Open the profile (`Esc` goes back)
    /// - In Profile: `Up`/`Down` pick a field, `Enter` edits it, `1`-`4`
    ///   toggle email notifications, `s` saves, `d` discards, `x` logs out
    /// - In Onboarding: `Tab` switches field, `Enter` continues, `Esc` quits
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Onboarding => self.handle_onboarding_key(key_event),
            AppState::Menu if self.search_active => self.handle_search_key(key_event),
            AppState::Menu => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Char('/') => {
                    self.search_active = true;
                }
                KeyCode::Char('1') => self.toggle_category(Category::Starters),
                KeyCode::Char('2') => self.toggle_category(Category::Mains),
                KeyCode::Char('3') => self.toggle_category(Category::Desserts),
                KeyCode::Char('0') => {
                    self.filter.clear_categories();
                    self.run_query();
                }
                KeyCode::Char('p') => self.open_profile(),
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Profile if self.editing => self.handle_field_key(key_event),
            AppState::Profile => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = AppState::Menu;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let count = ProfileField::all().len();
                    self.profile_field = (self.profile_field + count - 1) % count;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.profile_field = (self.profile_field + 1) % ProfileField::all().len();
                }
                KeyCode::Enter => {
                    self.editing = true;
                }
                KeyCode::Char('1') => self.draft.toggle(Notification::OrderStatuses),
                KeyCode::Char('2') => self.draft.toggle(Notification::PasswordChanges),
                KeyCode::Char('3') => self.draft.toggle(Notification::SpecialOffers),
                KeyCode::Char('4') => self.draft.toggle(Notification::Newsletter),
                KeyCode::Char('s') => self.save_profile(),
                KeyCode::Char('d') => {
                    self.draft = self.profile.clone();
                }
                KeyCode::Char('x') => self.log_out(),
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    fn handle_onboarding_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.onboarding.switch_focus();
            }
            KeyCode::Enter => match self.onboarding.to_profile() {
                Some(profile) => {
                    self.profile = profile;
                    self.draft = self.profile.clone();
                    self.state = AppState::Menu;
                    info!("Onboarding complete");
                }
                None => self.onboarding.switch_focus(),
            },
            KeyCode::Backspace => {
                self.onboarding.focused_mut().pop();
            }
            KeyCode::Char(c) => {
                self.onboarding.focused_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key_event: KeyEvent) {
        let field = self.selected_field();
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.draft.update_initials();
                self.editing = false;
            }
            KeyCode::Backspace => {
                self.draft.field_mut(field).pop();
            }
            KeyCode::Char(c) => {
                self.draft.field_mut(field).push(c);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_active = false;
            }
            KeyCode::Backspace => {
                if self.search_bar_text.pop().is_some() {
                    self.schedule_search();
                }
            }
            KeyCode::Char(c) => {
                self.search_bar_text.push(c);
                self.schedule_search();
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {}
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.menu.len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.menu.len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }
}
