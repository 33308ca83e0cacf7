//! Active-view selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Deadlines,
    Gpa,
    Notes,
}

impl View {
    /// Tab order.
    pub const ALL: [View; 4] = [View::Home, View::Deadlines, View::Gpa, View::Notes];

    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Deadlines => "deadlines",
            View::Gpa => "gpa",
            View::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Deadlines => "Deadline Tracker",
            View::Gpa => "GPA Calculator",
            View::Notes => "Notes",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        View::ALL
            .into_iter()
            .find(|v| v.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownView(s.to_string()))
    }
}

/// A feature card on the home view; selecting it switches to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: View,
}

pub const HOME_CARDS: [HomeCard; 3] = [
    HomeCard {
        title: "Deadline Tracker",
        description: "Never miss an assignment deadline again. Track all your submissions with smart reminders.",
        target: View::Deadlines,
    },
    HomeCard {
        title: "GPA Calculator",
        description: "Calculate your CGPA on a 10-point scale. Add subjects dynamically and track your academic progress.",
        target: View::Gpa,
    },
    HomeCard {
        title: "Notes Sharing",
        description: "Access semester-wise study materials and notes shared by the community.",
        target: View::Notes,
    },
];

/// Which view is showing, plus the compact-menu flag.
#[derive(Debug, Clone)]
pub struct Shell<C: Clock = SystemClock> {
    clock: C,
    active: View,
    menu_open: bool,
}

impl Default for Shell<SystemClock> {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl Shell<SystemClock> {
    pub fn new(initial: View) -> Self {
        Self::with_clock(SystemClock, initial)
    }
}

impl<C: Clock> Shell<C> {
    pub fn with_clock(clock: C, initial: View) -> Self {
        Self {
            clock,
            active: initial,
            menu_open: false,
        }
    }

    pub fn active_view(&self) -> View {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Switch views. Always succeeds and closes the menu.
    pub fn set_active_view(&mut self, view: View) -> Event {
        let from = self.active;
        self.active = view;
        self.menu_open = false;
        info!(%from, to = %view, "view changed");
        Event::ViewChanged {
            from,
            to: view,
            at: self.clock.now(),
        }
    }

    /// Follow a home card (1-based, as numbered on screen).
    pub fn open_card(&mut self, number: usize) -> Option<Event> {
        let card = number.checked_sub(1).and_then(|i| HOME_CARDS.get(i))?;
        Some(self.set_active_view(card.target))
    }
}
