use leptos::prelude::*;

use super::display::{DisplayState, StyleCategory};
use super::event::{PluginMessage, StatusEvent};

/// Reactive view-model behind the navbar indicator.
///
/// Holds the current [`DisplayState`] as three signals so the label text, the
/// CSS class and the visibility can be bound independently. Only the projector
/// writes them; views get read-only handles.
#[derive(Debug, Clone, Copy)]
pub struct StatusProjector {
    label: RwSignal<String>,
    style_category: RwSignal<StyleCategory>,
    visible: RwSignal<bool>,
}

impl StatusProjector {
    pub fn new(preference_enabled: bool) -> Self {
        let initial = DisplayState::initial(preference_enabled);
        Self {
            label: RwSignal::new(initial.label),
            style_category: RwSignal::new(initial.style_category),
            visible: RwSignal::new(initial.visible),
        }
    }

    /// Reset to the waiting state.
    pub fn initialize(&self, preference_enabled: bool) {
        self.publish(DisplayState::initial(preference_enabled));
    }

    pub fn on_status_event(&self, event: &StatusEvent) {
        let mut next = self.snapshot();
        if next.apply(event) {
            log::debug!("IoT Hub status -> {:?}", next.style_category);
            self.publish(next);
        } else {
            log::debug!("Ignoring status event without a recognised status: {:?}", event.status);
        }
    }

    pub fn on_preference_changed(&self, preference_enabled: bool) {
        if self.visible.get_untracked() != preference_enabled {
            self.visible.set(preference_enabled);
        }
    }

    /// Entry point for pushed plugin messages; other plugins are ignored.
    pub fn on_plugin_message(&self, message: PluginMessage) {
        if !message.is_for_relay() {
            return;
        }
        self.on_status_event(&StatusEvent::from(message.data));
    }

    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            label: self.label.get_untracked(),
            style_category: self.style_category.get_untracked(),
            visible: self.visible.get_untracked(),
        }
    }

    pub fn label(&self) -> ReadSignal<String> {
        self.label.read_only()
    }

    pub fn style_category(&self) -> ReadSignal<StyleCategory> {
        self.style_category.read_only()
    }

    pub fn visible(&self) -> ReadSignal<bool> {
        self.visible.read_only()
    }

    // Only touch signals whose value actually changed so bound views
    // are not re-rendered for repeated identical events.
    fn publish(&self, next: DisplayState) {
        if self.label.with_untracked(|l| *l != next.label) {
            self.label.set(next.label);
        }
        if self.style_category.get_untracked() != next.style_category {
            self.style_category.set(next.style_category);
        }
        if self.visible.get_untracked() != next.visible {
            self.visible.set(next.visible);
        }
    }
}
