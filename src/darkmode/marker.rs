//! The UI marker: a class on the page's root container that the stylesheet
//! keys dark styling off.

use std::cell::Cell;

/// Presence/absence flag on the root visual container.
pub trait ThemeMarker {
    fn is_set(&self) -> bool;

    fn set(&self, on: bool);

    /// Flip the marker and return the new state.
    fn toggle(&self) -> bool {
        let on = !self.is_set();
        self.set(on);
        on
    }
}

impl<T: ThemeMarker + ?Sized> ThemeMarker for &T {
    fn is_set(&self) -> bool {
        (**self).is_set()
    }

    fn set(&self, on: bool) {
        (**self).set(on)
    }

    fn toggle(&self) -> bool {
        (**self).toggle()
    }
}

/// Marker held in memory. Starts unset.
#[derive(Debug, Default)]
pub struct MemoryMarker {
    on: Cell<bool>,
}

impl MemoryMarker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeMarker for MemoryMarker {
    fn is_set(&self) -> bool {
        self.on.get()
    }

    fn set(&self, on: bool) {
        self.on.set(on);
    }
}

/// Class on `document.body`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BodyClassMarker {
    class: String,
}

#[cfg(target_arch = "wasm32")]
impl BodyClassMarker {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    fn class_list(&self) -> Option<web_sys::DomTokenList> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.class_list())
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeMarker for BodyClassMarker {
    fn is_set(&self) -> bool {
        self.class_list()
            .map(|list| list.contains(&self.class))
            .unwrap_or(false)
    }

    fn set(&self, on: bool) {
        let Some(list) = self.class_list() else {
            tracing::debug!("No document body, skipping {} class", self.class);
            return;
        };
        let result = if on {
            list.add_1(&self.class)
        } else {
            list.remove_1(&self.class)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to update body class {}: {:?}", self.class, e);
        }
    }

    fn toggle(&self) -> bool {
        match self.class_list() {
            Some(list) => list.toggle(&self.class).unwrap_or_else(|e| {
                tracing::warn!("Failed to toggle body class {}: {:?}", self.class, e);
                list.contains(&self.class)
            }),
            None => false,
        }
    }
}
