use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Finder,
    Docs,
    Chat,
    Community,
}

impl View {
    pub const ALL: [View; 4] = [View::Finder, View::Docs, View::Chat, View::Community];

    pub fn id(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Docs => "docs",
            Self::Chat => "chat",
            Self::Community => "community",
        }
    }

    /// Unknown identifiers resolve to the default view.
    pub fn from_id(id: &str) -> Self {
        match id {
            "finder" => Self::Finder,
            "docs" => Self::Docs,
            "chat" => Self::Chat,
            "community" => Self::Community,
            other => {
                tracing::debug!(view = other, "unknown view id, using finder");
                Self::default()
            }
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Finder => keys::NAV_FINDER,
            Self::Docs => keys::NAV_DOCS,
            Self::Chat => keys::NAV_CHAT,
            Self::Community => keys::NAV_COMMUNITY,
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn active(&self) -> View {
        self.active
    }

    /// Returns the view that was active before, if it changed.
    pub fn set(&mut self, view: View) -> Option<View> {
        if view == self.active {
            return None;
        }
        let previous = std::mem::replace(&mut self.active, view);
        tracing::debug!(from = previous.id(), to = view.id(), "view switched");
        Some(previous)
    }

    pub fn set_from_id(&mut self, id: &str) -> Option<View> {
        self.set(View::from_id(id))
    }

    pub fn shows_alerts(&self) -> bool {
        self.active == View::Finder
    }
}
