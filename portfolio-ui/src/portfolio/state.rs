use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use portfolio_types::NavLinks;

/// Navigation links backed by one signal holding the active target.
/// A single slot means at most one link can ever render as active.
pub struct SignalNavLinks {
    targets: Vec<String>,
    active: Signal<Option<String>>,
}

impl SignalNavLinks {
    pub fn new<'a>(targets: impl IntoIterator<Item = &'a str>, active: Signal<Option<String>>) -> Self {
        Self {
            targets: targets.into_iter().map(ToString::to_string).collect(),
            active,
        }
    }
}

impl NavLinks for SignalNavLinks {
    fn targets(&self) -> Vec<String> {
        self.targets.clone()
    }

    fn set_active(&mut self, target: &str, active: bool) {
        let is_current = self.active.peek().as_deref() == Some(target);
        if active && !is_current {
            self.active.set(Some(target.to_string()));
        } else if !active && is_current {
            self.active.set(None);
        }
    }
}
