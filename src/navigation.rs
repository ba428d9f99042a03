use crate::types::View;

/// Which view is on screen, plus a mount generation.
///
/// Every `navigate` call bumps the generation, including a navigation to the
/// view that is already active. The UI keys the mounted view on
/// [`Navigator::mount_key`], so each call yields a freshly initialized view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: View,
    mount: u64,
}

impl Navigator {
    pub fn new(start: View) -> Self {
        Self {
            current: start,
            mount: 0,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn mount_key(&self) -> u64 {
        self.mount
    }

    pub fn is_active(&self, view: View) -> bool {
        self.current == view
    }

    pub fn navigate(&mut self, target: View) {
        tracing::debug!(from = %self.current, to = %target, "navigate");
        self.current = target;
        self.mount = self.mount.wrapping_add(1);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(View::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_requested_view() {
        assert_eq!(Navigator::default().current(), View::Dashboard);
        assert_eq!(Navigator::new(View::Settings).current(), View::Settings);
    }

    #[test]
    fn test_navigate_replaces_active_view() {
        let mut nav = Navigator::default();
        for target in View::ALL {
            nav.navigate(target);
            assert_eq!(nav.current(), target);
            assert!(nav.is_active(target));
        }
    }

    #[test]
    fn test_every_navigation_is_a_new_mount() {
        let mut nav = Navigator::new(View::Chat);
        let first = nav.mount_key();
        nav.navigate(View::Chat);
        let second = nav.mount_key();
        nav.navigate(View::Workspaces);
        assert_ne!(first, second);
        assert_ne!(second, nav.mount_key());
        assert_eq!(nav.current(), View::Workspaces);
    }
}
