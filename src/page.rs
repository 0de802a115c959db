use url::Url;

/// The browser-page collaborator surface.
///
/// Everything in this crate runs inside discrete page events (load,
/// click) that run to completion; the four operations here are the only
/// effects it needs from the host page. In a browser these map to
/// `location.hash`, `history.replaceState`, `alert`, and assigning
/// `location.href`.
pub trait Page {
    /// Current location fragment, with or without the leading `#`.
    fn fragment(&self) -> Option<String>;

    /// Remove the fragment from the visible URL without reloading the
    /// page (history replacement).
    fn strip_fragment(&self);

    /// Blocking user-facing alert.
    fn notify(&self, message: &str);

    /// Full-page navigation to `url`.
    ///
    /// In a real browser this terminates the page's execution context;
    /// in-process implementations record the target and return.
    fn navigate(&self, url: &Url);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use url::Url;

    use super::Page;

    /// Records page effects for assertions.
    #[derive(Default)]
    pub(crate) struct RecordingPage {
        pub(crate) fragment: Option<String>,
        pub(crate) stripped: RefCell<bool>,
        pub(crate) notices: RefCell<Vec<String>>,
        pub(crate) navigations: RefCell<Vec<Url>>,
    }

    impl RecordingPage {
        pub(crate) fn without_fragment() -> Self {
            Self::default()
        }

        pub(crate) fn with_fragment(fragment: &str) -> Self {
            Self {
                fragment: Some(fragment.to_string()),
                ..Self::default()
            }
        }

        pub(crate) fn last_navigation(&self) -> Option<Url> {
            self.navigations.borrow().last().cloned()
        }
    }

    impl Page for RecordingPage {
        fn fragment(&self) -> Option<String> {
            self.fragment.clone()
        }

        fn strip_fragment(&self) {
            *self.stripped.borrow_mut() = true;
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn navigate(&self, url: &Url) {
            self.navigations.borrow_mut().push(url.clone());
        }
    }
}
