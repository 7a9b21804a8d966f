//! [`FormHost`] backed by the real signup `<form>`.

use leptos::html::Form;
use leptos::prelude::*;
use widgets::wizard::FormHost;

use super::location;

/// Browser effects for the wizard: `window.confirm`, native form submission,
/// and navigation.
pub struct BrowserHost {
    form: NodeRef<Form>,
}

impl BrowserHost {
    pub fn new(form: NodeRef<Form>) -> Self {
        Self { form }
    }
}

impl FormHost for BrowserHost {
    fn confirm(&mut self, message: &str) -> bool {
        location::confirm(message)
    }

    fn submit(&mut self) {
        #[cfg(feature = "csr")]
        {
            // `submit()` skips the submit event, so the wizard's own handler
            // does not run a second time.
            match self.form.get_untracked() {
                Some(form) => {
                    if let Err(e) = form.submit() {
                        leptos::logging::warn!("signup form submit failed: {e:?}");
                    }
                }
                None => leptos::logging::warn!("signup form is not mounted"),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.form;
        }
    }

    fn navigate(&mut self, href: &str) {
        location::set_href(href);
    }
}
