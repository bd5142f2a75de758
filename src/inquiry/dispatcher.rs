use log::{info, warn};
use thiserror::Error;

use crate::config::{WHATSAPP_HOST, WHATSAPP_NUMBER};

#[derive(Error, Debug, PartialEq)]
pub enum DispatchError {
    #[error("no browser window available")]
    NoWindow,

    #[error("browser refused to open a new window")]
    Blocked,

    #[error("window.open failed: {0}")]
    Js(String),
}

/// Something that can show a URL outside the current page.
pub trait ExternalOpener {
    fn open_external(&self, url: &str) -> Result<(), DispatchError>;
}

impl<F> ExternalOpener for F
where
    F: Fn(&str) -> Result<(), DispatchError>,
{
    fn open_external(&self, url: &str) -> Result<(), DispatchError> {
        self(url)
    }
}

/// Opens URLs in a new tab so the site itself stays open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserOpener;

impl ExternalOpener for BrowserOpener {
    fn open_external(&self, url: &str) -> Result<(), DispatchError> {
        let window = web_sys::window().ok_or(DispatchError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(DispatchError::Blocked),
            Err(e) => Err(DispatchError::Js(format!("{:?}", e))),
        }
    }
}

/// Percent-encodes every byte outside `A-Z a-z 0-9 - . _ ~`.
pub fn encode_message(message: &str) -> String {
    urlencoding::encode(message).into_owned()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedInquiry {
    pub phone: &'static str,
    /// Already percent-encoded.
    pub text: String,
}

impl ComposedInquiry {
    pub fn new(message: &str) -> Self {
        Self {
            phone: WHATSAPP_NUMBER,
            text: encode_message(message),
        }
    }

    pub fn to_url(&self) -> String {
        format!("https://{}/{}?text={}", WHATSAPP_HOST, self.phone, self.text)
    }
}

/// `https://wa.me/<number>?text=<encoded message>`
pub fn deep_link(message: &str) -> String {
    ComposedInquiry::new(message).to_url()
}

pub struct Dispatcher<O> {
    opener: O,
}

impl Dispatcher<BrowserOpener> {
    pub fn browser() -> Self {
        Self::new(BrowserOpener)
    }
}

impl<O: ExternalOpener> Dispatcher<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    /// Fire-and-forget: a blocked popup or missing window is logged, never returned.
    pub fn dispatch(&self, message: &str) {
        let url = deep_link(message);
        info!(
            "Opening WhatsApp chat with {} ({} chars of message)",
            WHATSAPP_NUMBER,
            message.chars().count()
        );
        if let Err(e) = self.opener.open_external(&url) {
            warn!("Inquiry was not delivered: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::composer::{compose_from_draft, compose_from_plan};
    use crate::inquiry::draft::InquiryDraft;
    use crate::catalog::{ServiceOption, PRICING_PLANS};
    use std::cell::RefCell;

    fn text_param(url: &str) -> String {
        let (_, query) = url.split_once("?text=").expect("url has a text parameter");
        urlencoding::decode(query).expect("valid utf-8").into_owned()
    }

    #[test]
    fn url_has_fixed_shape() {
        assert_eq!(
            deep_link("Hi there"),
            "https://wa.me/918087473770?text=Hi%20there"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let encoded = encode_message("a&b=c%d#e\nf");
        assert_eq!(encoded, "a%26b%3Dc%25d%23e%0Af");
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn control_and_unicode_characters_encode() {
        assert_eq!(encode_message("\u{0}"), "%00");
        assert_eq!(encode_message("₹"), "%E2%82%B9");
        assert_eq!(encode_message(""), "");
    }

    #[test]
    fn draft_scenario_decodes_to_composed_message() {
        let draft = InquiryDraft {
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone: "9999999999".to_string(),
            service: ServiceOption::WebsiteDevelopment,
            message: "Need a site".to_string(),
        };
        let message = compose_from_draft(&draft);
        let url = deep_link(&message);

        assert!(url.starts_with("https://wa.me/918087473770?text="));
        assert_eq!(text_param(&url), message);
    }

    #[test]
    fn every_plan_targets_same_number() {
        for plan in PRICING_PLANS {
            let inquiry = ComposedInquiry::new(&compose_from_plan(plan.name));
            assert_eq!(inquiry.phone, WHATSAPP_NUMBER);
            assert!(inquiry.to_url().starts_with("https://wa.me/918087473770?text="));
        }
    }

    #[test]
    fn dispatch_opens_once_with_built_url() {
        let opened = RefCell::new(Vec::new());
        let dispatcher = Dispatcher::new(|url: &str| -> Result<(), DispatchError> {
            opened.borrow_mut().push(url.to_string());
            Ok(())
        });

        dispatcher.dispatch(&compose_from_plan("Neo Package"));

        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            text_param(&opened[0]),
            "*Inquiry regarding Neo Package*\n\nHi Obsidian Media, I'm interested in the Neo Package. Please provide more details."
        );
    }

    #[test]
    fn dispatch_swallows_opener_failure() {
        let attempts = RefCell::new(0);
        let dispatcher = Dispatcher::new(|_: &str| -> Result<(), DispatchError> {
            *attempts.borrow_mut() += 1;
            Err(DispatchError::Blocked)
        });

        dispatcher.dispatch("hello");
        dispatcher.dispatch("hello");

        assert_eq!(*attempts.borrow(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_encoding_round_trips(message in any::<String>()) {
            let encoded = encode_message(&message);
            let decoded = urlencoding::decode(&encoded).expect("valid utf-8");
            prop_assert_eq!(decoded.as_ref(), message.as_str());
        }

        #[test]
        fn prop_encoded_text_is_query_safe(message in any::<String>()) {
            let encoded = encode_message(&message);
            prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)),
                "unsafe byte in {}", encoded);
        }

        #[test]
        fn prop_destination_never_changes(message in any::<String>()) {
            let url = deep_link(&message);
            let prefix = format!("https://{}/{}?text=", WHATSAPP_HOST, WHATSAPP_NUMBER);
            prop_assert!(url.starts_with(&prefix));
            prop_assert_eq!(url.matches("?text=").count(), 1);
        }
    }
}
