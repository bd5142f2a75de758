use log::Level;

pub const BRAND_NAME: &str = "Obsidian Media";

pub const WHATSAPP_HOST: &str = "wa.me";
// Country code 91 followed by the business line, no separators.
pub const WHATSAPP_NUMBER: &str = "918087473770";

pub const DISPLAY_PHONE: &str = "+91 8087473770";
pub const CONTACT_EMAIL: &str = "info@obsidianmedia.com";
pub const LOCATION: &str = "Maharashtra, India";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/wtfobsidion?igsh=emJiNmxxYnFtZ3Zp";
pub const INSTAGRAM_HANDLE: &str = "@wtfobsidian";
pub const FOUNDED_YEAR: u16 = 2026;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn tel_href() -> String {
    format!("tel:+{}", WHATSAPP_NUMBER)
}
