use yew::prelude::*;

use crate::catalog::Icon;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Layout => "▦",
        Icon::Code => "</>",
        Icon::Newspaper => "📰",
        Icon::BarChart => "📊",
        Icon::TrendingUp => "📈",
        Icon::Award => "🏆",
        Icon::Globe => "🌐",
        Icon::Phone => "📞",
        Icon::Zap => "⚡",
        Icon::Mail => "✉",
        Icon::MapPin => "📍",
        Icon::Instagram => "📷",
        Icon::Check => "✓",
        Icon::ArrowRight => "→",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            { glyph(props.icon) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SERVICES, VISIONS, WHY_CHOOSE_US};

    #[test]
    fn every_catalog_icon_has_a_glyph() {
        let icons = SERVICES
            .iter()
            .map(|s| s.icon)
            .chain(VISIONS.iter().map(|v| v.icon))
            .chain(WHY_CHOOSE_US.iter().map(|r| r.icon));
        for icon in icons {
            assert!(!glyph(icon).is_empty(), "{:?}", icon);
        }
    }
}
