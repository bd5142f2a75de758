use yew::prelude::*;

use crate::catalog::{footer_services, Icon, NAV_LINKS};
use crate::components::icon::IconGlyph;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="nav-logo">
                        <span class="logo-mark small">{"O"}</span>
                        <span class="logo-text">{"Obsidian "}<span class="accent">{"Media"}</span></span>
                    </div>
                    <p>{"We create difference. Brand builders for the digital age, focused on ROI and sustainable growth."}</p>
                    <p class="copyright">
                        { format!("© {} {}. All rights reserved.", config::FOUNDED_YEAR, config::BRAND_NAME) }
                    </p>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.name}><a href={link.target}>{ link.name }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for footer_services().iter().map(|service| html! {
                            <li key={service.title}><a href="#services">{ service.title }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Connect"}</h4>
                    <ul>
                        <li>
                            <IconGlyph icon={Icon::Phone} />
                            <a href={config::tel_href()}>{ config::DISPLAY_PHONE }</a>
                        </li>
                        <li>
                            <IconGlyph icon={Icon::Instagram} />
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                { config::INSTAGRAM_HANDLE }
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}
