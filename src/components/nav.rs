use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::NAV_LINKS;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // No prevent_default here, the anchor still has to scroll to its section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="top-nav glass">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"O"}</span>
                    <span class="logo-text">{"Obsidian "}<span class="accent">{"Media"}</span></span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={link.target} class="nav-link">{ link.name }</a>
                    }) }
                    <a href="#contact" class="nav-cta">{"Get Started"}</a>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.name}
                                    href={link.target}
                                    class="mobile-link"
                                    onclick={close_menu.clone()}
                                >
                                    { link.name }
                                </a>
                            }) }
                            <a href="#contact" class="mobile-cta" onclick={close_menu.clone()}>
                                {"Get Started"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 80px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .logo-mark {
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #4d0000;
                    border: 1px solid #a00000;
                    border-radius: 8px;
                }

                .accent {
                    color: #ff4d4d;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-cta {
                    background: #4d0000;
                    color: #fff;
                    padding: 0.6rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(160, 0, 0, 0.5);
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 26px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 2rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .mobile-link {
                    color: #d1d5db;
                    font-size: 1.1rem;
                    text-decoration: none;
                }

                .mobile-cta {
                    background: #4d0000;
                    color: #fff;
                    padding: 1rem;
                    border-radius: 12px;
                    text-align: center;
                    font-weight: 700;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }

                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
