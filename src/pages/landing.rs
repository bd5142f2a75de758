use yew::prelude::*;

use crate::catalog::{
    Icon, ABOUT_PLATFORMS, ABOUT_STATS, FAQS, PERFORMANCE_BARS, PERFORMANCE_POINTS,
    PRICING_PLANS, SERVICES, VISIONS, WHY_CHOOSE_US,
};
use crate::components::contact_form::ContactForm;
use crate::components::faq_item::FaqItem;
use crate::components::footer::Footer;
use crate::components::icon::IconGlyph;
use crate::components::layout::{GlassCard, SectionTitle};
use crate::components::pricing::PricingCard;
use crate::config;

const STAGGER_MS: u32 = 100;

fn stagger(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <main>
                <section class="hero">
                    <div class="container centered">
                        <div class="hero-badge glass">
                            <IconGlyph icon={Icon::Zap} />
                            {"Brand Builders | Content Creators | Growth Partners"}
                        </div>
                        <h1 class="hero-title">
                            {"We Create "}<span class="text-gradient">{"Difference."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"We're not just a marketing agency — we're brand builders. From developing viral content to cultivating long-term consumers, we handle it all."}
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="button primary">
                                {"Get Started"}<IconGlyph icon={Icon::ArrowRight} />
                            </a>
                            <a href="#services" class="button ghost glass">{"View Our Services"}</a>
                        </div>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="container two-columns">
                        <div class="reveal">
                            <div class="eyebrow"><span class="eyebrow-line"></span>{"Introduction"}</div>
                            <h2 class="section-heading">
                                {"Built for the digital age with a "}
                                <span class="text-gradient">{"people-first"}</span>
                                {" approach."}
                            </h2>
                            <p class="lead">
                                { format!("{} began as an offline entity, depending on in-person meetings. Today, we have embraced a more contemporary strategy — combining direct meetings with online interactions to enhance connections with our audience.", config::BRAND_NAME) }
                            </p>
                            <div class="platform-grid">
                                { for ABOUT_PLATFORMS.iter().map(|platform| html! {
                                    <div key={*platform} class="platform">
                                        <IconGlyph icon={Icon::Check} class={classes!("check")} />
                                        <span>{ *platform }</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <div class="stat-grid">
                            { for ABOUT_STATS.iter().enumerate().map(|(i, stat)| html! {
                                <GlassCard key={stat.value} class={classes!("stat-card")} delay_ms={stagger(i)}>
                                    <div class="stat-value text-gradient">{ stat.value }</div>
                                    <div class="stat-caption">{ stat.caption }</div>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section tinted">
                    <div class="container">
                        <SectionTitle
                            title="Our Vision"
                            subtitle="Our vision is to deliver the best return on investment (ROI) for our clients while fostering long-term success."
                        />
                        <div class="grid two">
                            { for VISIONS.iter().map(|vision| html! {
                                <GlassCard key={vision.heading} class={classes!("vision-card")}>
                                    <IconGlyph icon={vision.icon} class={classes!("watermark")} />
                                    <h3>{ vision.heading }</h3>
                                    <p>{ vision.body }</p>
                                </GlassCard>
                            }) }
                        </div>
                        <div class="motto">{"\"We create difference.\""}</div>
                    </div>
                </section>

                <section id="services" class="section">
                    <div class="container">
                        <SectionTitle
                            title="Our Services"
                            subtitle="A full spectrum of brand-building solutions tailored to your business needs."
                        />
                        <div class="grid three">
                            { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                                <GlassCard key={service.title} class={classes!("service-card")} delay_ms={stagger(i)}>
                                    <div class="service-icon"><IconGlyph icon={service.icon} /></div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                    <div class="service-details">{ service.details }</div>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="performance" class="section">
                    <div class="container">
                        <GlassCard class={classes!("performance-card")}>
                            <div class="two-columns">
                                <div>
                                    <h2 class="section-heading">
                                        {"Performance "}<span class="text-gradient">{"Marketing"}</span>
                                    </h2>
                                    <p class="lead">
                                        {"We leverage trending topics and data-driven insights to craft campaigns that deliver a better ROI than anticipated. This represents a crucial decision point for businesses aiming for sustainable growth."}
                                    </p>
                                    <ul class="checklist">
                                        { for PERFORMANCE_POINTS.iter().map(|point| html! {
                                            <li key={*point}>
                                                <IconGlyph icon={Icon::Check} class={classes!("check")} />
                                                { *point }
                                            </li>
                                        }) }
                                    </ul>
                                    <a href="#contact" class="button light">
                                        {"Start Your Campaign"}<IconGlyph icon={Icon::ArrowRight} />
                                    </a>
                                </div>
                                <div class="roi-panel glass">
                                    <div class="roi-header">
                                        <div>
                                            <div class="roi-label">{"Total Campaign ROI"}</div>
                                            <div class="roi-value">{"+245.8%"}</div>
                                        </div>
                                        <IconGlyph icon={Icon::TrendingUp} />
                                    </div>
                                    <div class="roi-bars">
                                        { for PERFORMANCE_BARS.iter().enumerate().map(|(i, height)| html! {
                                            <div
                                                key={i}
                                                class="roi-bar"
                                                style={format!("height: {}%; animation-delay: {}ms;", height, 500 + stagger(i))}
                                            ></div>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        </GlassCard>
                    </div>
                </section>

                <section id="pricing" class="section">
                    <div class="container">
                        <SectionTitle
                            title="Our Services Pricing"
                            subtitle="Choose a plan that fits your brand's needs and budget. All packages include creative content tailored to your brand identity."
                        />
                        <div class="grid three pricing-grid">
                            { for PRICING_PLANS.iter().enumerate().map(|(i, plan)| html! {
                                <PricingCard key={plan.name} plan={*plan} delay_ms={stagger(i)} />
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section">
                    <div class="container">
                        <SectionTitle title="Why Choose Us?" />
                        <div class="grid three compact">
                            { for WHY_CHOOSE_US.iter().enumerate().map(|(i, reason)| html! {
                                <GlassCard key={reason.title} class={classes!("reason-card")} delay_ms={stagger(i)}>
                                    <IconGlyph icon={reason.icon} />
                                    <h4>{ reason.title }</h4>
                                    <p>{ reason.description }</p>
                                </GlassCard>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section tinted">
                    <div class="container narrow">
                        <SectionTitle title="FAQ" subtitle="Common questions about our services and process." />
                        { for FAQS.iter().map(|entry| html! {
                            <FaqItem key={entry.question} entry={*entry} />
                        }) }
                    </div>
                </section>

                <section id="contact" class="section">
                    <div class="container two-columns wide-gap">
                        <div>
                            <h2 class="section-heading">
                                {"Get In "}<span class="text-gradient">{"Touch"}</span>
                            </h2>
                            <p class="lead">
                                {"Ready to elevate your brand? Let's start the conversation. Let's build something unforgettable together."}
                            </p>
                            <div class="contact-details">
                                <div class="contact-detail">
                                    <div class="detail-icon glass"><IconGlyph icon={Icon::Phone} /></div>
                                    <div>
                                        <h4>{"Phone"}</h4>
                                        <p>{ config::DISPLAY_PHONE }</p>
                                    </div>
                                </div>
                                <div class="contact-detail">
                                    <div class="detail-icon glass"><IconGlyph icon={Icon::Mail} /></div>
                                    <div>
                                        <h4>{"Email"}</h4>
                                        <p>{ config::CONTACT_EMAIL }</p>
                                    </div>
                                </div>
                                <div class="contact-detail">
                                    <div class="detail-icon glass"><IconGlyph icon={Icon::MapPin} /></div>
                                    <div>
                                        <h4>{"Location"}</h4>
                                        <p>{ config::LOCATION }</p>
                                    </div>
                                </div>
                            </div>
                            <a
                                href={config::INSTAGRAM_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link glass"
                            >
                                <IconGlyph icon={Icon::Instagram} />
                            </a>
                        </div>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <Footer />

            <style>
                {r#"
                .landing-page {
                    color: #fff;
                    min-height: 100vh;
                    position: relative;
                }

                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .container.narrow {
                    max-width: 768px;
                }

                .centered {
                    text-align: center;
                }

                .glass {
                    background: rgba(10, 5, 5, 0.6);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }

                .glass-card {
                    background: rgba(255, 255, 255, 0.03);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .glass-card:hover {
                    transform: translateY(-10px) rotateX(2deg) rotateY(-2deg);
                }

                .text-gradient {
                    background: linear-gradient(45deg, #fff, #ff4d4d);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .reveal {
                    animation: reveal 0.6s ease both;
                }

                .reveal.delayed {
                    animation-delay: 0.2s;
                }

                @keyframes reveal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero {
                    padding: 12rem 0 10rem;
                    position: relative;
                    overflow: hidden;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #ff8080;
                    margin-bottom: 2rem;
                }

                .hero-title {
                    font-size: clamp(3.5rem, 9vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.4rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-decoration: none;
                    color: #fff;
                    transition: background 0.2s ease;
                }

                .button.primary {
                    background: #4d0000;
                    box-shadow: 0 0 20px rgba(128, 0, 0, 0.3);
                }

                .button.primary:hover {
                    background: #660000;
                }

                .button.light {
                    background: #fff;
                    color: #0a0505;
                }

                .section {
                    padding: 8rem 0;
                }

                .section.tinted {
                    background: rgba(40, 5, 5, 0.3);
                }

                .section-title {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-title h2,
                .section-heading {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .section-title p {
                    color: #9ca3af;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .lead {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ff4d4d;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }

                .eyebrow-line {
                    width: 2rem;
                    height: 4px;
                    background: #ff4d4d;
                }

                .two-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .two-columns.wide-gap {
                    gap: 4rem;
                    align-items: start;
                }

                .grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .grid.two {
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .platform-grid,
                .stat-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .platform {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                }

                .check {
                    color: #ff4d4d;
                }

                .stat-card {
                    aspect-ratio: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat-caption {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .vision-card {
                    position: relative;
                    overflow: hidden;
                }

                .vision-card h3 {
                    font-size: 1.5rem;
                    color: #ff8080;
                    margin-bottom: 1rem;
                }

                .vision-card p,
                .service-card p,
                .reason-card p {
                    color: #9ca3af;
                    line-height: 1.6;
                }

                .watermark {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-size: 6rem;
                    opacity: 0.1;
                }

                .motto {
                    margin-top: 4rem;
                    text-align: center;
                    font-style: italic;
                    font-family: serif;
                    font-size: 1.5rem;
                    color: #6b7280;
                }

                .service-icon {
                    width: 56px;
                    height: 56px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(77, 0, 0, 0.5);
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                    font-size: 1.5rem;
                }

                .service-details {
                    padding-top: 1rem;
                    margin-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #ff4d4d;
                }

                .performance-card {
                    padding: 4rem;
                    background: rgba(40, 5, 5, 0.6);
                }

                .checklist {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 2.5rem;
                }

                .checklist li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #d1d5db;
                }

                .roi-panel {
                    aspect-ratio: 1;
                    border-radius: 24px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    box-shadow: 0 0 50px rgba(128, 0, 0, 0.15);
                }

                .roi-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }

                .roi-label {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .roi-value {
                    font-size: 1.9rem;
                    font-weight: 700;
                }

                .roi-bars {
                    height: 8rem;
                    display: flex;
                    align-items: flex-end;
                    gap: 0.5rem;
                }

                .roi-bar {
                    flex: 1;
                    background: #a00000;
                    border-radius: 2px 2px 0 0;
                    transform-origin: bottom;
                    animation: grow 0.6s ease both;
                }

                @keyframes grow {
                    from { transform: scaleY(0); }
                    to { transform: scaleY(1); }
                }

                .pricing-grid {
                    gap: 2rem;
                }

                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                }

                .pricing-card.highlighted {
                    border-color: #a00000;
                    box-shadow: 0 0 40px rgba(128, 0, 0, 0.2);
                    transform: scale(1.05);
                    z-index: 1;
                }

                .popular-tag {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #a00000;
                    font-size: 0.625rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                }

                .card-header {
                    margin-bottom: 2rem;
                }

                .card-header h3 {
                    font-size: 1.5rem;
                }

                .tier {
                    color: #ff4d4d;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .reference-price {
                    color: #6b7280;
                    text-decoration: line-through;
                    font-size: 1.1rem;
                }

                .amount {
                    font-size: 3rem;
                    font-weight: 900;
                    margin-bottom: 2rem;
                }

                .period {
                    font-size: 1.1rem;
                    font-weight: 400;
                    color: #6b7280;
                }

                .features {
                    list-style: none;
                    padding: 0;
                    flex-grow: 1;
                    margin-bottom: 2.5rem;
                }

                .features li {
                    display: flex;
                    gap: 0.75rem;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }

                .plan-cta {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 12px;
                    font-weight: 700;
                    color: #fff;
                    cursor: pointer;
                }

                .plan-cta.primary {
                    background: #800000;
                    border: none;
                }

                .plan-cta.secondary {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .grid.compact .glass-card {
                    padding: 1.5rem;
                }

                .reason-card h4 {
                    margin: 1rem 0 0.5rem;
                }

                .reason-card p {
                    font-size: 0.75rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    border-radius: 12px;
                    text-align: left;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .faq-item {
                    margin-bottom: 1rem;
                }

                .faq-item .toggle-icon {
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 1.5rem;
                    margin-top: -0.5rem;
                    border-radius: 0 0 12px 12px;
                    color: #9ca3af;
                    animation: reveal 0.3s ease both;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }

                .contact-detail {
                    display: flex;
                    gap: 1.5rem;
                    align-items: flex-start;
                }

                .contact-detail p {
                    color: #9ca3af;
                }

                .detail-icon,
                .social-link {
                    width: 48px;
                    height: 48px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    text-decoration: none;
                }

                .social-link {
                    border-radius: 9999px;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .form-field label {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    font: inherit;
                }

                .form-field textarea {
                    resize: none;
                }

                .form-field option {
                    background: #0a0505;
                }

                .submit-button {
                    padding: 1rem;
                    background: #4d0000;
                    border: none;
                    border-radius: 12px;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(160, 0, 0, 0.2);
                }

                .submit-button:hover {
                    background: #660000;
                }

                .site-footer {
                    padding: 5rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    background: #0a0505;
                }

                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }

                .footer-grid h4 {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #ff4d4d;
                    margin-bottom: 1.5rem;
                }

                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }

                .footer-grid li {
                    margin-bottom: 1rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                .footer-grid a {
                    color: #6b7280;
                    text-decoration: none;
                }

                .footer-grid a:hover {
                    color: #fff;
                }

                .footer-brand p {
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 1.5rem 0;
                }

                .footer-brand .copyright {
                    font-size: 0.75rem;
                    color: #4b5563;
                }

                .logo-mark.small {
                    width: 32px;
                    height: 32px;
                }

                @media (max-width: 768px) {
                    .two-columns,
                    .grid.two,
                    .grid.three,
                    .form-row,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .grid.three.compact {
                        grid-template-columns: 1fr 1fr;
                    }

                    .hero {
                        padding: 8rem 0 5rem;
                    }

                    .section {
                        padding: 5rem 0;
                    }

                    .performance-card {
                        padding: 2rem;
                    }

                    .pricing-card.highlighted {
                        transform: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_per_card() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 300);
    }
}
