//! Static page content. Every slice here is rendered in declaration order.

/// Symbolic icon reference, turned into a glyph by `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Layout,
    Code,
    Newspaper,
    BarChart,
    TrendingUp,
    Award,
    Globe,
    Phone,
    Zap,
    Mail,
    MapPin,
    Instagram,
    Check,
    ArrowRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub tier: &'static str,
    pub price: &'static str,
    /// Shown struck through next to `price`.
    pub reference_price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vision {
    pub heading: &'static str,
    pub body: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Options of the "Service Interested In" select on the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceOption {
    #[default]
    ContentCreation,
    SocialMediaManagement,
    WebsiteDevelopment,
    ArticlePosting,
    PerformanceMarketing,
    Other,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 6] = [
        ServiceOption::ContentCreation,
        ServiceOption::SocialMediaManagement,
        ServiceOption::WebsiteDevelopment,
        ServiceOption::ArticlePosting,
        ServiceOption::PerformanceMarketing,
        ServiceOption::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::ContentCreation => "Content Creation",
            ServiceOption::SocialMediaManagement => "Social Media Management",
            ServiceOption::WebsiteDevelopment => "Website Development",
            ServiceOption::ArticlePosting => "Article Posting",
            ServiceOption::PerformanceMarketing => "Performance Marketing",
            ServiceOption::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<ServiceOption> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", target: "#" },
    NavLink { name: "About", target: "#about" },
    NavLink { name: "Services", target: "#services" },
    NavLink { name: "Pricing", target: "#pricing" },
    NavLink { name: "Performance Marketing", target: "#performance" },
    NavLink { name: "Contact", target: "#contact" },
];

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Content Creation",
        description: "Strategic social media posts, reels & stories crafted with intention — designed to engage, inform, and convert.",
        details: "Strategic posting and analytical reporting to ensure a strong ROI.",
        icon: Icon::Layout,
    },
    ServiceOffering {
        title: "Social Media Management",
        description: "Cultivating your optimal social presence through dedicated efforts, scheduling, and community management.",
        details: "From scheduling to community management — we've got you covered.",
        icon: Icon::Layout,
    },
    ServiceOffering {
        title: "Website Development",
        description: "Engaging, interactive, and conversion-focused websites crafted with expert development teams.",
        details: "Seamless user experiences that drive results.",
        icon: Icon::Code,
    },
    ServiceOffering {
        title: "Article Posting / Press Release",
        description: "Get featured in credible publications across India with budget-friendly rates for press releases.",
        details: "Boost your authority in the market.",
        icon: Icon::Newspaper,
    },
    ServiceOffering {
        title: "Performance Marketing",
        description: "ROI-driven ad campaigns leveraging trending topics and data-driven insights.",
        details: "Instagram & other major platform ad management for local domination.",
        icon: Icon::BarChart,
    },
    ServiceOffering {
        title: "Analytical Insights",
        description: "Data-driven reports and strategic recommendations for long-term growth.",
        details: "Strategic decision-making insights.",
        icon: Icon::TrendingUp,
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Neo Package",
        tier: "Starter",
        price: "₹5,000",
        reference_price: "₹10,000",
        features: &[
            "4 imaginative posts",
            "4 engaging reels",
            "4 engaging stories",
        ],
        cta: "Choose Neo Package",
        highlighted: false,
    },
    PricingPlan {
        name: "Upscale Package",
        tier: "Growth (Most Popular)",
        price: "₹7,000",
        reference_price: "₹13,000",
        features: &[
            "5 imaginative posts",
            "5 engaging reels",
            "7 engaging stories",
            "Detailed analytic PDF stats",
            "Strategic decision-making insights",
        ],
        cta: "Choose Upscale Package",
        highlighted: true,
    },
    PricingPlan {
        name: "Upstand Package",
        tier: "Premium",
        price: "₹13,000",
        reference_price: "₹18,000",
        features: &[
            "13 imaginative posts",
            "7 engaging reels",
            "15 engaging stories",
            "Detailed analytic PDF stats",
            "Strategic decision-making insights",
        ],
        cta: "Choose Upstand Package",
        highlighted: false,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What platforms do you manage?",
        answer: "We manage Instagram and other major social media platforms. We also handle website development and press release distribution across Indian media channels.",
    },
    FaqEntry {
        question: "How long does it take to see results?",
        answer: "While organic growth takes time, most clients begin seeing noticeable engagement improvements within the first month. Performance marketing campaigns can deliver results from day one.",
    },
    FaqEntry {
        question: "Can I customize a package?",
        answer: "Absolutely! Our listed packages are starting points. Contact us to discuss a custom plan tailored to your specific business needs.",
    },
    FaqEntry {
        question: "Do you require a long-term contract?",
        answer: "We believe in earning your trust through results, not contracts. Our packages are month-to-month, giving you complete flexibility.",
    },
    FaqEntry {
        question: "Do you provide analytics and reports?",
        answer: "Yes! Our Upscale and Upstand packages include detailed analytic PDFs and strategic insights. We believe in full transparency with our clients.",
    },
];

pub const ABOUT_PLATFORMS: &[&str] = &["Instagram", "YouTube", "Google", "Performance Marketing"];

pub const ABOUT_STATS: &[Highlight] = &[
    Highlight { value: "2026", caption: "Founded Official" },
    Highlight { value: "Hybrid", caption: "Online + Offline" },
    Highlight { value: "100%", caption: "ROI Focused" },
    Highlight { value: "Data", caption: "Driven Insights" },
];

pub const VISIONS: &[Vision] = &[
    Vision {
        heading: "Vision 01 — Creative & Profitable",
        body: "Make your business creative and unforgettable while ensuring profitability through strategic marketing strategies tailored specifically for our clients.",
        icon: Icon::Award,
    },
    Vision {
        heading: "Vision 02 — Captivate & Convert",
        body: "Captivating the audience with engaging content that leaves a lasting impression on our client's business — turning viewers into loyal customers.",
        icon: Icon::Globe,
    },
];

pub const PERFORMANCE_POINTS: &[&str] = &[
    "Trend-based campaign strategy",
    "Data-driven audience targeting",
    "Local market domination",
    "Multi-platform ad management",
    "Continuous optimization for maximum ROI",
];

/// Bar heights (percent) of the decorative ROI chart.
pub const PERFORMANCE_BARS: &[u8] = &[40, 70, 45, 90, 65, 80, 100];

pub const WHY_CHOOSE_US: &[Reason] = &[
    Reason { title: "Data-Driven Strategy", description: "Every decision backed by analytics", icon: Icon::BarChart },
    Reason { title: "Creative Excellence", description: "Scroll-stopping content that converts", icon: Icon::Layout },
    Reason { title: "Budget-Friendly", description: "Premium quality at affordable rates", icon: Icon::Globe },
    Reason { title: "Dedicated Support", description: "Your brand is our priority", icon: Icon::Phone },
    Reason { title: "Proven ROI", description: "Campaigns designed for measurable growth", icon: Icon::TrendingUp },
    Reason { title: "Quick Turnaround", description: "Fast delivery without compromising quality", icon: Icon::Zap },
];

/// The footer only has room for the first four offerings.
pub fn footer_services() -> &'static [ServiceOffering] {
    &SERVICES[..SERVICES.len().min(4)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_highlighted() {
        let highlighted: Vec<_> = PRICING_PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Upscale Package");
    }

    #[test]
    fn plans_keep_declaration_order() {
        let names: Vec<_> = PRICING_PLANS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Neo Package", "Upscale Package", "Upstand Package"]);
    }

    #[test]
    fn nav_targets_are_anchors() {
        assert_eq!(NAV_LINKS.first().map(|l| l.name), Some("Home"));
        assert_eq!(NAV_LINKS.last().map(|l| l.target), Some("#contact"));
        assert!(NAV_LINKS.iter().all(|l| l.target.starts_with('#')));
    }

    #[test]
    fn default_service_is_content_creation() {
        assert_eq!(ServiceOption::default(), ServiceOption::ContentCreation);
        assert_eq!(ServiceOption::default().label(), "Content Creation");
    }

    #[test]
    fn service_labels_round_trip() {
        for option in ServiceOption::ALL {
            assert_eq!(ServiceOption::from_label(option.label()), Some(option));
        }
        assert_eq!(ServiceOption::from_label("Knitting"), None);
    }

    #[test]
    fn footer_lists_first_four_services() {
        let titles: Vec<_> = footer_services().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Content Creation",
                "Social Media Management",
                "Website Development",
                "Article Posting / Press Release",
            ]
        );
    }

    #[test]
    fn bar_heights_are_percentages() {
        assert!(PERFORMANCE_BARS.iter().all(|h| *h <= 100));
    }
}
