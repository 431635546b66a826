//! Static page copy.

pub struct NavItem {
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { target: "home", label: "Home" },
    NavItem { target: "about", label: "About" },
    NavItem { target: "skills", label: "Skills" },
    NavItem { target: "experience", label: "Experience" },
    NavItem { target: "contact", label: "Contact" },
];

pub const OWNER_NAME: &str = "Jordan Lee";
pub const OWNER_ROLE: &str = "Backend & Distributed Systems Engineer";
pub const OWNER_TAGLINE: &str =
    "I design event-driven services that stay fast, observable and boring to operate.";
pub const PROFILE_IMAGE: &str = "assets/profile.jpg";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Eight years building payment, logistics and analytics platforms, mostly on the JVM and in Rust.",
    "I care about clear domain models, honest metrics and on-call rotations nobody dreads.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "8+", label: "Years shipping" },
    Stat { value: "40+", label: "Services in production" },
    Stat { value: "99.95%", label: "Typical SLO" },
];

pub struct Certificate {
    pub title: &'static str,
    pub file: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate { title: "AWS Solutions Architect", file: "aws-saa.pdf" },
    Certificate { title: "Certified Kubernetes Administrator", file: "cka.png" },
    Certificate { title: "Professional Scrum Master", file: "psm-1.jpg" },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        tags: &["Rust", "Java", "Kotlin", "TypeScript", "SQL"],
    },
    SkillCategory {
        title: "Architecture",
        tags: &["Event sourcing", "CQRS", "DDD", "Microservices"],
    },
    SkillCategory {
        title: "Infrastructure",
        tags: &["Kafka", "PostgreSQL", "Redis", "Kubernetes", "Terraform"],
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Staff Engineer",
        company: "Northwind Payments",
        period: "2022 - present",
        summary: "Led the move from a shared ledger database to an event-sourced settlement pipeline.",
    },
    Experience {
        role: "Senior Backend Engineer",
        company: "Contoso Logistics",
        period: "2019 - 2022",
        summary: "Built the routing service and its Kafka-based tracking feed.",
    },
    Experience {
        role: "Software Engineer",
        company: "Fabrikam Analytics",
        period: "2016 - 2019",
        summary: "Query layer and caching for the customer reporting product.",
    },
];

pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { label: "Email", href: "mailto:hello@example.com", icon: "✉️" },
    ContactLink { label: "GitHub", href: "https://github.com/", icon: "🐙" },
    ContactLink { label: "LinkedIn", href: "https://www.linkedin.com/", icon: "💼" },
];

pub const CODE_SNIPPETS: &[&str] = &[
    "let ledger = Ledger::replay(events)?;",
    "impl Projection for Balance { fn apply(&mut self, e: &Event) {} }",
    "tokio::spawn(async move { consumer.run().await });",
    "SELECT * FROM settlements WHERE status = 'pending';",
    "#[derive(Serialize, Deserialize)] struct Command;",
    "stream.filter_map(decode).for_each(project).await;",
    "cache.get_or_insert_with(key, || load(key));",
];

/// Background slots; snippets repeat when there are more slots than snippets.
pub const SNIPPET_SLOTS: usize = 8;
