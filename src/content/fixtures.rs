//! @acp:module "Content Fixtures"
//! @acp:summary "Built-in profile, projects, writing and links"
//! @acp:domain cli
//! @acp:layer data

use super::*;

pub(super) fn content() -> Content {
    Content {
        profile: Profile {
            name: "George Nurijanian".to_string(),
            title: "Product Manager".to_string(),
            location: "online".to_string(),
            status: "available".to_string(),
            bio: "product leader | builder | mentor | 'genuine pleasure to work with'".to_string(),
        },
        projects: vec![
            project(
                "prodmgmt.world",
                "Making a system for Product Management without so much guesswork. Community and resources for product managers navigating the AI era.",
                "https://prodmgmt.world",
                ProjectKind::Business,
                &["Community", "Product Management", "AI"],
            ),
            project(
                "lockinfocus.app",
                "Science-backed focus timer using Andrew Huberman's visual focus training protocol. 5-minute structured exercises designed specifically for ADHD brains, students, and deep work.",
                "https://lockinfocus.app",
                ProjectKind::Tool,
                &["Neuroscience", "ADHD", "Productivity", "Focus Training"],
            ),
        ],
        writing: writing(),
        appearances: appearances(),
        quick_links: vec![
            quick_link(
                "Resume",
                "https://docs.google.com/document/d/1nPU6ZuTTpvXnb-qhURQr2-1Xla1dc6w1ViKQvdu1g7U/edit?usp=sharing",
                "CV",
            ),
            quick_link("Weekly insights", "https://nurijanian.substack.com/", "newsletter"),
            quick_link("Long-form writing", "https://x.com/nurijanian/articles", "essays and articles"),
        ],
        social_links: vec![
            SocialLink {
                name: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/g-nurijanian/".to_string(),
                handle: "g-nurijanian".to_string(),
            },
            SocialLink {
                name: "Twitter".to_string(),
                url: "https://x.com/nurijanian".to_string(),
                handle: "@nurijanian".to_string(),
            },
        ],
    }
}

fn writing() -> Vec<WritingItem> {
    let mut items = vec![
        // Newsletter
        article(
            "I Built 3 Claude Code Commands to 10x My PM Productivity",
            "How to create custom Claude Code commands for personal knowledge management and convert 180+ AI prompts into reusable skills, building a custom operating system for product management work.",
            "https://nurijanian.substack.com/p/i-built-3-claude-code-commands-to",
            "2026-01-09",
            WritingKind::Newsletter,
        ),
        article(
            "How To Use Claude Code for Product Managers",
            "A practical guide showing how PMs can leverage Claude Code to build applications, featuring actionable tips and browser interaction capabilities through the example of creating an ADHD Focus App.",
            "https://nurijanian.substack.com/p/how-to-use-claude-code-for-product",
            "2025-12-26",
            WritingKind::Newsletter,
        ),
        article(
            "How To Use NotebookLM for Product Managers",
            "Eight practical use cases for NotebookLM tailored to PMs, emphasizing innovation through input, prompt, and output differentiation to extract novel insights.",
            "https://nurijanian.substack.com/p/how-to-use-notebooklm-for-product",
            "2025-12-19",
            WritingKind::Newsletter,
        ),
        // Twitter
        article(
            "Creativity Is Contrarian Investing In Ideas",
            "Exploring creativity as market behavior through the investment theory: buying low and selling high in ideas. Examines antimemetic problems, AI's impact on synthesis and analysis, and why courage is creativity's true bottleneck.",
            "https://x.com/nurijanian/article/2010564473812304306",
            "2026-01-12",
            WritingKind::Twitter,
        ),
        article(
            "A Product Manager Is a Founder With Training Wheels",
            "Why product management is fundamentally entrepreneurial work with organizational support. PMs must think like founders about vision, execution and resource allocation while learning in a safer environment.",
            "https://x.com/nurijanian/article/2009547930668269632",
            "2026-01-09",
            WritingKind::Twitter,
        ),
        article(
            "On Finding Meaning",
            "Meaning only emerges in the present moment during action. Avoid the traps of over-analysis and deferral; look for meaning while moving, not while sitting still.",
            "https://x.com/nurijanian/article/2009108907004973282",
            "2026-01-08",
            WritingKind::Twitter,
        ),
        article(
            "Strategy Is Scaffolding Not the Building",
            "Strategy isn't a deliverable, it's a story you test through experiments. Understanding the situation is 90% of strategic work; tactics are bets that validate or disprove your narrative.",
            "https://x.com/nurijanian/article/2006297601956794417",
            "2025-12-31",
            WritingKind::Twitter,
        ),
        article(
            "Insights Products Are a Tarpit",
            "Why analytics products consistently fail: they exist outside workflow, demand arrives sporadically with infinite variation, and insights don't do work themselves. They're merely inputs to action.",
            "https://x.com/nurijanian/article/2005917216408265153",
            "2025-12-30",
            WritingKind::Twitter,
        ),
        article(
            "Curiosity Is Compound Interest for Your Brain",
            "How distraction fragments attention and creativity. Curiosity requires sustained focus to compound into genuine creative output, while AI tools risk extracting satisfaction without building neural networks.",
            "https://x.com/nurijanian/article/2005464379660411217",
            "2025-12-29",
            WritingKind::Twitter,
        ),
    ];
    items.extend(appearances().iter().map(appearance_item));
    items
}

fn appearances() -> Vec<Appearance> {
    vec![
        Appearance {
            title: "The Ultimate Guide: Design Systems".to_string(),
            description: "Partnered with Aakash Gupta to create a comprehensive guide addressing unique design system challenges: quantifying impact and communicating importance to leadership.".to_string(),
            url: "https://www.news.aakashg.com/p/the-ultimate-guide-design-systems".to_string(),
            date: "2023-05-29".to_string(),
            platform: "Product Growth Newsletter".to_string(),
        },
        Appearance {
            title: "Navigating the World of Product Management".to_string(),
            description: "Interview discussing the journey from pricing analyst to product manager, working in regulated environments, building product culture, and the future of product management.".to_string(),
            url: "https://www.youtube.com/watch?v=3PLK5HQunfs".to_string(),
            date: "2021-10-11".to_string(),
            platform: "One Knight in Product Podcast".to_string(),
        },
        Appearance {
            title: "Examples and Templates of 1-Pagers and PRDs".to_string(),
            description: "Shout out from Lenny Rachitsky for great problem framing. Featured example of problem-oriented product documentation with clear success criteria and directional solutions.".to_string(),
            url: "https://www.lennysnewsletter.com/i/40530838/examples-of-1-pagersprds".to_string(),
            date: "2021-09-01".to_string(),
            platform: "Lenny's Newsletter".to_string(),
        },
    ]
}

fn project(title: &str, description: &str, url: &str, kind: ProjectKind, tags: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        kind,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn article(title: &str, description: &str, url: &str, date: &str, kind: WritingKind) -> WritingItem {
    WritingItem {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        date: date.to_string(),
        kind,
        platform: None,
    }
}

fn appearance_item(appearance: &Appearance) -> WritingItem {
    WritingItem {
        title: appearance.title.clone(),
        description: appearance.description.clone(),
        url: appearance.url.clone(),
        date: appearance.date.clone(),
        kind: WritingKind::Appearance,
        platform: Some(appearance.platform.clone()),
    }
}

fn quick_link(label: &str, url: &str, description: &str) -> QuickLink {
    QuickLink {
        label: label.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    }
}
