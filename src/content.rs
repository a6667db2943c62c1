//! Static page content.
//!
//! Everything the sections render lives here as `'static` data so it can be
//! checked without a browser.

use std::fmt;

pub const OWNER: &str = "Precious Jacob";
pub const BRAND: &str = "Precious";
pub const BRAND_SUFFIX: &str = ".Design";
pub const ROLE: &str = "UI/UX Designer & Visual Artist";
pub const TAGLINE: &str = "Crafting beautiful and intuitive digital experiences. Transforming complex problems into elegant solutions with a focus on user-centered design.";
pub const PORTRAIT_URL: &str = "https://images.pexels.com/photos/2613260/pexels-photo-2613260.jpeg?auto=compress&cs=tinysrgb&w=800";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
    /// Tailwind gradient stops for the progress bar.
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "UI Design",
        level: 95,
        color: "from-purple-600 to-pink-500",
    },
    Skill {
        name: "UX Research",
        level: 85,
        color: "from-teal-500 to-blue-500",
    },
    Skill {
        name: "Figma",
        level: 90,
        color: "from-purple-500 to-teal-400",
    },
    Skill {
        name: "Adobe Creative Suite",
        level: 85,
        color: "from-red-500 to-amber-500",
    },
    Skill {
        name: "Prototyping",
        level: 90,
        color: "from-blue-600 to-purple-600",
    },
    Skill {
        name: "Wireframing",
        level: 95,
        color: "from-teal-400 to-green-500",
    },
    Skill {
        name: "User Testing",
        level: 80,
        color: "from-amber-500 to-orange-600",
    },
    Skill {
        name: "Information Architecture",
        level: 85,
        color: "from-indigo-500 to-blue-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftSkill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill {
        name: "Communication",
        icon: "🗣️",
    },
    SoftSkill {
        name: "Problem Solving",
        icon: "🧩",
    },
    SoftSkill {
        name: "Teamwork",
        icon: "👥",
    },
    SoftSkill {
        name: "Adaptability",
        icon: "🔄",
    },
    SoftSkill {
        name: "Time Management",
        icon: "⏱️",
    },
    SoftSkill {
        name: "Attention to Detail",
        icon: "🔍",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UiDesign,
    MobileApp,
    WebDesign,
    Dashboard,
}

impl Category {
    /// Order of the filter buttons.
    pub const ALL: [Category; 4] = [
        Category::UiDesign,
        Category::MobileApp,
        Category::WebDesign,
        Category::Dashboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::UiDesign => "UI Design",
            Category::MobileApp => "Mobile App",
            Category::WebDesign => "Web Design",
            Category::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Redesign",
        category: Category::UiDesign,
        description: "A complete redesign of an e-commerce platform focusing on improving conversion rates and user experience.",
        image: "https://images.pexels.com/photos/6177645/pexels-photo-6177645.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 2,
        title: "Finance App",
        category: Category::MobileApp,
        description: "A financial management app designed with simplicity and clarity in mind, making complex financial data accessible.",
        image: "https://images.pexels.com/photos/6289075/pexels-photo-6289075.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 3,
        title: "Healthcare Dashboard",
        category: Category::Dashboard,
        description: "An intuitive dashboard for healthcare professionals to monitor patient data and streamline workflows.",
        image: "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 4,
        title: "Travel Booking Platform",
        category: Category::WebDesign,
        description: "A comprehensive travel booking platform with an emphasis on inspiring visual design and seamless booking flow.",
        image: "https://images.pexels.com/photos/5054541/pexels-photo-5054541.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 5,
        title: "Food Delivery App",
        category: Category::MobileApp,
        description: "A food delivery app redesign focusing on improving order flow and restaurant discovery.",
        image: "https://images.pexels.com/photos/5408919/pexels-photo-5408919.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Project {
        id: 6,
        title: "Fitness Tracker",
        category: Category::UiDesign,
        description: "A fitness tracking application designed to motivate users through gamification and visual progress tracking.",
        image: "https://images.pexels.com/photos/5384445/pexels-photo-5384445.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

/// Which projects the portfolio grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }

    /// Filter buttons in display order, `All` first.
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All).chain(Category::ALL.into_iter().map(ProjectFilter::Only))
    }

    /// Projects that pass the filter, in their original order.
    pub fn apply(self, projects: &[Project]) -> Vec<Project> {
        projects
            .iter()
            .filter(|p| self.matches(p))
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: &[TimelineItem] = &[
    TimelineItem {
        year: "2022 - Present",
        title: "Senior UI/UX Designer",
        company: "Creative Solutions Inc.",
        description: "Leading design strategy for enterprise clients. Directed a team of 3 designers on multiple high-profile projects. Introduced design system that improved design consistency by 40%.",
    },
    TimelineItem {
        year: "2020 - 2022",
        title: "UI Designer",
        company: "Digital Innovations",
        description: "Created UI designs for web and mobile applications. Collaborated with development teams to ensure design implementation accuracy. Conducted usability testing and incorporated feedback into design iterations.",
    },
    TimelineItem {
        year: "2018 - 2020",
        title: "Customer Service & Design Specialist",
        company: "TechConnect",
        description: "Provided exceptional customer service while developing visual assets and UI elements. Redesigned customer-facing materials, improving customer satisfaction by 25%.",
    },
];

pub const EDUCATION: &[TimelineItem] = &[
    TimelineItem {
        year: "2021 - 2022",
        title: "UX Design Certification",
        company: "Google",
        description: "Specialized training in user experience design processes including user research, wireframing, prototyping, and usability testing.",
    },
    TimelineItem {
        year: "2016 - 2018",
        title: "Associate Degree in Graphic Design",
        company: "Institute of Design",
        description: "Focus on digital design, typography, color theory, and composition. Graduated with honors.",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Adobe Certified Professional",
    "Professional Scrum Master I",
    "Interaction Design Foundation Member",
];

/// About-section counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// The two brand colours the page alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Teal,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "5+",
        label: "Years Experience",
        accent: Accent::Purple,
    },
    Stat {
        value: "50+",
        label: "Projects Completed",
        accent: Accent::Teal,
    },
    Stat {
        value: "20+",
        label: "Happy Clients",
        accent: Accent::Purple,
    },
    Stat {
        value: "3",
        label: "Design Awards",
        accent: Accent::Teal,
    },
];

/// About-section chip: label plus its colour classes.
pub const FOCUS_TAGS: &[(&str, &str)] = &[
    (
        "UI Design",
        "bg-purple-100 dark:bg-purple-900/30 text-purple-700 dark:text-purple-400",
    ),
    (
        "UX Research",
        "bg-teal-100 dark:bg-teal-900/30 text-teal-700 dark:text-teal-400",
    ),
    (
        "Wireframing",
        "bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-400",
    ),
    (
        "Prototyping",
        "bg-amber-100 dark:bg-amber-900/30 text-amber-700 dark:text-amber-400",
    ),
    (
        "Visual Design",
        "bg-pink-100 dark:bg-pink-900/30 text-pink-700 dark:text-pink-400",
    ),
];

pub const CONTACT_EMAIL: &str = "precious@example.com";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";
pub const CONTACT_PHONE_HREF: &str = "tel:+1234567890";
pub const CONTACT_LOCATION: &str = "San Francisco, California";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    LinkedIn,
    Twitter,
    Instagram,
}

impl Social {
    pub const ALL: [Social; 3] = [Social::LinkedIn, Social::Twitter, Social::Instagram];

    pub fn label(self) -> &'static str {
        match self {
            Social::LinkedIn => "LinkedIn",
            Social::Twitter => "Twitter",
            Social::Instagram => "Instagram",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Social::Twitter => Accent::Teal,
            Social::LinkedIn | Social::Instagram => Accent::Purple,
        }
    }
}

pub const SERVICES: &[&str] = &[
    "UI Design",
    "UX Research",
    "Wireframing",
    "Prototyping",
    "Design Systems",
];

pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ids(projects: &[Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_filter_returns_every_project() {
        let shown = ProjectFilter::All.apply(PROJECTS);
        assert_eq!(ids(&shown), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_filter_keeps_exact_matches_in_order() {
        let shown = ProjectFilter::Only(Category::MobileApp).apply(PROJECTS);
        assert_eq!(ids(&shown), vec![2, 5]);

        let shown = ProjectFilter::Only(Category::UiDesign).apply(PROJECTS);
        assert_eq!(ids(&shown), vec![1, 6]);

        let shown = ProjectFilter::Only(Category::Dashboard).apply(PROJECTS);
        assert_eq!(ids(&shown), vec![3]);

        let shown = ProjectFilter::Only(Category::WebDesign).apply(PROJECTS);
        assert_eq!(ids(&shown), vec![4]);
    }

    #[test]
    fn test_category_filters_partition_projects() {
        let total: usize = Category::ALL
            .iter()
            .map(|c| ProjectFilter::Only(*c).apply(PROJECTS).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn test_filter_on_empty_list() {
        assert!(ProjectFilter::Only(Category::Dashboard).apply(&[]).is_empty());
        assert!(ProjectFilter::All.apply(&[]).is_empty());
    }

    #[test]
    fn test_filter_options_order() {
        let labels = ProjectFilter::options()
            .map(|f| f.label())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["All", "UI Design", "Mobile App", "Web Design", "Dashboard"]
        );
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
    }

    #[test]
    fn test_project_ids_unique() {
        let unique = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn test_content_fields_non_empty() {
        for s in SKILLS {
            assert!(!s.name.is_empty() && !s.color.is_empty());
            assert!(s.level <= 100, "{} level out of range", s.name);
        }
        for s in SOFT_SKILLS {
            assert!(!s.name.is_empty() && !s.icon.is_empty());
        }
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(p.image.starts_with("https://"));
        }
        for item in EXPERIENCE.iter().chain(EDUCATION) {
            assert!(!item.year.is_empty());
            assert!(!item.title.is_empty());
            assert!(!item.company.is_empty());
            assert!(!item.description.is_empty());
        }
        assert!(CERTIFICATIONS.iter().all(|c| !c.is_empty()));
        assert!(STATS.iter().all(|s| !s.value.is_empty() && !s.label.is_empty()));
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(SOFT_SKILLS.len(), 6);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(EXPERIENCE.len(), 3);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(STATS.len(), 4);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2026),
            "© 2026 Precious Jacob. All rights reserved."
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::MobileApp.to_string(), "Mobile App");
        assert_eq!(ProjectFilter::Only(Category::WebDesign).label(), "Web Design");
    }
}
