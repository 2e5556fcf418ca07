//! Hardcoded page content.

use crate::palette::Hue;

pub const OWNER_NAME: &str = "Alex Nguyen";
pub const HEADLINE: &str = "Fullstack developer focused on React & Next.js";
pub const INTRO: &str = "I design and build modern web experiences with an eye for \
simplicity, performance and the small details that make an interface feel alive.";
pub const AVAILABILITY: &str = "Available for freelance work";

/// External profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "https://github.com/yourusername" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/in/yourusername" },
    SocialLink { name: "Twitter", url: "https://twitter.com/yourusername" },
];

pub const CONTACT_EMAIL: &str = "your.email@example.com";

/// Kind of a career milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    Work,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub kind: MilestoneKind,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        title: "Current role",
        description: "Senior Frontend Developer at XYZ",
        period: "2022 - present",
        kind: MilestoneKind::Work,
    },
    Milestone {
        title: "Previous role",
        description: "Web Developer at ABC",
        period: "2019 - 2022",
        kind: MilestoneKind::Work,
    },
    Milestone {
        title: "Graduated",
        description: "University of Information Technology",
        period: "2015 - 2019",
        kind: MilestoneKind::Education,
    },
];

pub const STRENGTHS: &[&str] = &[
    "Frontend development with React and Next.js",
    "Creative UI/UX design",
    "RESTful APIs and GraphQL",
    "Effective teamwork",
    "Picking up new technology quickly",
];

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    /// Fill of the proficiency bar.
    pub fn fraction(self) -> f32 {
        match self {
            SkillLevel::Expert => 1.0,
            SkillLevel::Advanced => 0.85,
            SkillLevel::Intermediate => 0.70,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub accent: Hue,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: SkillLevel) -> Skill {
    Skill { name, level }
}

use SkillLevel::{Advanced, Expert, Intermediate};

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        description: "Smooth, responsive and easy to use interfaces",
        accent: Hue::Blue,
        skills: &[
            skill("JavaScript", Expert),
            skill("TypeScript", Advanced),
            skill("React", Expert),
            skill("Next.js", Advanced),
            skill("HTML5 & CSS3", Expert),
            skill("Tailwind CSS", Advanced),
            skill("Framer Motion", Intermediate),
            skill("Redux", Advanced),
        ],
    },
    SkillCategory {
        name: "Backend",
        description: "APIs and server-side data handling",
        accent: Hue::Green,
        skills: &[
            skill("Node.js", Advanced),
            skill("Express", Advanced),
            skill("MongoDB", Advanced),
            skill("PostgreSQL", Intermediate),
            skill("GraphQL", Intermediate),
            skill("RESTful APIs", Advanced),
            skill("Authentication", Advanced),
        ],
    },
    SkillCategory {
        name: "Tools & more",
        description: "Tooling and workflow that keep delivery fast",
        accent: Hue::Violet,
        skills: &[
            skill("Git & GitHub", Advanced),
            skill("Docker", Intermediate),
            skill("CI/CD", Intermediate),
            skill("Testing", Advanced),
            skill("Figma", Advanced),
            skill("Responsive Design", Expert),
            skill("Performance", Advanced),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub source: Option<&'static str>,
    pub featured: bool,
}

/// Tags shown on a project card before collapsing into "+N".
pub const VISIBLE_TAGS: usize = 3;

impl Project {
    /// Visible tags and the number of hidden ones.
    pub fn tag_summary(&self) -> (&'static [&'static str], usize) {
        let shown = self.tags.len().min(VISIBLE_TAGS);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "Full featured e-commerce platform with product management, cart, checkout, and payment integration.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        demo: Some("https://demo-ecommerce.example.com"),
        source: Some("https://github.com/yourusername/ecommerce"),
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "A Trello-like task management application with drag-and-drop functionality and team collaboration.",
        tags: &["React", "TypeScript", "Firebase", "Tailwind"],
        demo: Some("https://task-app.example.com"),
        source: Some("https://github.com/yourusername/task-app"),
        featured: true,
    },
    Project {
        title: "Personal Blog",
        description: "A markdown-based blog with categories, tags, and comment system.",
        tags: &["Next.js", "MDX", "Tailwind"],
        demo: Some("https://blog.example.com"),
        source: Some("https://github.com/yourusername/blog"),
        featured: false,
    },
    Project {
        title: "Weather Dashboard",
        description: "Real-time weather dashboard with 7-day forecast, location search, and interactive maps.",
        tags: &["React", "OpenWeather API", "Leaflet", "ChartJS"],
        demo: Some("https://weather.example.com"),
        source: Some("https://github.com/yourusername/weather-app"),
        featured: false,
    },
    Project {
        title: "Fitness Tracker",
        description: "A comprehensive fitness tracking application with workout plans, nutrition logs and progress visualization.",
        tags: &["React Native", "Redux", "Firebase", "Chart.js"],
        demo: None,
        source: Some("https://github.com/yourusername/fitness-tracker"),
        featured: false,
    },
    Project {
        title: "Recipe Sharing Platform",
        description: "A community-driven recipe sharing platform with search, filtering, and user profiles.",
        tags: &["Vue.js", "Node.js", "MongoDB", "AWS"],
        demo: Some("https://recipes.example.com"),
        source: Some("https://github.com/yourusername/recipe-platform"),
        featured: false,
    },
];

/// Tabs of the projects gallery.
/// Non-featured projects previewed on the "All" tab.
pub const ALL_TAB_OTHERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Other,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [ProjectFilter::All, ProjectFilter::Featured, ProjectFilter::Other];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::Other => "Other",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Other => !project.featured,
        }
    }

    /// Projects shown under this tab: featured ones first, then the others.
    /// The "All" tab only previews the first few non-featured projects.
    pub fn apply(self, projects: &'static [Project]) -> impl Iterator<Item = &'static Project> {
        let limit = match self {
            ProjectFilter::All => ALL_TAB_OTHERS,
            _ => usize::MAX,
        };
        let featured = projects.iter().filter(move |p| p.featured && self.matches(p));
        let other = projects
            .iter()
            .filter(move |p| !p.featured && self.matches(p))
            .take(limit);
        featured.chain(other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub const CONTACT_CARDS: &[InfoCard] = &[
    InfoCard { title: "Email", value: CONTACT_EMAIL, link: Some("mailto:your.email@example.com") },
    InfoCard { title: "Address", value: "Ho Chi Minh City, Vietnam", link: Some("https://maps.google.com/?q=Ho+Chi+Minh+City") },
    InfoCard { title: "Phone", value: "+84 123 456 789", link: Some("tel:+84123456789") },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_partition_projects() {
        let featured = ProjectFilter::Featured.apply(PROJECTS).count();
        let other = ProjectFilter::Other.apply(PROJECTS).count();
        assert_eq!(featured, 2);
        assert_eq!(featured + other, PROJECTS.len());
    }

    #[test]
    fn test_all_tab_previews_three_others() {
        let shown: Vec<&Project> = ProjectFilter::All.apply(PROJECTS).collect();
        assert_eq!(shown.len(), 2 + ALL_TAB_OTHERS);
        assert!(shown[..2].iter().all(|p| p.featured));
        assert!(shown[2..].iter().all(|p| !p.featured));

        let first_others: Vec<&Project> = ProjectFilter::Other.apply(PROJECTS).take(ALL_TAB_OTHERS).collect();
        assert_eq!(&shown[2..], &first_others[..]);
    }

    #[test]
    fn test_tag_summary_collapses_overflow() {
        let (shown, hidden) = PROJECTS[0].tag_summary();
        assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(hidden, 1);
        let (shown, hidden) = PROJECTS[2].tag_summary();
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_skill_levels_ordered() {
        assert!(Expert.fraction() > Advanced.fraction());
        assert!(Advanced.fraction() > Intermediate.fraction());
    }
}
