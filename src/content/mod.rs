// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Proper nouns (skill names, project titles, companies, URLs) are kept here
//! as typed data; user-facing prose lives in the Fluent locale files so it can
//! be translated.

/// The navigable sections of the single page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Statistics,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Statistics,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Sections listed in the navigation bar (Home is reached via the brand).
    pub const NAV: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Statistics,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Fluent key for the section's navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Skills => "nav-skills",
            Section::Statistics => "nav-statistics",
            Section::Projects => "nav-projects",
            Section::Experience => "nav-experience",
            Section::Contact => "nav-contact",
        }
    }

    /// Approximate vertical position of the section as a fraction of the full
    /// page, used to snap the scrollable.
    #[must_use]
    pub fn scroll_fraction(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::About => 0.14,
            Section::Skills => 0.3,
            Section::Statistics => 0.45,
            Section::Projects => 0.6,
            Section::Experience => 0.76,
            Section::Contact => 0.92,
        }
    }
}

/// A social profile link shown in the about section and the footer.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Initials shown in the about section's avatar placeholder.
pub const INITIALS: &str = "RT";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/ridwantaufik/my-portfolio-modern",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/ridwan-taufik-b3624325a/",
    },
    SocialLink {
        name: "WhatsApp",
        url: "https://wa.me/6289699742360",
    },
    SocialLink {
        name: "Email",
        url: "mailto:ridwan1998taufik@gmail.com",
    },
];

/// Headline numbers shown under the about paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct AboutStat {
    pub number: &'static str,
    pub label_key: &'static str,
}

pub const ABOUT_STATS: [AboutStat; 3] = [
    AboutStat {
        number: "3+",
        label_key: "about-stat-years",
    },
    AboutStat {
        number: "50+",
        label_key: "about-stat-projects",
    },
    AboutStat {
        number: "20+",
        label_key: "about-stat-clients",
    },
];

/// A single skill with a proficiency percentage.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title_key: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title_key: "skills-category-frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Next.js", level: 85 },
            Skill { name: "Tailwind CSS", level: 95 },
            Skill { name: "Bootstrap", level: 80 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "JavaScript", level: 90 },
        ],
    },
    SkillCategory {
        title_key: "skills-category-backend",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "Express.js", level: 80 },
            Skill { name: "GraphQL", level: 75 },
            Skill { name: "Laravel", level: 70 },
            Skill { name: "PHP", level: 75 },
            Skill { name: "Python", level: 70 },
        ],
    },
    SkillCategory {
        title_key: "skills-category-database",
        skills: &[
            Skill { name: "PostgreSQL", level: 80 },
            Skill { name: "MySQL", level: 85 },
            Skill { name: "MongoDB", level: 75 },
            Skill { name: "Redis", level: 70 },
        ],
    },
    SkillCategory {
        title_key: "skills-category-tools",
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "VS Code", level: 95 },
            Skill { name: "Postman", level: 85 },
            Skill { name: "JIRA", level: 80 },
            Skill { name: "Figma", level: 70 },
        ],
    },
];

/// A portfolio project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and PostgreSQL. Features include user authentication, payment integration, and admin dashboard.",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"],
        github_url: "https://github.com/ridwantaufik/ecommerce-platform",
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application built with Next.js and MongoDB. Real-time updates with Socket.io and drag-and-drop functionality.",
        technologies: &["Next.js", "MongoDB", "Socket.io", "Framer Motion"],
        github_url: "https://github.com/ridwantaufik/task-manager",
        featured: true,
    },
    Project {
        title: "Weather Dashboard",
        description: "A responsive weather dashboard with location-based forecasts, interactive maps, and data visualization using Chart.js.",
        technologies: &["React", "Chart.js", "OpenWeather API", "Mapbox"],
        github_url: "https://github.com/ridwantaufik/weather-dashboard",
        featured: false,
    },
    Project {
        title: "Social Media Analytics",
        description: "Analytics dashboard for social media metrics with real-time data processing and beautiful visualizations.",
        technologies: &["Vue.js", "Laravel", "MySQL", "D3.js"],
        github_url: "https://github.com/ridwantaufik/social-analytics",
        featured: false,
    },
    Project {
        title: "Learning Management System",
        description: "A comprehensive LMS with course management, video streaming, quizzes, and progress tracking for students and instructors.",
        technologies: &["Next.js", "Prisma", "PostgreSQL", "AWS S3"],
        github_url: "https://github.com/ridwantaufik/lms-platform",
        featured: true,
    },
    Project {
        title: "Real Estate Platform",
        description: "Property listing platform with advanced search filters, virtual tours, and integrated mortgage calculator.",
        technologies: &["React", "Express.js", "MongoDB", "Cloudinary"],
        github_url: "https://github.com/ridwantaufik/real-estate",
        featured: false,
    },
];

/// One entry in the work history timeline.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 2] = [
    Experience {
        title: "Full Stack Developer (Self-Employed)",
        company: "Freelance / Remote",
        location: "Remote",
        period: "2022 - 2025",
        description: "Delivered multiple full-stack projects for clients worldwide with modern tech stack, real-time capabilities, and secure architecture.",
        responsibilities: &[
            "Developed Corporate Finance Hub: Role-based access, GraphQL backend, real-time Socket.io integration",
            "Built UMKM Sales Information System: JWT auth, CAPTCHA, printable reports, responsive UI",
            "Created Vehicle Service Management: service tracking, job queueing, mechanic assignment",
            "Built Clinic Management System: multi-role system for patient records and appointments",
            "Engineered AI suite using Python + OpenCV: face recognition, gesture control, motion detection",
            "Developed English Learning Platform: WebRTC video call, TTS/STT, DeepSeek AI integration",
            "Worked across full stack with scalable architecture, reusable components, and CI/CD deployment",
        ],
        technologies: &[
            "Next.js", "React", "TypeScript", "Node.js", "Express", "GraphQL", "REST API",
            "PostgreSQL", "Prisma", "Tailwind CSS", "Socket.io", "JWT", "OAuth", "Git",
            "Postman", "Vercel", "Railway",
        ],
    },
    Experience {
        title: "Operator Leader & Robotic Controller",
        company: "PT. Astra Honda Motor",
        location: "Jakarta, Indonesia",
        period: "2019 - 2021",
        description: "Oversaw and managed production processes and robots, ensuring high quality and efficiency standards in manufacturing.",
        responsibilities: &[
            "Managed 3 robots and 7 CNC machines including turning, drilling, leak test, boring, honing",
            "Maintained production target of 400 units/day with high safety and quality compliance",
            "Led 6-member team for troubleshooting and performance improvement initiatives",
            "Optimized robotic workflow for reliability and efficiency in production lines",
        ],
        technologies: &["CNC", "Robotics", "Manufacturing Systems", "Process Optimization"],
    },
];

/// A labeled contact detail shown next to the form.
#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub label_key: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label_key: "contact-label-email",
        value: "ridwan1998taufik@gmail.com",
    },
    ContactDetail {
        label_key: "contact-label-phone",
        value: "+62 896-9974-2360",
    },
    ContactDetail {
        label_key: "contact-label-location",
        value: "Bandung, Indonesia",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_sections_are_a_subset_of_all_in_page_order() {
        let mut last_index = 0;
        for section in Section::NAV {
            let index = Section::ALL
                .iter()
                .position(|s| *s == section)
                .expect("nav section missing from ALL");
            assert!(index >= last_index, "nav order must follow page order");
            last_index = index;
        }
    }

    #[test]
    fn scroll_fractions_are_monotonic_and_in_range() {
        let mut previous = -1.0f32;
        for section in Section::ALL {
            let fraction = section.scroll_fraction();
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction > previous);
            previous = fraction;
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }

    #[test]
    fn three_projects_are_featured() {
        let featured = PROJECTS.iter().filter(|p| p.featured).count();
        assert_eq!(featured, 3);
    }

    #[test]
    fn every_experience_lists_work_and_tools() {
        for experience in EXPERIENCES {
            assert!(!experience.responsibilities.is_empty());
            assert!(!experience.technologies.is_empty());
        }
    }
}
