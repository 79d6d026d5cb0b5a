// Portfolio content - static, immutable page data
//
// Plain configuration consumed by the page composer. Nothing here has
// behavior; edit the constants to change what the page says.

/// External profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Hero / about block
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    /// Brand shown in the nav bar
    pub handle: &'static str,
    pub headline: &'static str,
    pub role: &'static str,
    pub badge: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub availability: &'static str,
}

/// One card in the tech stack grid
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

/// One card in the project showcase
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub repository: &'static str,
}

impl Project {
    /// Feature bullets shown on a card
    pub const VISIBLE_FEATURES: usize = 3;

    pub fn visible_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(Self::VISIBLE_FEATURES)]
    }
}

/// Everything the page renders
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub profile: Profile,
    pub socials: &'static [SocialLink],
    pub github_profile: &'static str,
    pub skills: &'static [SkillGroup],
    pub projects_intro: &'static str,
    pub projects: &'static [Project],
    pub contact_intro: &'static str,
}

impl Portfolio {
    pub fn social(&self, label: &str) -> Option<&'static SocialLink> {
        self.socials.iter().find(|s| s.label.eq_ignore_ascii_case(label))
    }
}

pub const GITHUB: SocialLink = SocialLink {
    label: "GitHub",
    url: "https://github.com/vanshbatham",
};

pub const LINKEDIN: SocialLink = SocialLink {
    label: "LinkedIn",
    url: "https://linkedin.com/in/vanshbatham",
};

pub const PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Vansh Batham",
        handle: "Vansh.java",
        headline: "Java",
        role: "Backend Developer",
        badge: "Available for Hire",
        summary: "I work with Spring Boot to build REST APIs, handle authentication, \
                  and connect applications with databases. Most of my learning comes \
                  from building real projects, fixing bugs, and improving how backend \
                  systems behave in real scenarios.",
        email: "vanshbatham.pro@gmail.com",
        availability: "Open for opportunities",
    },
    socials: &[GITHUB, LINKEDIN],
    github_profile: "https://github.com/vanshbatham",
    skills: &[
        SkillGroup {
            title: "Languages",
            icon: "</>",
            skills: &["Java", "SQL"],
        },
        SkillGroup {
            title: "Frameworks",
            icon: "[=]",
            skills: &["Spring Boot", "Hibernate/JPA", "Spring MVC", "Spring Data JPA"],
        },
        SkillGroup {
            title: "Databases",
            icon: "(db)",
            skills: &["MySQL", "Redis"],
        },
        SkillGroup {
            title: "Security",
            icon: "[#]",
            skills: &["Spring Security", "OAuth2", "JWT"],
        },
    ],
    projects_intro: "Here are some of the projects I've built. Each project focuses \
                     on a specific backend challenge, from security to caching.",
    projects: &[
        Project {
            title: "E-Commerce Platform",
            kind: "Backend System",
            description: "Production-ready E-Commerce backend built with Spring Boot, \
                          supporting scalable product management, orders, and secure \
                          role-based access.",
            tech: &[
                "Java",
                "Spring Boot",
                "Spring MVC",
                "Spring Security",
                "JPA",
                "MySQL",
                "Swagger/OpenAPI",
            ],
            features: &[
                "20+ REST APIs for users, products, categories, cart, orders, and payments",
                "Role-Based Access Control (Admin, Seller, Customer)",
                "Pagination & sorting for 1,000+ products",
                "Global exception handling & validation",
            ],
            repository: "https://github.com/vanshbatham/sb-ecommerce",
        },
        Project {
            title: "Authentication Service",
            kind: "Security & Identity",
            description: "Centralized authentication service implementing modern \
                          stateless security patterns with OAuth2 and JWT.",
            tech: &[
                "Java",
                "Spring Boot",
                "Spring Security",
                "JWT",
                "OAuth2",
                "MySQL",
            ],
            features: &[
                "Access & Refresh token authentication with rotation",
                "OAuth2 login with Google & GitHub",
                "RBAC for admin and user APIs",
                "HTTP-only cookies & password hashing",
            ],
            repository: "https://github.com/vanshbatham/auth-app",
        },
        Project {
            title: "Task Management API",
            kind: "REST API + Caching",
            description: "A scalable task management backend allowing users to manage \
                          tasks with pagination, filtering, Redis caching, and \
                          notification simulation.",
            tech: &["Java", "Spring Boot", "Spring Data JPA", "MySQL", "Redis"],
            features: &[
                "One-to-Many User-Task relationship with enums for status & priority",
                "CRUD APIs for tasks with pagination, filtering, and sorting",
                "Redis Cache-Aside pattern for read-heavy task retrieval",
                "Cache invalidation on task update & delete operations",
                "NotificationService simulation",
            ],
            repository: "https://github.com/vanshbatham/task-manager-api",
        },
    ],
    contact_intro: "Have a question or want to work together? Drop me a message!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_cards_show_at_most_three_features() {
        for project in PORTFOLIO.projects {
            assert!(project.visible_features().len() <= Project::VISIBLE_FEATURES);
        }
        assert_eq!(PORTFOLIO.projects[2].features.len(), 5);
        assert_eq!(PORTFOLIO.projects[2].visible_features().len(), 3);
    }

    #[test]
    fn social_lookup_is_case_insensitive() {
        assert_eq!(PORTFOLIO.social("github"), Some(&GITHUB));
        assert_eq!(PORTFOLIO.social("LINKEDIN"), Some(&LINKEDIN));
        assert!(PORTFOLIO.social("mastodon").is_none());
    }
}
