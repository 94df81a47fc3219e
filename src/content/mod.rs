//! Typed build-time content for every page section.
//!
//! Everything the page displays is a `const` in [`data`]; nothing here is
//! computed or loaded at runtime. The types exist so the section renderers
//! consume fields by name instead of positional tuples.

pub mod data;

/// Identity, tagline, and summary shown in the hero and about sections.
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about_title: &'static str,
    pub summary: &'static [&'static str],
    pub core_skills: &'static [&'static str],
    pub email: &'static str,
    pub location: &'static str,
}

/// One education card.
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub grade: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub level: &'static str,
}

/// The single professional experience card.
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub tenure: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub responsibilities: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

/// One technical skill category card.
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// One certificate card.
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// One core competency tile.
pub struct Competency {
    pub title: &'static str,
    pub description: &'static str,
}

/// One featured project card.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub repository: &'static str,
    pub category: &'static str,
}

/// An external profile link.
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}
