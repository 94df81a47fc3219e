//! Outbound platform delegation.
//!
//! Nothing here talks to the network. External profile links and the
//! contact form are handed to the host platform's opener (`xdg-open`,
//! `open`, or `cmd /C start`), and the "resume download" writes the
//! generated plain-text resume to disk. Failures are reported to the
//! status bar by the caller; they never abort the app.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::content::data;

/// Errors from delegating to the host platform.
#[derive(Debug)]
pub enum LaunchError {
    /// The platform opener could not be spawned.
    Spawn { target: String, source: io::Error },

    /// No opener is known for this platform.
    UnsupportedPlatform { os: &'static str },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Spawn { target, source } => {
                write!(f, "could not open '{}': {}", target, source)
            }
            LaunchError::UnsupportedPlatform { os } => {
                write!(f, "no known opener for platform '{}'", os)
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Spawn { source, .. } => Some(source),
            LaunchError::UnsupportedPlatform { .. } => None,
        }
    }
}

/// Hand a URL (or `mailto:` link) to the platform opener.
///
/// The child is spawned detached with its stdio silenced so the terminal
/// UI is not disturbed; whether the opener ultimately succeeds is the
/// platform's business.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    let mut command = opener_command(url)?;
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|source| LaunchError::Spawn {
            target: url.to_string(),
            source,
        })
}

#[cfg(target_os = "linux")]
fn opener_command(url: &str) -> Result<Command, LaunchError> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Result<Command, LaunchError> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Result<Command, LaunchError> {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    Ok(cmd)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn opener_command(_url: &str) -> Result<Command, LaunchError> {
    Err(LaunchError::UnsupportedPlatform {
        os: std::env::consts::OS,
    })
}

/// Build the pre-filled `mailto:` URL for the contact form.
///
/// Subject is `Message from {name}`; the body repeats the sender's name
/// and address above the message. Free text passes through unvalidated,
/// only percent-encoded.
pub fn mailto_url(name: &str, email: &str, message: &str) -> String {
    let subject = format!("Message from {}", name);
    let body = format!("Name: {}\nEmail: {}\n\nMessage:\n{}\n", name, email, message);
    format!(
        "mailto:{}?subject={}&body={}",
        data::PROFILE.email,
        percent_encode(&subject),
        percent_encode(&body)
    )
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

/// The plain-text resume assembled from the content tables.
pub fn resume_text() -> String {
    let profile = &data::PROFILE;
    let mut doc = String::new();
    doc.push_str(&format!("{}\n{}\n", profile.name, profile.headline));
    doc.push_str(&format!("{} | {}\n\n", profile.email, profile.location));

    doc.push_str("PROFILE\n");
    for paragraph in profile.summary {
        doc.push_str(paragraph);
        doc.push_str("\n\n");
    }

    doc.push_str("EXPERIENCE\n");
    let exp = &data::EXPERIENCE;
    doc.push_str(&format!(
        "{} — {} ({})\n{} | {}\n",
        exp.role, exp.company, exp.tenure, exp.period, exp.location
    ));
    for item in exp.responsibilities {
        doc.push_str(&format!("  - {}\n", item));
    }
    doc.push_str("  Achievements:\n");
    for item in exp.achievements {
        doc.push_str(&format!("  - {}\n", item));
    }
    doc.push('\n');

    doc.push_str("EDUCATION\n");
    for entry in data::EDUCATION {
        doc.push_str(&format!(
            "{} — {} ({})\n  {} | {} | {}\n",
            entry.degree, entry.school, entry.level, entry.grade, entry.period, entry.location
        ));
    }
    doc.push('\n');

    doc.push_str("SKILLS\n");
    for category in data::SKILL_CATEGORIES {
        doc.push_str(&format!("{}: {}\n", category.title, category.skills.join(", ")));
    }
    doc.push('\n');

    doc.push_str("CERTIFICATES\n");
    for cert in data::CERTIFICATES {
        doc.push_str(&format!("{} — {}\n", cert.title, cert.issuer));
    }
    doc.push('\n');

    doc.push_str("PROJECTS\n");
    for project in data::PROJECTS {
        doc.push_str(&format!("{} — {}\n", project.title, project.repository));
    }
    doc.push('\n');

    doc.push_str(&format!("GitHub: {}\nLinkedIn: {}\n", data::GITHUB_URL, data::LINKEDIN_URL));
    doc
}

/// Write the resume to `path`. Returns the byte count written.
pub fn export_resume(path: &Path) -> io::Result<usize> {
    let doc = resume_text();
    fs::write(path, &doc)?;
    Ok(doc.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encoding_covers_reserved_bytes() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("x&y=z"), "x%26y%3Dz");
        assert_eq!(percent_encode("line\nbreak"), "line%0Abreak");
        assert_eq!(percent_encode("safe-._~09AZ"), "safe-._~09AZ");
    }

    #[test]
    fn mailto_url_prefills_subject_and_body() {
        let url = mailto_url("Jane Doe", "jane@example.com", "Hello there & welcome");
        assert!(url.starts_with("mailto:ariranalyst@gmail.com?subject="));
        assert!(url.contains("subject=Message%20from%20Jane%20Doe"));
        assert!(url.contains("jane%40example.com"));
        // Raw reserved characters never leak into the URL.
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn mailto_url_passes_malformed_input_through() {
        // No validation by design; garbage still produces a well-formed URL.
        let url = mailto_url("", "not-an-email", "");
        assert!(url.starts_with("mailto:"));
        assert!(url.contains("not-an-email"));
    }

    #[test]
    fn resume_text_carries_the_headline_data() {
        let doc = resume_text();
        assert!(doc.contains("Ari R"));
        assert!(doc.contains("Certified Data Scientist"));
        assert!(doc.contains("Genxlead Solutions Pvt Ltd"));
        assert!(doc.contains("Selvam College Of Technology"));
        assert!(doc.contains("https://github.com/ari-r-1"));
    }
}
