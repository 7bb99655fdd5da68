//! Skill extraction by fixed-vocabulary word-boundary matching.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

const TECH_SKILLS: [&str; 62] = [
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "php",
    "react",
    "angular",
    "vue",
    "node",
    "django",
    "flask",
    "spring",
    "express",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "oracle",
    "firebase",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ci/cd",
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "agile",
    "scrum",
    "kanban",
    "html",
    "css",
    "sass",
    "less",
    "tailwind",
    "bootstrap",
    "ai",
    "machine learning",
    "deep learning",
    "data science",
    "tensorflow",
    "pytorch",
    "product management",
    "ux",
    "ui",
    "figma",
    "sketch",
    "adobe xd",
    "data analysis",
    "tableau",
    "power bi",
    "excel",
    "r",
    "sas",
];

/// Labels rendered fully uppercase instead of title case.
const UPPERCASE_LABELS: [&str; 7] = ["html", "css", "aws", "gcp", "ai", "ui", "ux"];

lazy_static! {
    static ref SKILL_PATTERNS: Vec<(&'static str, Regex)> = TECH_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"\b{}\b", regex::escape(skill));
            (*skill, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Returns the normalized labels of every vocabulary skill found in `text`.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }

    let lowered = text.to_lowercase();
    SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lowered))
        .map(|(skill, _)| normalize_label(skill))
        .collect()
}

fn normalize_label(skill: &str) -> String {
    if UPPERCASE_LABELS.contains(&skill) {
        skill.to_uppercase()
    } else {
        title_case(skill)
    }
}

/// Capitalizes every letter that follows a non-letter, lowercasing the rest
/// ("ci/cd" -> "Ci/Cd", "power bi" -> "Power Bi").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
