use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{CategorizedMembers, Category, Member};

/// Curated name -> team assignments maintained by the club, matched on
/// the lower-cased trimmed name. Consulted before any role heuristic.
static MANUAL_TEAM_MAP: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    HashMap::from([
        // Core Team
        ("nishant patil", Category::CoreTeam),
        ("janumpally sushanth reddy", Category::CoreTeam),
        ("rashmi k. murthy", Category::CoreTeam),
        // Technical Team
        ("harsh pratap singh", Category::TechnicalTeam),
        ("aditya kumar", Category::TechnicalTeam),
        ("akanksha sagar kulkarni", Category::TechnicalTeam),
        // Website Team
        ("ashish manash", Category::WebsiteTeam),
        ("bendi hema swaroop", Category::WebsiteTeam),
        ("m lakshmi padmavathi", Category::WebsiteTeam),
        // Executive Team
        ("neha ojha sikhwal", Category::ExecutiveTeam),
        ("b sai eswar", Category::ExecutiveTeam),
        ("gowtham b m", Category::ExecutiveTeam),
        ("tejas s", Category::ExecutiveTeam),
    ])
});

const FACULTY_KEYWORDS: [&str; 5] = [
    "faculty",
    "advisor",
    "professor",
    "head of department",
    "hod",
];

const TECHNICAL_KEYWORDS: [&str; 4] = ["technical", "backend", "website", "web"];

/// Assign a member to exactly one team. Total and deterministic: the
/// manual overrides win outright, then role keywords are tried in
/// priority order, and anything unmatched lands in Events Team.
pub fn classify(role: &str, name: &str) -> Category {
    let clean_name = name.trim().to_lowercase();
    if let Some(&category) = MANUAL_TEAM_MAP.get(clean_name.as_str()) {
        return category;
    }

    let role = role
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if FACULTY_KEYWORDS.iter().any(|k| role.contains(k)) {
        return Category::Faculty;
    }

    // "conven" covers both the convener and convenor spellings seen in
    // exports over the years.
    if role.contains("conven") || role.contains("executive") {
        return Category::CoreTeam;
    }

    if TECHNICAL_KEYWORDS.iter().any(|k| role.contains(k)) {
        return Category::TechnicalTeam;
    }

    Category::EventsTeam
}

/// Partition members into the six team buckets, preserving encounter
/// order within each. Every category key is present even when empty so
/// consumers can render or hide sections uniformly.
pub fn categorize_members(members: Vec<Member>) -> CategorizedMembers {
    let mut categorized: CategorizedMembers =
        Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();

    for member in members {
        categorized.entry(member.category).or_default().push(member);
    }

    categorized
}
