use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

pub const DEFAULT_ROLE: &str = "attendee";
/// A role is only suggested when its keyword overlap exceeds this ratio.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Words, keeping hyphenated compounds such as `data-driven` whole.
const WORD_PATTERN: &str = r"\w+(?:-\w+)*";

#[derive(Debug, Clone)]
struct RoleKeywords {
    role: String,
    keywords: HashSet<String>,
}

/// Suggests an event role from free-text skills by keyword overlap.
///
/// Each role scores `|skills ∩ keywords| / |keywords|`. The best score wins,
/// ties go to the role listed first, and anything not above the threshold
/// falls back to the default role.
#[derive(Debug, Clone)]
pub struct RoleMatcher {
    roles: Vec<RoleKeywords>,
    default_role: String,
    threshold: f64,
    tokenizer: Option<Regex>,
}

impl Default for RoleMatcher {
    fn default() -> Self {
        Self::new(
            &[
                ("speaker", &["python", "data", "tech"][..]),
                ("volunteer", &["organize", "team", "help"][..]),
            ],
            DEFAULT_ROLE,
            MATCH_THRESHOLD,
        )
    }
}

impl RoleMatcher {
    pub fn new(roles: &[(&str, &[&str])], default_role: &str, threshold: f64) -> Self {
        let roles = roles
            .iter()
            .map(|(role, keywords)| RoleKeywords {
                role: role.to_string(),
                keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();

        Self {
            roles,
            default_role: default_role.to_string(),
            threshold,
            tokenizer: None,
        }
        .with_tokenizer_pattern(WORD_PATTERN)
    }

    pub fn with_tokenizer_pattern(mut self, pattern: &str) -> Self {
        self.tokenizer = match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Skill tokenizer unavailable, role matching will use the fallback: {}", e);
                None
            }
        };
        self
    }

    /// Case-folded word set, or `None` when no tokenizer is available.
    pub fn tokenize(&self, text: &str) -> Option<HashSet<String>> {
        let tokenizer = self.tokenizer.as_ref()?;
        let lowered = text.to_lowercase();
        Some(tokenizer.find_iter(&lowered).map(|m| m.as_str().to_string()).collect())
    }

    pub fn scores(&self, skills: &str) -> Vec<(&str, f64)> {
        let Some(tokens) = self.tokenize(skills) else {
            return Vec::new();
        };

        self.roles
            .iter()
            .filter(|r| !r.keywords.is_empty())
            .map(|r| {
                let hits = r.keywords.intersection(&tokens).count();
                (r.role.as_str(), hits as f64 / r.keywords.len() as f64)
            })
            .collect()
    }

    pub fn best_role(&self, skills: &str) -> &str {
        let mut best_role = self.default_role.as_str();
        let mut best_score = 0.0;

        for (role, score) in self.scores(skills) {
            if score > best_score {
                best_role = role;
                best_score = score;
            }
        }

        if best_score > self.threshold {
            best_role
        } else {
            &self.default_role
        }
    }
}
