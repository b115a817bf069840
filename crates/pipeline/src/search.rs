//! Boolean query evaluation over a candidate's searchable text.
//!
//! Queries understand the literal operators `AND`, `OR` and `NOT` plus
//! double-quoted phrases. Only one operator kind governs a query; it is
//! picked by the first match in this order:
//!
//! 1. `" not "`: split once, left must be present, right must be absent
//! 2. `" and "`: every term must be present
//! 3. `" or "`: at least one term must be present
//! 4. otherwise the whole query is a single term
//!
//! Quotes only group visually; each term is a plain substring test. There
//! is no nesting, and a query mixing operators treats the other operator
//! words as ordinary text inside its terms.

use data_loader::Candidate;

const NOT: &str = " not ";
const AND: &str = " and ";
const OR: &str = " or ";

/// Build the lowercase text blob a query is matched against.
///
/// Joins name, designation, current company, every skill, current city
/// and degree with single spaces.
pub fn searchable_text(candidate: &Candidate) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(5 + candidate.skills.len());
    parts.push(&candidate.name);
    parts.push(&candidate.designation);
    parts.push(&candidate.current_company);
    parts.extend(candidate.skills.iter().map(String::as_str));
    parts.push(&candidate.city);
    parts.push(&candidate.degree);
    parts.join(" ").to_lowercase()
}

/// A parsed search query.
///
/// Terms are stored lowercased with quotes stripped and surrounding
/// whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanQuery {
    /// Empty or whitespace-only query
    MatchAll,
    /// `left NOT right`; an empty side is `None`
    Not {
        include: Option<String>,
        exclude: Option<String>,
    },
    /// `a AND b AND c`
    All(Vec<String>),
    /// `a OR b OR c`
    Any(Vec<String>),
    /// No operator
    Contains(String),
}

impl BooleanQuery {
    /// Parse a free-text query. Never fails: anything without a
    /// recognised operator becomes a single substring term.
    pub fn parse(query: &str) -> Self {
        let lowered = query.to_lowercase();
        if lowered.trim().is_empty() {
            return BooleanQuery::MatchAll;
        }

        if let Some((left, right)) = lowered.split_once(NOT) {
            BooleanQuery::Not {
                include: non_empty(normalize_term(left)),
                exclude: non_empty(normalize_term(right)),
            }
        } else if lowered.contains(AND) {
            BooleanQuery::All(lowered.split(AND).map(normalize_term).collect())
        } else if lowered.contains(OR) {
            BooleanQuery::Any(lowered.split(OR).map(normalize_term).collect())
        } else {
            BooleanQuery::Contains(normalize_term(&lowered))
        }
    }

    /// Test the query against an already-lowercased text blob.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            BooleanQuery::MatchAll => true,
            BooleanQuery::Not { include, exclude } => {
                let included = include.as_deref().is_none_or(|term| text.contains(term));
                let excluded = exclude.as_deref().is_some_and(|term| text.contains(term));
                included && !excluded
            }
            BooleanQuery::All(terms) => terms.iter().all(|term| text.contains(term.as_str())),
            BooleanQuery::Any(terms) => terms.iter().any(|term| text.contains(term.as_str())),
            BooleanQuery::Contains(term) => text.contains(term.as_str()),
        }
    }

    /// Test the query against a candidate.
    pub fn matches_candidate(&self, candidate: &Candidate) -> bool {
        match self {
            BooleanQuery::MatchAll => true,
            _ => self.matches(&searchable_text(candidate)),
        }
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, BooleanQuery::MatchAll)
    }
}

/// Parse `query` and test it against `candidate` in one go.
pub fn matches_query(query: &str, candidate: &Candidate) -> bool {
    BooleanQuery::parse(query).matches_candidate(candidate)
}

fn normalize_term(term: &str) -> String {
    term.replace('"', "").trim().to_string()
}

fn non_empty(term: String) -> Option<String> {
    if term.is_empty() { None } else { Some(term) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer() -> Candidate {
        let mut c = Candidate::new(1, "Priya Sharma");
        c.designation = "Backend Developer".to_string();
        c.current_company = "Infosys".to_string();
        c.skills = vec!["Java".to_string(), "Spring Boot".to_string(), "AWS".to_string()];
        c.city = "Pune".to_string();
        c.degree = "B.Tech".to_string();
        c
    }

    #[test]
    fn test_searchable_text() {
        assert_eq!(
            searchable_text(&developer()),
            "priya sharma backend developer infosys java spring boot aws pune b.tech"
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let c = Candidate::new(1, "Anyone");
        assert!(matches_query("", &c));
        assert!(matches_query("   ", &c));
        assert_eq!(BooleanQuery::parse("\t\n"), BooleanQuery::MatchAll);
    }

    #[test]
    fn test_and_is_conjunctive() {
        let c = developer();
        assert!(matches_query(r#""Java" AND "Spring Boot""#, &c));
        assert!(!matches_query(r#""Java" AND "Django""#, &c));
    }

    #[test]
    fn test_or_is_disjunctive() {
        let c = developer();
        assert!(matches_query(r#""React" OR "Java""#, &c));
        assert!(!matches_query(r#""React" OR "Angular""#, &c));
    }

    #[test]
    fn test_not_excludes() {
        let c = developer();
        assert!(matches_query(r#""Developer" NOT "Python""#, &c));
        assert!(!matches_query(r#""Developer" NOT "AWS""#, &c));
        assert!(!matches_query(r#""Designer" NOT "Python""#, &c));
    }

    #[test]
    fn test_not_with_empty_left_side() {
        let c = developer();
        assert_eq!(
            BooleanQuery::parse(" NOT python"),
            BooleanQuery::Not {
                include: None,
                exclude: Some("python".to_string())
            }
        );
        assert!(matches_query(" NOT python", &c));
        assert!(!matches_query(" NOT java", &c));
    }

    #[test]
    fn test_not_splits_once() {
        assert_eq!(
            BooleanQuery::parse("java not python not go"),
            BooleanQuery::Not {
                include: Some("java".to_string()),
                exclude: Some("python not go".to_string())
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        let c = developer();
        assert_eq!(matches_query("JAVA", &c), matches_query("java", &c));
        assert!(matches_query("SPRING boot", &c));
    }

    #[test]
    fn test_quotes_are_stripped() {
        let c = developer();
        assert!(matches_query(r#""spring boot""#, &c));
        assert!(matches_query(r#"spr"ing" boot"#, &c));
    }

    #[test]
    fn test_not_takes_priority_over_and() {
        let query = BooleanQuery::parse("java and aws not python");
        assert_eq!(
            query,
            BooleanQuery::Not {
                include: Some("java and aws".to_string()),
                exclude: Some("python".to_string())
            }
        );
        // "java and aws" is matched as one literal substring
        assert!(!query.matches_candidate(&developer()));
    }

    #[test]
    fn test_and_takes_priority_over_or() {
        let query = BooleanQuery::parse("java and aws or react");
        assert_eq!(
            query,
            BooleanQuery::All(vec!["java".to_string(), "aws or react".to_string()])
        );
    }

    #[test]
    fn test_operator_needs_surrounding_spaces() {
        assert_eq!(
            BooleanQuery::parse("android"),
            BooleanQuery::Contains("android".to_string())
        );
        assert_eq!(
            BooleanQuery::parse("notary"),
            BooleanQuery::Contains("notary".to_string())
        );
    }
}
