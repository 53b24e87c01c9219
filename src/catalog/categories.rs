//! Hand-authored job categories.
//!
//! Two lists are kept: display names per category (for `/api/categories`)
//! and catalog keys per category (for `/api/all-jobs`).  They are spelled
//! independently and may disagree; a lookup key with no catalog entry is
//! skipped when building the combined view.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Catalog;

const DISPLAY: &[(&str, &[&str])] = &[
    (
        "Software Development",
        &[
            "Software Developer",
            "Software Engineer",
            "Full Stack Developer",
            "Frontend Developer",
            "Backend Developer",
            "Mobile Developer",
        ],
    ),
    (
        "Data & AI",
        &[
            "Data Scientist",
            "Data Analyst",
            "Data Engineer",
            "Machine Learning Engineer",
            "AI Engineer",
        ],
    ),
    (
        "DevOps & Cloud",
        &[
            "DevOps Engineer",
            "Cloud Engineer",
            "System Administrator",
            "Network Engineer",
            "Database Administrator",
        ],
    ),
    ("Design", &["UI/UX Designer", "Graphic Designer", "Web Designer"]),
    ("Management", &["Product Manager", "Project Manager", "Scrum Master"]),
    ("Quality Assurance", &["Quality Assurance Engineer", "QA Tester"]),
    ("Security", &["Security Engineer"]),
    (
        "Business",
        &[
            "Business Analyst",
            "Marketing Manager",
            "Sales Manager",
            "Customer Success Manager",
            "HR Manager",
            "Financial Analyst",
            "Accountant",
        ],
    ),
    (
        "Content & Marketing",
        &[
            "Technical Writer",
            "Content Writer",
            "SEO Specialist",
            "Digital Marketing Specialist",
        ],
    ),
];

const LOOKUP: &[(&str, &[&str])] = &[
    (
        "Software Development",
        &[
            "software developer",
            "software engineer",
            "full stack developer",
            "frontend developer",
            "backend developer",
            "mobile developer",
        ],
    ),
    (
        "Data & AI",
        &[
            "data scientist",
            "data analyst",
            "data engineer",
            "machine learning engineer",
            "ai engineer",
        ],
    ),
    (
        "DevOps & Cloud",
        &[
            "devops engineer",
            "cloud engineer",
            "system administrator",
            "network engineer",
            "database administrator",
        ],
    ),
    ("Design", &["ui/ux designer", "graphic designer", "web designer"]),
    ("Management", &["product manager", "project manager", "scrum master"]),
    (
        "Quality Assurance",
        &["quality assurance engineer", "qa tester", "qa engineer"],
    ),
    ("Security", &["security engineer"]),
    (
        "Business",
        &[
            "business analyst",
            "marketing manager",
            "sales manager",
            "customer success manager",
            "hr manager",
            "financial analyst",
            "accountant",
        ],
    ),
    (
        "Content & Marketing",
        &[
            "technical writer",
            "content writer",
            "seo specialist",
            "digital marketing specialist",
        ],
    ),
];

/// One entry of the categories view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct JobCategory {
    pub category: String,
    pub positions: Vec<String>,
}

/// The combined category → position → skills view.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AllJobs {
    pub categories: OrderedMap<OrderedMap<Vec<String>>>,
    pub total_positions: usize,
}

/// A list of pairs serialized as a JSON object, keeping insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Category definitions backing the two category views.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    display: Vec<(String, Vec<String>)>,
    lookup: Vec<(String, Vec<String>)>,
}

fn owned(defs: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    defs.iter()
        .map(|(name, items)| {
            (
                name.to_string(),
                items.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

impl CategoryIndex {
    pub fn new(display: Vec<(String, Vec<String>)>, lookup: Vec<(String, Vec<String>)>) -> Self {
        Self { display, lookup }
    }

    pub fn builtin() -> Self {
        Self::new(owned(DISPLAY), owned(LOOKUP))
    }

    /// Category → display names, exactly as defined.
    pub fn categories_view(&self) -> Vec<JobCategory> {
        self.display
            .iter()
            .map(|(name, positions)| JobCategory {
                category: name.clone(),
                positions: positions.clone(),
            })
            .collect()
    }

    /// Category → catalog key → skills.
    ///
    /// Every display category is present, even if empty.  Lookup keys
    /// without a catalog entry, and lookup categories with no display
    /// counterpart, are dropped.
    pub fn combined_view(&self, catalog: &Catalog) -> AllJobs {
        let categories = self
            .display
            .iter()
            .map(|(name, _)| {
                let positions = self
                    .lookup
                    .iter()
                    .filter(|(lookup_name, _)| lookup_name == name)
                    .flat_map(|(_, keys)| keys)
                    .filter_map(|key| {
                        catalog
                            .skills(key)
                            .map(|skills| (key.clone(), skills.to_vec()))
                    })
                    .collect();
                (name.clone(), OrderedMap(positions))
            })
            .collect();

        AllJobs {
            categories: OrderedMap(categories),
            total_positions: catalog.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            [
                ("software developer", vec!["Python", "SQL"]),
                ("qa tester", vec!["Manual Testing"]),
                ("astronaut", vec!["Zero-G"]),
            ],
            ["Software Developer", "QA Tester"],
        )
    }

    fn defs(items: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        owned(items)
    }

    #[test]
    fn categories_view_is_verbatim() {
        let idx = CategoryIndex::builtin();
        let view = idx.categories_view();
        assert_eq!(view.len(), 9);
        assert_eq!(view[0].category, "Software Development");
        assert_eq!(view[5].positions, vec!["Quality Assurance Engineer", "QA Tester"]);
    }

    #[test]
    fn combined_view_skips_keys_missing_from_catalog() {
        let idx = CategoryIndex::new(
            defs(&[("Dev", &["Software Developer", "Rust Developer"]), ("QA", &["QA Tester"])]),
            defs(&[
                ("Dev", &["software developer", "rust developer"]),
                ("QA", &["qa tester", "qa engineer"]),
            ]),
        );
        let all = idx.combined_view(&catalog());

        let dev = all.categories.get("Dev").unwrap();
        assert_eq!(dev.keys().collect::<Vec<_>>(), vec!["software developer"]);
        assert_eq!(dev.get("software developer").unwrap(), &vec!["Python", "SQL"]);

        let qa = all.categories.get("QA").unwrap();
        assert_eq!(qa.keys().collect::<Vec<_>>(), vec!["qa tester"]);
    }

    #[test]
    fn total_positions_counts_whole_catalog() {
        let idx = CategoryIndex::new(
            defs(&[("Dev", &["Software Developer"])]),
            defs(&[("Dev", &["software developer"])]),
        );
        assert_eq!(idx.combined_view(&catalog()).total_positions, 3);
    }

    #[test]
    fn empty_categories_are_still_listed() {
        let idx = CategoryIndex::new(
            defs(&[("Dev", &[]), ("Ops", &[])]),
            defs(&[("Dev", &["software developer"])]),
        );
        let all = idx.combined_view(&catalog());
        assert_eq!(all.categories.keys().collect::<Vec<_>>(), vec!["Dev", "Ops"]);
        assert!(all.categories.get("Ops").unwrap().0.is_empty());
    }

    #[test]
    fn builtin_drops_qa_engineer() {
        let all = CategoryIndex::builtin().combined_view(&Catalog::builtin());
        let qa = all.categories.get("Quality Assurance").unwrap();
        assert!(qa.get("qa engineer").is_none());
        assert!(qa.get("qa tester").is_some());
    }

    #[test]
    fn serializes_in_definition_order() {
        let all = CategoryIndex::builtin().combined_view(&Catalog::builtin());
        let json = serde_json::to_string(&all).unwrap();
        let sw = json.find("\"Software Development\"").unwrap();
        let cm = json.find("\"Content & Marketing\"").unwrap();
        assert!(sw < cm);
    }
}
