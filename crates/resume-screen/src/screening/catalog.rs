use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A role's skill requirements. `required_skills` keeps insertion order
/// (display order only) and is lowercased and deduplicated at construction.
/// `primary_skill`, when set, can short-circuit selection under the
/// disjunctive policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role_name: String,
    pub required_skills: Vec<String>,
    pub primary_skill: Option<String>,
}

impl RoleProfile {
    pub fn new<S: Into<String>>(
        role_name: S,
        required_skills: &[&str],
        primary_skill: Option<&str>,
    ) -> Self {
        let mut seen = Vec::new();
        for skill in required_skills {
            let token = skill.trim().to_lowercase();
            if !token.is_empty() && !seen.contains(&token) {
                seen.push(token);
            }
        }

        Self {
            role_name: role_name.into(),
            required_skills: seen,
            primary_skill: primary_skill.map(|skill| skill.trim().to_lowercase()),
        }
    }
}

/// Static mapping of role name to skill requirements. Built once at startup
/// and immutable for the lifetime of the engine.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: BTreeMap<String, RoleProfile>,
}

impl RoleCatalog {
    pub fn new(profiles: impl IntoIterator<Item = RoleProfile>) -> Self {
        let mut roles = BTreeMap::new();
        for profile in profiles {
            roles.insert(profile.role_name.clone(), profile);
        }
        Self { roles }
    }

    /// The role table shipped with the legacy screening portals.
    pub fn builtin() -> Self {
        Self::new([
            RoleProfile::new(
                "Java Developer",
                &[
                    "java",
                    "spring",
                    "spring boot",
                    "hibernate",
                    "sql",
                    "mysql",
                    "postgresql",
                    "oops",
                    "data structures",
                    "algorithms",
                    "rest api",
                    "microservices",
                ],
                Some("java"),
            ),
            RoleProfile::new(
                "Python Developer",
                &[
                    "python",
                    "django",
                    "flask",
                    "fastapi",
                    "sql",
                    "sqlite",
                    "postgresql",
                    "oops",
                    "rest api",
                    "unit testing",
                ],
                Some("python"),
            ),
            RoleProfile::new(
                "Machine Learning Engineer",
                &[
                    "python",
                    "machine learning",
                    "scikit-learn",
                    "pandas",
                    "numpy",
                    "statistics",
                    "model training",
                    "feature engineering",
                    "data preprocessing",
                    "ml algorithms",
                ],
                Some("machine learning"),
            ),
            RoleProfile::new(
                "Data Scientist",
                &[
                    "python",
                    "machine learning",
                    "statistics",
                    "pandas",
                    "numpy",
                    "sql",
                    "data visualization",
                    "matplotlib",
                    "seaborn",
                    "hypothesis testing",
                    "feature engineering",
                ],
                None,
            ),
            RoleProfile::new(
                "AI Engineer",
                &[
                    "python",
                    "deep learning",
                    "tensorflow",
                    "pytorch",
                    "neural networks",
                    "cnn",
                    "rnn",
                    "nlp",
                    "computer vision",
                    "model deployment",
                ],
                None,
            ),
            RoleProfile::new(
                "Web Developer",
                &[
                    "html",
                    "css",
                    "javascript",
                    "react",
                    "angular",
                    "vue",
                    "bootstrap",
                    "tailwind",
                    "rest api",
                    "responsive design",
                ],
                None,
            ),
            RoleProfile::new(
                "Full Stack Developer",
                &[
                    "html",
                    "css",
                    "javascript",
                    "react",
                    "node",
                    "express",
                    "python",
                    "django",
                    "java",
                    "sql",
                    "mongodb",
                    "rest api",
                ],
                None,
            ),
            RoleProfile::new(
                "Software Developer",
                &[
                    "java",
                    "python",
                    "c++",
                    "data structures",
                    "algorithms",
                    "oops",
                    "sql",
                    "git",
                    "problem solving",
                ],
                None,
            ),
            RoleProfile::new(
                "DevOps Engineer",
                &[
                    "linux",
                    "shell scripting",
                    "docker",
                    "kubernetes",
                    "ci/cd",
                    "jenkins",
                    "aws",
                    "azure",
                    "gcp",
                    "monitoring",
                ],
                None,
            ),
            RoleProfile::new(
                "Cloud Engineer",
                &[
                    "aws",
                    "azure",
                    "gcp",
                    "cloud computing",
                    "ec2",
                    "s3",
                    "iam",
                    "terraform",
                    "networking",
                    "security",
                ],
                None,
            ),
            RoleProfile::new(
                "Cyber Security Analyst",
                &[
                    "network security",
                    "ethical hacking",
                    "penetration testing",
                    "vulnerability assessment",
                    "firewalls",
                    "ids",
                    "ips",
                    "cryptography",
                    "incident response",
                ],
                None,
            ),
            RoleProfile::new(
                "Business Analyst",
                &[
                    "business analysis",
                    "requirements gathering",
                    "sql",
                    "excel",
                    "data analysis",
                    "power bi",
                    "tableau",
                    "stakeholder management",
                ],
                None,
            ),
            RoleProfile::new(
                "UI/UX Designer",
                &[
                    "ui design",
                    "ux design",
                    "figma",
                    "adobe xd",
                    "wireframing",
                    "prototyping",
                    "user research",
                    "usability testing",
                ],
                None,
            ),
        ])
    }

    pub fn get(&self, role_name: &str) -> Option<&RoleProfile> {
        self.roles.get(role_name)
    }

    pub fn contains(&self, role_name: &str) -> bool {
        self.roles.contains_key(role_name)
    }

    pub fn roles(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.values()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
