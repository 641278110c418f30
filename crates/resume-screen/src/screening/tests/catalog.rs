use crate::screening::catalog::{RoleCatalog, RoleProfile};

#[test]
fn builtin_catalog_covers_the_portal_roles() {
    let catalog = RoleCatalog::builtin();

    assert_eq!(catalog.len(), 13);
    assert!(!catalog.is_empty());
    assert!(catalog.contains("Java Developer"));
    assert!(catalog.contains("UI/UX Designer"));
    assert!(!catalog.contains("Quantum Developer"));
}

#[test]
fn default_catalog_starts_empty() {
    let catalog = RoleCatalog::default();

    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.get("Java Developer").is_none());
}

#[test]
fn profiles_normalize_and_deduplicate_skills() {
    let profile = RoleProfile::new(
        "Data Engineer",
        &["SQL", " sql ", "Spark", "", "Airflow"],
        Some(" SQL "),
    );

    assert_eq!(profile.required_skills, vec!["sql", "spark", "airflow"]);
    assert_eq!(profile.primary_skill.as_deref(), Some("sql"));
}

#[test]
fn later_profiles_replace_earlier_ones_with_the_same_name() {
    let catalog = RoleCatalog::new([
        RoleProfile::new("Data Engineer", &["sql"], None),
        RoleProfile::new("Data Engineer", &["sql", "spark"], None),
    ]);

    assert_eq!(catalog.len(), 1);
    let profile = catalog.get("Data Engineer").expect("role present");
    assert_eq!(profile.required_skills.len(), 2);
}
