use crate::Project;

#[test]
fn test_project_new() {
    let project = Project::new(
        "org_acme".to_string(),
        "My Project".to_string(),
        "MYPROJ".to_string(),
    );

    assert_eq!(project.organization_id, "org_acme");
    assert_eq!(project.name, "My Project");
    assert_eq!(project.key, "MYPROJ");
    assert_eq!(project.description, None);
}

#[test]
fn test_project_new_assigns_distinct_ids() {
    let a = Project::new("org_acme".to_string(), "A".to_string(), "A".to_string());
    let b = Project::new("org_acme".to_string(), "B".to_string(), "B".to_string());

    assert_ne!(a.id, b.id);
}
