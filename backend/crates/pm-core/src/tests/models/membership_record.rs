use crate::MembershipRecord;

#[test]
fn test_normalized_role_is_lowercase() {
    let record = MembershipRecord::new("user_1", "Org:Admin");
    assert_eq!(record.normalized_role(), "org:admin");
    assert_eq!(record.role, "Org:Admin");
}
