use crate::generator::naming::NameRegistry;

#[test]
fn test_claim_free_name_is_unchanged() {
  let mut registry = NameRegistry::new();
  assert_eq!(registry.claim("GetUsersQueryParams"), "GetUsersQueryParams");
  assert!(registry.contains("GetUsersQueryParams"));
  assert_eq!(registry.len(), 1);
}

#[test]
fn test_claim_appends_counter_starting_at_one() {
  let mut registry = NameRegistry::new();
  assert_eq!(registry.claim("GetUsersQueryParams"), "GetUsersQueryParams");
  assert_eq!(registry.claim("GetUsersQueryParams"), "GetUsersQueryParams1");
  assert_eq!(registry.claim("GetUsersQueryParams"), "GetUsersQueryParams2");
  assert_eq!(registry.len(), 3);
}

#[test]
fn test_claim_skips_names_taken_directly() {
  let mut registry = NameRegistry::new();
  registry.claim("Item");
  registry.claim("Item1");
  assert_eq!(registry.claim("Item"), "Item2");
}

#[test]
fn test_new_registry_is_empty() {
  let registry = NameRegistry::new();
  assert!(registry.is_empty());
  assert!(!registry.contains("Anything"));
}
